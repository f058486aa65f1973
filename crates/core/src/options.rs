//! Host configuration: where the profile lives and which elements to look up.

use folio_page::ids;
use serde::Deserialize;

/// Locations and element identifiers used by a page host.
///
/// Every field has a default matching the stock page template, so hosts can
/// deserialize a partial object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppOptions {
    /// Path or URL of the profile document.
    pub config_path: String,
    pub root_id: String,
    pub nav_toggle_id: String,
    pub nav_links_id: String,
    pub export_trigger_id: String,
    pub emphasis_selector: String,
    pub loading_class: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            config_path: "config.yaml".to_string(),
            root_id: "app".to_string(),
            nav_toggle_id: ids::NAV_TOGGLE_ID.to_string(),
            nav_links_id: ids::NAV_LINKS_ID.to_string(),
            export_trigger_id: ids::EXPORT_TRIGGER_ID.to_string(),
            emphasis_selector: format!(".{}", ids::EMPHASIS_CLASS),
            loading_class: ids::LOADING_CLASS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_template() {
        let options = AppOptions::default();
        assert_eq!(options.config_path, "config.yaml");
        assert_eq!(options.root_id, "app");
        assert_eq!(options.nav_toggle_id, "hamburger");
        assert_eq!(options.nav_links_id, "navLinks");
        assert_eq!(options.export_trigger_id, "downloadPdf");
        assert_eq!(options.emphasis_selector, ".last-name");
        assert_eq!(options.loading_class, "loading");
    }

    #[test]
    fn test_partial_object_keeps_defaults() {
        let options: AppOptions =
            serde_json::from_str(r#"{ "configPath": "profiles/ada.yaml", "rootId": "root" }"#)
                .unwrap();
        assert_eq!(options.config_path, "profiles/ada.yaml");
        assert_eq!(options.root_id, "root");
        assert_eq!(options.nav_links_id, "navLinks");
    }
}
