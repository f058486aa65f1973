//! URL handling for links whose targets come from the profile document.

const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Returns `url` if it is relative or uses an allowed scheme, `#` otherwise.
///
/// Browsers drop tabs and newlines inside a scheme, so `java\tscript:` is
/// treated the same as `javascript:`.
pub fn safe_href(url: &str) -> String {
    let trimmed = url.trim();
    let scheme_end = trimmed.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(pos) if trimmed[pos..].starts_with(':') => {
            let scheme: String = trimmed[..pos]
                .chars()
                .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
                .collect::<String>()
                .to_ascii_lowercase();
            if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                trimmed.to_string()
            } else {
                "#".to_string()
            }
        }
        _ => trimmed.to_string(),
    }
}

/// Builds a `tel:` link target with every whitespace character removed.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}
