//! Identifiers the interaction layer looks up in the rendered page.

/// Navigation toggle control.
pub const NAV_TOGGLE_ID: &str = "hamburger";
/// Navigation link list.
pub const NAV_LINKS_ID: &str = "navLinks";
/// Class on every navigation link.
pub const NAV_LINKS_CLASS: &str = "nav-links";
/// Class toggled on the link list while the menu is open.
pub const NAV_EXPANDED_CLASS: &str = "active";
/// Export trigger button.
pub const EXPORT_TRIGGER_ID: &str = "downloadPdf";
/// Label of the export trigger at rest.
pub const EXPORT_TRIGGER_LABEL: &str = "⬇ Download CV";
/// Class of the hover-emphasis element.
pub const EMPHASIS_CLASS: &str = "last-name";
/// Blocks tagged for scroll reveal.
pub const REVEAL_CLASS: &str = "fade-in";
/// Added to a reveal block once it has been seen.
pub const VISIBLE_CLASS: &str = "visible";
/// Present on the page root until content is mounted.
pub const LOADING_CLASS: &str = "loading";
