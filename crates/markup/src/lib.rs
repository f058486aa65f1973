//! A fluent, code-based API for building HTML fragments.
//!
//! Section renderers describe their output as a tree of builders instead of
//! concatenating strings. Text and attribute values are escaped when the tree
//! is rendered, so a value taken from the profile document always shows up as
//! literal text. Unescaped output is only possible through [`Raw`], which
//! accepts `&'static str` and therefore never carries document content.
//!
//! ```ignore
//! use folio_markup::builders::*;
//! use folio_markup::MarkupBuilder;
//!
//! fn stat_card(value: &str, label: &str) -> Element {
//!     div()
//!         .class("stat-card")
//!         .child(div().class("stat-number").text(value))
//!         .child(div().class("stat-label").text(label))
//! }
//!
//! let html = stat_card("15+", "Years <online>").render();
//! assert!(html.contains("Years &lt;online&gt;"));
//! ```

mod element;
mod node;
mod text;
mod url;
mod widgets;

/// Contains all the building blocks for creating markup.
///
/// Import with `use folio_markup::builders::*;` for convenience.
pub mod builders {
    pub use super::element::Element;
    pub use super::node::Fragment;
    pub use super::text::{Raw, Text};
    pub use super::widgets::*;
}

pub use self::node::MarkupBuilder;
pub use self::text::escape;
pub use self::url::{safe_href, tel_href};
