//! # folio
//!
//! Portfolio/CV page and print document generation from a declarative YAML
//! profile.
//!
//! The page itself is mounted in the browser by `folio-wasm`. This crate is
//! the native side: it re-exports the platform-agnostic crates and adds
//! filesystem loading and print renderers for the `folio` command-line tool.
//!
//! ## Module Structure
//!
//! - [`source`] - profile documents read from disk
//! - [`render`] - print renderers that write HTML or drive headless Chromium
//! - [`console`] - terminal stand-ins for the export trigger and failure notice
//! - [`commands`] - the `check` and `export` operations behind the CLI

pub mod commands;
pub mod console;
pub mod error;
pub mod render;
pub mod source;

// Re-export the workspace crates
pub use folio_core as core;
pub use folio_interact as interact;
pub use folio_markup as markup;
pub use folio_page as page;
pub use folio_print as print;
pub use folio_types as types;

pub use commands::{ProfileSummary, check, export};
pub use error::CliError;
pub use source::FileConfigSource;
