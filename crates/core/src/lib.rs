//! # folio-core
//!
//! Platform-agnostic application controller.
//!
//! This crate sequences one page load: fetch the profile document, parse and
//! validate it, compose the page, mount it, wire interactions and start the
//! scroll reveal. It has **no platform dependencies**:
//! - No filesystem access (`std::fs`)
//! - No DOM bindings (`web-sys`)
//! - No async runtime (`tokio`)
//!
//! Platform work is provided through two traits:
//! - [`ConfigSource`] - delivers the raw profile document
//! - [`PageHost`] - owns the page root and attaches behaviour to it
//!
//! The browser bindings implement both over `fetch` and the DOM; the native
//! tool implements [`ConfigSource`] over the filesystem.

pub mod app;
pub mod error;
pub mod host;
pub mod options;
pub mod source;

pub use folio_page as page;
pub use folio_types as types;

pub use app::{App, AppState, LOAD_FAILURE_MESSAGE, error_markup};
pub use error::{AppError, LoadError};
pub use host::PageHost;
pub use options::AppOptions;
pub use source::{ConfigLoader, ConfigSource, InMemoryConfigSource};
