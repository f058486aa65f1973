//! Page behaviour that does not depend on a DOM implementation.
//!
//! The browser bindings translate events into calls on these types and apply
//! the results back to elements. Keeping the state here lets the same rules
//! run under native tests.
//!
//! - [`NavToggle`] - expanded/collapsed navigation menu
//! - [`EmphasisAnimation`] - hover treatment of the emphasized name
//! - [`RevealTracker`] - one-shot scroll reveal bookkeeping
//! - [`ExportOrchestrator`] - busy-guarded print export

mod emphasis;
mod error;
mod export;
mod nav;
mod reveal;

pub use emphasis::{EmphasisAnimation, PointerEvent};
pub use error::ExportError;
pub use export::{
    BUSY_LABEL, BusyGuard, DocumentRenderer, EXPORT_FAILURE_MESSAGE, ExportOrchestrator,
    ExportOutcome, Notifier, TriggerControl,
};
pub use nav::NavToggle;
pub use reveal::{IntersectionEntry, RevealOptions, RevealTracker};
