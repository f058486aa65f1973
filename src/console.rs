//! Terminal implementations of the export trigger and failure notice.
//!
//! A CLI run is one trigger activation. The control still goes through the
//! busy/restore cycle so the export path is the same one the page uses.

use folio_interact::{Notifier, TriggerControl};
use std::cell::{Cell, RefCell};

/// An in-process trigger with no visual representation.
#[derive(Debug)]
pub struct ConsoleControl {
    label: RefCell<String>,
    disabled: Cell<bool>,
}

impl ConsoleControl {
    pub fn new(label: &str) -> Self {
        Self {
            label: RefCell::new(label.to_string()),
            disabled: Cell::new(false),
        }
    }
}

impl TriggerControl for ConsoleControl {
    fn label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_label(&self, label: &str) {
        log::debug!("{}", label);
        *self.label.borrow_mut() = label.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }
}

/// Prints failure notices to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify_failure(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}
