//! DOM implementations of the export trigger and failure notice.

use folio_interact::{Notifier, TriggerControl};
use web_sys::HtmlButtonElement;

/// The export trigger button.
#[derive(Debug, Clone)]
pub struct ButtonControl {
    button: HtmlButtonElement,
}

impl ButtonControl {
    pub fn new(button: HtmlButtonElement) -> Self {
        Self { button }
    }

    pub fn element(&self) -> &HtmlButtonElement {
        &self.button
    }
}

impl TriggerControl for ButtonControl {
    fn label(&self) -> String {
        self.button.text_content().unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        self.button.set_text_content(Some(label));
    }

    fn is_disabled(&self) -> bool {
        self.button.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.button.set_disabled(disabled);
    }
}

/// Shows failures with a blocking `alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify_failure(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    log::warn!("Could not show alert: {}", message);
                }
            }
            None => log::warn!("No window to show alert: {}", message),
        }
    }
}
