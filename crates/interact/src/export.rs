//! Export orchestration around an external document renderer.
//!
//! The trigger control's disabled state is the only concurrency guard: while
//! an export is in flight the control is disabled, and a click that finds it
//! disabled is ignored. [`BusyGuard`] restores the control on every exit path.

use crate::error::ExportError;
use folio_print::{ExportOptions, PrintDocument, compose_print};
use folio_types::Profile;

/// Trigger label while an export is running.
pub const BUSY_LABEL: &str = "⏳ Generating...";
/// Message shown to the user when an export fails.
pub const EXPORT_FAILURE_MESSAGE: &str = "Failed to generate PDF. Please try again.";

/// The button that starts an export.
pub trait TriggerControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

/// Converts a print fragment into a downloadable document.
///
/// Implementations report only success or failure; the produced file is a
/// side effect (a browser download, a file on disk).
#[allow(async_fn_in_trait)]
pub trait DocumentRenderer {
    async fn render(
        &self,
        document: &PrintDocument,
        options: &ExportOptions,
    ) -> Result<(), ExportError>;
}

/// Surfaces transient, user-facing messages.
pub trait Notifier {
    fn notify_failure(&self, message: &str);
}

/// Holds a trigger control in its busy state for as long as it lives.
pub struct BusyGuard<'a, C: TriggerControl + ?Sized> {
    control: &'a C,
    original_label: String,
}

impl<'a, C: TriggerControl + ?Sized> BusyGuard<'a, C> {
    /// Disables the control and shows [`BUSY_LABEL`]. Returns `None` if the
    /// control is already disabled.
    pub fn acquire(control: &'a C) -> Option<Self> {
        if control.is_disabled() {
            return None;
        }
        let original_label = control.label();
        control.set_label(BUSY_LABEL);
        control.set_disabled(true);
        Some(Self {
            control,
            original_label,
        })
    }
}

impl<C: TriggerControl + ?Sized> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        self.control.set_label(&self.original_label);
        self.control.set_disabled(false);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Completed { file_name: String },
    /// Another export was already running; nothing was done.
    Ignored,
}

/// Runs one export per trigger activation.
pub struct ExportOrchestrator<R, C, N> {
    renderer: R,
    control: C,
    notifier: N,
}

impl<R, C, N> ExportOrchestrator<R, C, N>
where
    R: DocumentRenderer,
    C: TriggerControl,
    N: Notifier,
{
    pub fn new(renderer: R, control: C, notifier: N) -> Self {
        Self {
            renderer,
            control,
            notifier,
        }
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Composes the print document for `profile` and hands it to the renderer.
    pub async fn export_document(&self, profile: &Profile) -> Result<ExportOutcome, ExportError> {
        let Some(busy) = BusyGuard::acquire(&self.control) else {
            log::debug!("Export already in progress, ignoring trigger");
            return Ok(ExportOutcome::Ignored);
        };

        let document = compose_print(profile);
        let options = ExportOptions::for_profile(profile);
        log::info!("Exporting {}", options.filename);

        let result = self.renderer.render(&document, &options).await;
        drop(busy);

        match result {
            Ok(()) => {
                log::info!("Export finished: {}", document.file_name);
                Ok(ExportOutcome::Completed {
                    file_name: document.file_name,
                })
            }
            Err(e) => {
                log::error!("PDF generation failed: {}", e);
                self.notifier.notify_failure(EXPORT_FAILURE_MESSAGE);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn profile() -> Profile {
        serde_yaml::from_str(include_str!("../../../tests/fixtures/profile.yaml")).unwrap()
    }

    struct FakeButton {
        label: RefCell<String>,
        disabled: Cell<bool>,
        history: RefCell<Vec<(String, bool)>>,
    }

    impl FakeButton {
        fn new() -> Self {
            Self {
                label: RefCell::new("⬇ Download CV".to_string()),
                disabled: Cell::new(false),
                history: RefCell::new(Vec::new()),
            }
        }
    }

    impl TriggerControl for FakeButton {
        fn label(&self) -> String {
            self.label.borrow().clone()
        }
        fn set_label(&self, label: &str) {
            *self.label.borrow_mut() = label.to_string();
        }
        fn is_disabled(&self) -> bool {
            self.disabled.get()
        }
        fn set_disabled(&self, disabled: bool) {
            self.disabled.set(disabled);
            self.history
                .borrow_mut()
                .push((self.label.borrow().clone(), disabled));
        }
    }

    #[derive(Default)]
    struct FakeRenderer {
        calls: Cell<usize>,
        fail: bool,
        last_options: RefCell<Option<ExportOptions>>,
    }

    impl DocumentRenderer for FakeRenderer {
        async fn render(
            &self,
            document: &PrintDocument,
            options: &ExportOptions,
        ) -> Result<(), ExportError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_options.borrow_mut() = Some(options.clone());
            assert!(document.markup.contains("pdf-container"));
            tokio::task::yield_now().await;
            if self.fail {
                Err(ExportError::Render("canvas exploded".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for FakeNotifier {
        fn notify_failure(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn test_successful_export_restores_control() {
        let orchestrator =
            ExportOrchestrator::new(FakeRenderer::default(), FakeButton::new(), FakeNotifier::default());
        let outcome = orchestrator.export_document(&profile()).await.unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Completed {
                file_name: "Ada_Lovelace_CV.pdf".to_string()
            }
        );
        assert_eq!(orchestrator.control().label(), "⬇ Download CV");
        assert!(!orchestrator.control().is_disabled());
        assert_eq!(
            *orchestrator.control().history.borrow(),
            vec![
                (BUSY_LABEL.to_string(), true),
                ("⬇ Download CV".to_string(), false)
            ]
        );
        let options = orchestrator.renderer().last_options.borrow().clone().unwrap();
        assert_eq!(options.filename, "Ada_Lovelace_CV.pdf");
    }

    #[tokio::test]
    async fn test_double_click_renders_once() {
        let orchestrator =
            ExportOrchestrator::new(FakeRenderer::default(), FakeButton::new(), FakeNotifier::default());
        let profile = profile();

        let (first, second) = tokio::join!(
            orchestrator.export_document(&profile),
            orchestrator.export_document(&profile)
        );

        assert!(matches!(first.unwrap(), ExportOutcome::Completed { .. }));
        assert_eq!(second.unwrap(), ExportOutcome::Ignored);
        assert_eq!(orchestrator.renderer().calls.get(), 1);
        assert!(!orchestrator.control().is_disabled());
    }

    #[tokio::test]
    async fn test_failure_notifies_and_restores_control() {
        let renderer = FakeRenderer {
            fail: true,
            ..Default::default()
        };
        let orchestrator = ExportOrchestrator::new(renderer, FakeButton::new(), FakeNotifier::default());

        let err = orchestrator.export_document(&profile()).await.unwrap_err();
        assert!(matches!(err, ExportError::Render(_)));
        assert_eq!(
            *orchestrator.notifier.messages.borrow(),
            vec![EXPORT_FAILURE_MESSAGE.to_string()]
        );
        assert_eq!(orchestrator.control().label(), "⬇ Download CV");
        assert!(!orchestrator.control().is_disabled());
    }

    #[tokio::test]
    async fn test_new_click_after_failure_runs_again() {
        let renderer = FakeRenderer {
            fail: true,
            ..Default::default()
        };
        let orchestrator = ExportOrchestrator::new(renderer, FakeButton::new(), FakeNotifier::default());
        let profile = profile();

        assert!(orchestrator.export_document(&profile).await.is_err());
        assert!(orchestrator.export_document(&profile).await.is_err());
        assert_eq!(orchestrator.renderer().calls.get(), 2);
    }

    #[test]
    fn test_guard_refuses_disabled_control() {
        let button = FakeButton::new();
        let guard = BusyGuard::acquire(&button).unwrap();
        assert_eq!(button.label(), BUSY_LABEL);
        assert!(BusyGuard::acquire(&button).is_none());
        drop(guard);
        assert_eq!(button.label(), "⬇ Download CV");
        assert!(!button.is_disabled());
    }
}
