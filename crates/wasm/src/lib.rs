//! WebAssembly bindings for Folio pages.
//!
//! This crate mounts a Folio portfolio page into a browser document. The host
//! page provides an empty root element (`#app`, carrying the `loading` class),
//! a `config.yaml` profile document next to it, and optionally the
//! `html2pdf` bundle as a global script for the CV download.
//!
//! # Architecture
//!
//! All page logic lives in the platform-agnostic crates. This crate only
//! implements their collaborator traits over browser APIs:
//!
//! - [`FetchConfigSource`] - `ConfigSource` over the Fetch API
//! - [`DomPageHost`] - `PageHost` over the DOM and `IntersectionObserver`
//! - [`Html2PdfRenderer`] - `DocumentRenderer` over `html2pdf().set().from().save()`
//! - [`ButtonControl`], [`AlertNotifier`] - export trigger and failure notice
//! - [`FolioError`] - error types with JavaScript interop
//!
//! # Example
//!
//! ```html
//! <div id="app" class="loading">Loading...</div>
//! <script src="html2pdf.bundle.min.js"></script>
//! <script type="module">
//!   import init from './pkg/folio_wasm.js';
//!   await init();
//! </script>
//! ```
//!
//! Pages with a different layout call [`mount`] with a partial options object:
//!
//! ```js
//! import init, { mount } from './pkg/folio_wasm.js';
//! await init();
//! mount({ configPath: 'profiles/ada.yaml', rootId: 'portfolio' });
//! ```

mod control;
mod error;
mod fetch;
mod host;
mod renderer;

pub use control::{AlertNotifier, ButtonControl};
pub use error::{ErrorCode, FolioError};
pub use fetch::FetchConfigSource;
pub use host::DomPageHost;
pub use renderer::Html2PdfRenderer;

use folio_core::{App, AppError, AppOptions};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    /// Root element ids that already have a controller.
    static LAUNCHED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Initialize the WASM module and start the page.
///
/// Sets up panic hooks, then runs one initialization pass once the document
/// has finished parsing. It is called automatically when using wasm-pack's
/// generated JavaScript. A document without a page root is left untouched.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, not starting");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(|| launch_logged(AppOptions::default()));
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::error!("Could not wait for DOMContentLoaded: {:?}", e);
            return;
        }
        on_ready.forget();
    } else {
        launch_logged(AppOptions::default());
    }
}

/// Get the version of the folio-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn launch_logged(options: AppOptions) {
    if let Err(e) = launch(options) {
        log::warn!("Portfolio not started: {}", e);
    }
}

/// Mount a page with host-supplied options.
///
/// `options` is a partial object with camelCase keys (`configPath`, `rootId`,
/// `navToggleId`, ...). Missing keys keep the stock page values, and
/// `undefined` or `null` means all defaults. When the page cannot be started
/// this throws an `Error` whose `code` property is `PARSE_ERROR`,
/// `MISSING_ELEMENT` or `ALREADY_INITIALIZED`.
#[wasm_bindgen]
pub fn mount(options: JsValue) -> Result<(), JsValue> {
    let options = if options.is_undefined() || options.is_null() {
        AppOptions::default()
    } else {
        serde_wasm_bindgen::from_value::<AppOptions>(options)
            .map_err(|e| FolioError::new(ErrorCode::Parse, format!("Invalid options: {}", e)))?
    };
    launch(options).map_err(JsValue::from)
}

/// Builds the controller for `options` and spawns its initialization pass.
pub fn launch(options: AppOptions) -> Result<(), FolioError> {
    let source = FetchConfigSource::new(options.config_path.clone());
    let host = DomPageHost::new(options.clone())?;

    let already_launched = LAUNCHED.with(|launched| {
        let mut launched = launched.borrow_mut();
        if launched.contains(&options.root_id) {
            true
        } else {
            launched.push(options.root_id.clone());
            false
        }
    });
    if already_launched {
        return Err(AppError::AlreadyInitialized.into());
    }

    wasm_bindgen_futures::spawn_local(async move {
        let mut app = App::new(source, host);
        // The controller has already logged the cause and mounted the error state.
        let _ = app.initialize().await;
    });
    Ok(())
}
