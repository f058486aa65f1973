//! Document rendering through the page's `html2pdf` bundle.
//!
//! The bundle is loaded by the host page as a global script. When it is
//! missing, every export fails with [`ExportError::Unavailable`] and the page
//! keeps working.

use crate::error::describe_js;
use folio_interact::{DocumentRenderer, ExportError};
use folio_print::{ExportOptions, PrintDocument};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// Worker returned by the global `html2pdf()` factory.
    type Html2PdfWorker;

    #[wasm_bindgen(catch, js_name = html2pdf)]
    fn html2pdf() -> Result<Html2PdfWorker, JsValue>;

    #[wasm_bindgen(method)]
    fn set(this: &Html2PdfWorker, options: &JsValue) -> Html2PdfWorker;

    #[wasm_bindgen(method, js_name = from)]
    fn from_element(this: &Html2PdfWorker, element: &web_sys::HtmlElement) -> Html2PdfWorker;

    #[wasm_bindgen(method)]
    fn save(this: &Html2PdfWorker) -> js_sys::Promise;
}

/// Rasterizes a detached print fragment and saves it as a download.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html2PdfRenderer;

impl Html2PdfRenderer {
    fn build_fragment(document: &PrintDocument) -> Result<web_sys::HtmlElement, ExportError> {
        let dom = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::Unavailable("No document available".to_string()))?;

        let element = dom
            .create_element("div")
            .map_err(|e| ExportError::Render(describe_js(&e)))?;
        element.set_inner_html(&document.markup);

        element
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| ExportError::Render("Print container is not an HTML element".to_string()))
    }
}

impl DocumentRenderer for Html2PdfRenderer {
    async fn render(
        &self,
        document: &PrintDocument,
        options: &ExportOptions,
    ) -> Result<(), ExportError> {
        let worker = html2pdf()
            .map_err(|e| ExportError::Unavailable(format!("html2pdf is not loaded: {}", describe_js(&e))))?;

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_options = options
            .serialize(&serializer)
            .map_err(|e| ExportError::Render(format!("Failed to convert options: {}", e)))?;

        let fragment = Self::build_fragment(document)?;
        let promise = worker.set(&js_options).from_element(&fragment).save();

        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ExportError::Render(describe_js(&e)))
    }
}
