//! Profile document loading via the Fetch API.

use crate::error::describe_js;
use folio_core::{ConfigSource, LoadError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Fetches the profile document relative to the page, or from any URL the
/// page is allowed to fetch.
#[derive(Debug, Clone)]
pub struct FetchConfigSource {
    url: String,
}

impl FetchConfigSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn request_error(&self, message: impl Into<String>) -> LoadError {
        LoadError::Request {
            url: self.url.clone(),
            message: message.into(),
        }
    }
}

impl ConfigSource for FetchConfigSource {
    async fn load(&self) -> Result<String, LoadError> {
        let window = web_sys::window().ok_or_else(|| self.request_error("No window object available"))?;

        let opts = web_sys::RequestInit::new();
        opts.set_method("GET");

        let request = web_sys::Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| self.request_error(format!("Failed to create request: {}", describe_js(&e))))?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| self.request_error(format!("Fetch failed: {}", describe_js(&e))))?;

        let response: web_sys::Response = response_value
            .dyn_into()
            .map_err(|_| self.request_error("Failed to convert response"))?;

        // A 404 page body is not a profile document.
        if !response.ok() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: response.status(),
            });
        }

        let text = JsFuture::from(
            response
                .text()
                .map_err(|e| self.request_error(format!("Failed to read body: {}", describe_js(&e))))?,
        )
        .await
        .map_err(|e| self.request_error(format!("Failed to read body: {}", describe_js(&e))))?;

        text.as_string()
            .ok_or_else(|| self.request_error("Response body is not text"))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
