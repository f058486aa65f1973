//! Error handling for WASM bindings.
//!
//! Converts Folio's error types into JavaScript-friendly errors.

use folio_core::AppError;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The profile document could not be fetched
    Load,
    /// The profile document is not valid YAML or has the wrong shape
    Parse,
    /// A required profile value is blank
    Render,
    /// A required page element is missing
    MissingElement,
    /// The page was already initialized
    AlreadyInitialized,
    /// A DOM call failed
    Dom,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Load => "LOAD_ERROR",
            ErrorCode::Parse => "PARSE_ERROR",
            ErrorCode::Render => "RENDER_ERROR",
            ErrorCode::MissingElement => "MISSING_ELEMENT",
            ErrorCode::AlreadyInitialized => "ALREADY_INITIALIZED",
            ErrorCode::Dom => "DOM_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FolioError {
    code: ErrorCode,
    message: String,
}

impl FolioError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a DOM error.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AppError> for FolioError {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::Load(_) => ErrorCode::Load,
            AppError::Parse(_) => ErrorCode::Parse,
            AppError::Render(_) => ErrorCode::Render,
            AppError::MissingElement(_) => ErrorCode::MissingElement,
            AppError::AlreadyInitialized => ErrorCode::AlreadyInitialized,
        };
        Self::new(code, err.to_string())
    }
}

impl From<FolioError> for JsValue {
    fn from(err: FolioError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();

        js_error.into()
    }
}

/// Renders a thrown JS value for log lines.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
