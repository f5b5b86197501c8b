//! JSON bodies for the `POST /type` endpoint.
//!
//! # Wire format
//!
//! Request:
//!
//! ```json
//! { "text": "hello world" }
//! ```
//!
//! Responses:
//!
//! ```json
//! { "message": "Text received and typing initiated" }   // 200
//! { "error": "No text provided" }                         // 400
//! ```
//!
//! `text` is kept as a raw JSON value so that every "empty" value (missing,
//! `null`, `""`, `0`, `false`, `[]`, `{}`) reaches
//! [`TypeRequest::into_text`] and gets the same 400 body instead of a serde
//! rejection.  Any other non-string value is [`RequestError::NotText`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const TYPING_INITIATED: &str = "Text received and typing initiated";
pub const NO_TEXT_PROVIDED: &str = "No text provided";
pub const NOT_FOUND: &str = "Not found";

/// Validation failures for an incoming [`TypeRequest`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// `text` was missing or an empty JSON value.
    #[error("No text provided")]
    NoText,
    /// `text` held a non-empty value that is not a string, e.g. `42`.
    #[error("Text must be a string")]
    NotText,
}

/// Body of `POST /type`.  Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TypeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

impl TypeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(Value::String(text.into())),
        }
    }

    /// Returns the text to type, verbatim.
    ///
    /// The text is not trimmed: `"   "` is a valid request that types three
    /// spaces.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::NoText`] when `text` is absent or empty, and
    /// [`RequestError::NotText`] when it is any other non-string value.
    pub fn into_text(self) -> Result<String, RequestError> {
        match self.text {
            Some(Value::String(text)) if !text.is_empty() => Ok(text),
            Some(ref value) if !is_empty_value(value) => Err(RequestError::NotText),
            _ => Err(RequestError::NoText),
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// 200 body returned as soon as a typing job is scheduled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcceptedResponse {
    pub message: String,
}

impl AcceptedResponse {
    pub fn typing_initiated() -> Self {
        Self {
            message: TYPING_INITIATED.to_string(),
        }
    }
}

/// Error body shared by the 400, 404 and 422 responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn no_text() -> Self {
        Self {
            error: NO_TEXT_PROVIDED.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            error: NOT_FOUND.to_string(),
        }
    }
}

impl From<RequestError> for ErrorResponse {
    fn from(err: RequestError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
