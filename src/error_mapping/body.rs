use super::{classify, ErrorCategory, ToStructuredError};
use serde::Serialize;
use std::fmt::Display;

/// Message returned in place of internal error detail
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// JSON error payload handed to transports
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl ErrorBody {
    pub fn new(code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            message,
            tip: None,
        }
    }

    #[must_use]
    pub fn with_tip(mut self, tip: &str) -> Self {
        self.tip = Some(tip.to_string());
        self
    }

    /// Build the payload for a label error.
    ///
    /// Internal errors keep their code but never leak their message.
    pub fn from_error(err: &crate::error::LabelError) -> Self {
        let mut body = Self::from_structured(err);
        if classify(err) == ErrorCategory::Internal {
            tracing::error!(code = %body.code, error = %err, "internal error");
            body.message = INTERNAL_ERROR_MESSAGE.to_string();
        }
        body
    }

    fn from_structured<E: ToStructuredError + Display>(err: &E) -> Self {
        let (code, tip) = err.error_code_and_tip();
        let body = Self::new(code, err.to_string());
        match tip {
            Some(tip) => body.with_tip(tip),
            None => body,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            // Fallback: produce a minimal valid JSON manually
            r#"{"code":"INTERNAL_ERROR","message":"serialization error"}"#.to_string()
        })
    }
}
