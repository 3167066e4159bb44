//! Translation of domain errors for transports.
//!
//! [`ErrorCategory`] is what a transport switches on; [`ToStructuredError`]
//! adds a stable machine code and an optional tip per variant, and
//! [`ErrorBody`] is the JSON payload built from both.

mod body;

pub use body::{ErrorBody, INTERNAL_ERROR_MESSAGE};

use crate::error::{ErrorKind, LabelError};
use http::StatusCode;

/// External failure category, one per [`ErrorKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    BadRequest,
    Conflict,
    NotFound,
    Internal,
}

impl From<ErrorKind> for ErrorCategory {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::BadRequest => Self::BadRequest,
            ErrorKind::Conflict => Self::Conflict,
            ErrorKind::NotFound => Self::NotFound,
            ErrorKind::Internal => Self::Internal,
        }
    }
}

impl ErrorCategory {
    #[must_use]
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Classify an error into its external category
#[must_use]
pub fn classify(err: &LabelError) -> ErrorCategory {
    ErrorCategory::from(err.kind())
}

/// Trait for mapping domain errors to structured error codes and optional tips.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);
}

impl ToStructuredError for LabelError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            LabelError::UnknownResourceType(_) => (
                "UNKNOWN_RESOURCE_TYPE",
                Some("Use one of: project, repository, artifact-tag, chart"),
            ),
            LabelError::InvalidResourceKey(_) => (
                "INVALID_RESOURCE_KEY",
                Some("Provide a positive id or a non-empty name"),
            ),
            LabelError::InvalidLabelId(_) => {
                ("INVALID_LABEL_ID", Some("Label ids are positive integers"))
            }
            LabelError::LabelNotFound(_) => ("LABEL_NOT_FOUND", None),
            LabelError::OutOfProjectScope { .. } => (
                "LABEL_OUT_OF_SCOPE",
                Some("Project labels can only be used on resources of their own project"),
            ),
            LabelError::NotUserLevel(_) => ("LABEL_NOT_USER_LEVEL", None),
            LabelError::AlreadyMarked { .. } => ("LABEL_ALREADY_MARKED", None),
            LabelError::AssociationNotFound { .. } => ("LABEL_NOT_MARKED", None),
            LabelError::CatalogError(_) => ("CATALOG_ERROR", None),
            LabelError::StoreError(_) => ("STORE_ERROR", None),
        }
    }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
