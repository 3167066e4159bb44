//! Error types for label association operations.
//!
//! Every [`LabelError`] carries one [`ErrorKind`]; transports only need the
//! kind to pick a response, never the concrete variant.

use crate::association::StoreError;
use crate::label::{CatalogError, LabelId, ProjectId};
use crate::resource::ResourceIdentity;
use thiserror::Error;

/// Externally observable failure classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller-supplied data is structurally or semantically invalid
    BadRequest,
    /// The requested state already exists
    Conflict,
    /// A referenced label or association does not exist
    NotFound,
    /// Storage faults and anything unexpected
    Internal,
}

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("Invalid resource key: {0}")]
    InvalidResourceKey(String),

    #[error("Invalid label id: {0}")]
    InvalidLabelId(i64),

    #[error("Label {0} not found")]
    LabelNotFound(LabelId),

    #[error("Label {label_id} belongs to project {owner} and cannot be used in project {context}")]
    OutOfProjectScope {
        label_id: LabelId,
        owner: ProjectId,
        context: ProjectId,
    },

    #[error("Label {0} is a system label; only user labels can be attached to resources")]
    NotUserLevel(LabelId),

    #[error("Label {label_id} is already attached to {resource}")]
    AlreadyMarked {
        label_id: LabelId,
        resource: ResourceIdentity,
    },

    #[error("Label {label_id} is not attached to {resource}")]
    AssociationNotFound {
        label_id: LabelId,
        resource: ResourceIdentity,
    },

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Store error: {0}")]
    StoreError(StoreError),
}

impl From<StoreError> for LabelError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { label_id, resource } => {
                LabelError::AlreadyMarked { label_id, resource }
            }
            other => LabelError::StoreError(other),
        }
    }
}

impl LabelError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            LabelError::UnknownResourceType(_)
            | LabelError::InvalidResourceKey(_)
            | LabelError::InvalidLabelId(_)
            | LabelError::OutOfProjectScope { .. }
            | LabelError::NotUserLevel(_) => ErrorKind::BadRequest,
            LabelError::AlreadyMarked { .. } => ErrorKind::Conflict,
            LabelError::LabelNotFound(_) | LabelError::AssociationNotFound { .. } => {
                ErrorKind::NotFound
            }
            LabelError::CatalogError(_) | LabelError::StoreError(_) => ErrorKind::Internal,
        }
    }
}
