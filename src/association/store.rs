use super::types::{AssociationId, NewResourceLabel, ResourceLabel};
use crate::label::LabelId;
use crate::resource::ResourceIdentity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Label {label_id} is already attached to {resource}")]
    Duplicate {
        label_id: LabelId,
        resource: ResourceIdentity,
    },

    #[error("Association id space exhausted")]
    IdExhausted,
}

/// Persistence for resource-label associations.
///
/// `insert` must perform its existence check and the write as one step so
/// that at most one association exists per (resource, label) pair even when
/// callers race; the loser gets [`StoreError::Duplicate`].
#[async_trait]
pub trait AssociationStore: Send + Sync {
    /// All associations of a resource, ordered by ascending association id
    async fn list(&self, resource: &ResourceIdentity) -> Result<Vec<ResourceLabel>, StoreError>;

    async fn find(
        &self,
        resource: &ResourceIdentity,
        label_id: LabelId,
    ) -> Result<Option<ResourceLabel>, StoreError>;

    async fn insert(&self, new: NewResourceLabel) -> Result<AssociationId, StoreError>;

    /// Returns `true` if an association was removed
    async fn delete(
        &self,
        resource: &ResourceIdentity,
        label_id: LabelId,
    ) -> Result<bool, StoreError>;
}
