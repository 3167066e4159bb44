use super::set::ResourceLabelsFile;
use super::store::{AssociationStore, StoreError};
use super::types::{AssociationId, NewResourceLabel, ResourceLabel};
use crate::label::LabelId;
use crate::resource::ResourceIdentity;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Association store kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryAssociationStore {
    inner: Mutex<ResourceLabelsFile>,
}

impl InMemoryAssociationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of associations across all resources
    pub async fn len(&self) -> usize {
        self.inner.lock().await.resource_labels.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AssociationStore for InMemoryAssociationStore {
    async fn list(&self, resource: &ResourceIdentity) -> Result<Vec<ResourceLabel>, StoreError> {
        Ok(self.inner.lock().await.list_for(resource))
    }

    async fn find(
        &self,
        resource: &ResourceIdentity,
        label_id: LabelId,
    ) -> Result<Option<ResourceLabel>, StoreError> {
        Ok(self.inner.lock().await.find(resource, label_id).cloned())
    }

    async fn insert(&self, new: NewResourceLabel) -> Result<AssociationId, StoreError> {
        self.inner.lock().await.insert(new)
    }

    async fn delete(
        &self,
        resource: &ResourceIdentity,
        label_id: LabelId,
    ) -> Result<bool, StoreError> {
        Ok(self.inner.lock().await.remove(resource, label_id))
    }
}
