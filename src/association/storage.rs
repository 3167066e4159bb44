//! Association store backed by a resource-labels.json file.

use super::set::ResourceLabelsFile;
use super::store::{AssociationStore, StoreError};
use super::types::{AssociationId, NewResourceLabel, ResourceLabel};
use crate::label::LabelId;
use crate::resource::ResourceIdentity;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Read associations from a resource-labels.json file.
/// Returns an empty set if the file doesn't exist. Anything other than a JSON
/// object is rejected, so a wrong-shaped file is never loaded as empty and
/// then overwritten.
pub async fn read_resource_labels(path: &Path) -> Result<ResourceLabelsFile, StoreError> {
    if !path.exists() {
        return Ok(ResourceLabelsFile::new());
    }

    let content = fs::read_to_string(path).await?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    if !value.is_object() {
        return Err(StoreError::JsonError(<serde_json::Error as serde::de::Error>::custom(
            "resource-labels file must be a JSON object",
        )));
    }
    let file: ResourceLabelsFile = serde_json::from_value(value)?;
    Ok(file)
}

/// Write associations to a resource-labels.json file.
/// Associations are sorted by id; the parent directory is created if needed.
pub async fn write_resource_labels(
    path: &Path,
    file: &ResourceLabelsFile,
) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut sorted = file.clone();
    sorted.resource_labels.sort_by_key(|rl| rl.id);

    let content = serde_json::to_string_pretty(&sorted)?;
    fs::write(path, content).await?;
    Ok(())
}

/// File-backed store.
///
/// Every operation runs under one in-process lock, so a single store value
/// must own the file; two processes writing the same file are not coordinated.
#[derive(Debug)]
pub struct JsonFileAssociationStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileAssociationStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AssociationStore for JsonFileAssociationStore {
    async fn list(&self, resource: &ResourceIdentity) -> Result<Vec<ResourceLabel>, StoreError> {
        let _guard = self.lock.lock().await;
        let file = read_resource_labels(&self.path).await?;
        Ok(file.list_for(resource))
    }

    async fn find(
        &self,
        resource: &ResourceIdentity,
        label_id: LabelId,
    ) -> Result<Option<ResourceLabel>, StoreError> {
        let _guard = self.lock.lock().await;
        let file = read_resource_labels(&self.path).await?;
        Ok(file.find(resource, label_id).cloned())
    }

    async fn insert(&self, new: NewResourceLabel) -> Result<AssociationId, StoreError> {
        let _guard = self.lock.lock().await;
        let mut file = read_resource_labels(&self.path).await?;
        let id = file.insert(new)?;
        write_resource_labels(&self.path, &file).await?;
        debug!(association_id = %id, path = %self.path.display(), "association written");
        Ok(id)
    }

    async fn delete(
        &self,
        resource: &ResourceIdentity,
        label_id: LabelId,
    ) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let mut file = read_resource_labels(&self.path).await?;
        if !file.remove(resource, label_id) {
            return Ok(false);
        }
        write_resource_labels(&self.path, &file).await?;
        Ok(true)
    }
}
