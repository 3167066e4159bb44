//! Label resource manager.
//!
//! [`LabelManager`] is the surface a transport talks to: list the labels of a
//! resource, mark a label onto it, remove one, and pre-check labels.
//! [`BaseManager`] implements it on top of a [`crate::label::LabelCatalog`] and
//! an [`crate::association::AssociationStore`]. It holds no mutable state of
//! its own, so one value can be cloned into every request handler.

mod base;

pub use base::BaseManager;

use crate::association::{AssociationId, JsonFileAssociationStore};
use crate::config::LabelsConfig;
use crate::error::LabelError;
use crate::label::{JsonFileLabelCatalog, Label};
use crate::resource::ResourceKey;
use crate::utils::{get_labels_path, get_resource_labels_path};
use crate::validation::ProjectContext;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Manager backed by `labels.json` and `resource-labels.json`
pub type FileManager = BaseManager<JsonFileLabelCatalog, JsonFileAssociationStore>;

/// Open a file-backed manager rooted at `data_dir`.
/// Nothing is read until the first operation.
#[must_use]
pub fn open_dir_manager(data_dir: &Path) -> FileManager {
    BaseManager::new(
        Arc::new(JsonFileLabelCatalog::new(get_labels_path(data_dir))),
        Arc::new(JsonFileAssociationStore::new(get_resource_labels_path(data_dir))),
    )
}

#[must_use]
pub fn open_file_manager(config: &LabelsConfig) -> FileManager {
    open_dir_manager(&config.storage.data_dir())
}

/// Options for marking a label onto a resource
#[derive(Debug, Clone)]
pub struct MarkLabelOptions {
    pub label_id: i64,
    pub resource_type: String,
    pub resource_key: ResourceKey,
    /// Project the resource belongs to, checked against project-scoped labels
    pub project: ProjectContext,
}

impl MarkLabelOptions {
    pub fn new(
        resource_type: impl Into<String>,
        resource_key: impl Into<ResourceKey>,
        label_id: i64,
    ) -> Self {
        Self {
            label_id,
            resource_type: resource_type.into(),
            resource_key: resource_key.into(),
            project: ProjectContext::Unscoped,
        }
    }

    #[must_use]
    pub fn in_project(mut self, project: impl Into<ProjectContext>) -> Self {
        self.project = project.into();
        self
    }
}

#[async_trait]
pub trait LabelManager: Send + Sync {
    /// Labels attached to a resource, oldest association first
    async fn get_labels_of_resource(
        &self,
        resource_type: &str,
        resource_key: ResourceKey,
    ) -> Result<Vec<Label>, LabelError>;

    /// Attach a label, returning the new association id.
    /// Marking an already attached label is a conflict, not a no-op.
    async fn mark_label_to_resource(
        &self,
        options: MarkLabelOptions,
    ) -> Result<AssociationId, LabelError>;

    /// Detach a label; a missing association is reported as not found
    async fn remove_label_from_resource(
        &self,
        resource_type: &str,
        resource_key: ResourceKey,
        label_id: i64,
    ) -> Result<(), LabelError>;

    async fn validate(&self, label_id: i64, project: ProjectContext) -> Result<Label, LabelError>;

    /// Best-effort lookup: any failure, including catalog faults, yields
    /// `None`. Use [`LabelManager::validate`] when the reason matters.
    async fn exists(&self, label_id: i64) -> Option<Label>;
}
