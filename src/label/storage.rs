//! Label catalog backed by a labels.json file.

use super::catalog::{CatalogError, LabelCatalog};
use super::types::{Label, LabelId, LabelsFile};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Read labels from a labels.json file.
/// Returns an empty list if the file doesn't exist.
pub async fn read_labels(labels_path: &Path) -> Result<Vec<Label>, CatalogError> {
    if !labels_path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(labels_path).await?;
    let labels_file: LabelsFile = serde_json::from_str(&content)?;

    Ok(labels_file.labels)
}

/// Find a label by id in a list of labels.
pub fn find_label_by_id(labels: &[Label], id: LabelId) -> Option<&Label> {
    labels.iter().find(|l| l.id == id)
}

/// Catalog that re-reads its file on every call, so edits made by the
/// catalog owner are visible immediately. Each call parses the whole file;
/// use [`LabelCatalog::lookup_many`] to resolve several ids with one read.
#[derive(Debug, Clone)]
pub struct JsonFileLabelCatalog {
    path: PathBuf,
}

impl JsonFileLabelCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LabelCatalog for JsonFileLabelCatalog {
    async fn lookup(&self, id: LabelId) -> Result<Option<Label>, CatalogError> {
        let labels = read_labels(&self.path).await?;
        let label = find_label_by_id(&labels, id).cloned();
        debug!(label_id = %id, found = label.is_some(), "catalog lookup");
        Ok(label)
    }

    async fn lookup_many(&self, ids: &[LabelId]) -> Result<HashMap<LabelId, Label>, CatalogError> {
        let found: HashMap<LabelId, Label> = read_labels(&self.path)
            .await?
            .into_iter()
            .filter(|l| ids.contains(&l.id))
            .map(|l| (l.id, l))
            .collect();
        debug!(requested = ids.len(), found = found.len(), "catalog batch lookup");
        Ok(found)
    }
}
