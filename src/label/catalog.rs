//! Read-only access to label definitions.

use super::types::{Label, LabelId};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Source of label definitions.
///
/// Lookups are synchronous from the caller's point of view; no caching is
/// assumed, so implementations may hit their backing storage on every call.
#[async_trait]
pub trait LabelCatalog: Send + Sync {
    /// Fetch a label by id, `Ok(None)` if the catalog has no such label.
    async fn lookup(&self, id: LabelId) -> Result<Option<Label>, CatalogError>;

    /// Fetch several labels; ids the catalog does not know are left out.
    async fn lookup_many(&self, ids: &[LabelId]) -> Result<HashMap<LabelId, Label>, CatalogError> {
        let mut found = HashMap::with_capacity(ids.len());
        for &id in ids {
            if let Some(label) = self.lookup(id).await? {
                found.insert(id, label);
            }
        }
        Ok(found)
    }
}

/// Catalog held entirely in memory, seeded at construction
#[derive(Debug, Clone, Default)]
pub struct InMemoryLabelCatalog {
    labels: HashMap<LabelId, Label>,
}

impl InMemoryLabelCatalog {
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = Label>) -> Self {
        Self {
            labels: labels.into_iter().map(|l| (l.id, l)).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[async_trait]
impl LabelCatalog for InMemoryLabelCatalog {
    async fn lookup(&self, id: LabelId) -> Result<Option<Label>, CatalogError> {
        Ok(self.labels.get(&id).cloned())
    }
}
