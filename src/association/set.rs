use super::store::StoreError;
use super::types::{AssociationId, NewResourceLabel, ResourceLabel};
use crate::label::LabelId;
use crate::resource::ResourceIdentity;
use serde::{Deserialize, Serialize};

fn first_id() -> i64 {
    1
}

/// Container for associations, also the resource-labels.json file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLabelsFile {
    #[serde(default = "first_id")]
    pub next_id: i64,
    #[serde(default)]
    pub resource_labels: Vec<ResourceLabel>,
}

impl Default for ResourceLabelsFile {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLabelsFile {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: first_id(),
            resource_labels: Vec::new(),
        }
    }

    pub fn list_for(&self, resource: &ResourceIdentity) -> Vec<ResourceLabel> {
        let mut found: Vec<ResourceLabel> = self
            .resource_labels
            .iter()
            .filter(|rl| &rl.resource == resource)
            .cloned()
            .collect();
        found.sort_by_key(|rl| rl.id);
        found
    }

    pub fn find(&self, resource: &ResourceIdentity, label_id: LabelId) -> Option<&ResourceLabel> {
        self.resource_labels
            .iter()
            .find(|rl| rl.matches(resource, label_id))
    }

    /// Check-then-insert. Ids are never reused, even after removal.
    pub fn insert(&mut self, new: NewResourceLabel) -> Result<AssociationId, StoreError> {
        if self.find(&new.resource, new.label_id).is_some() {
            return Err(StoreError::Duplicate {
                label_id: new.label_id,
                resource: new.resource,
            });
        }

        let id = AssociationId(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(StoreError::IdExhausted)?;
        self.resource_labels.push(new.into_record(id));
        Ok(id)
    }

    /// Returns `true` if an association was removed
    pub fn remove(&mut self, resource: &ResourceIdentity, label_id: LabelId) -> bool {
        let initial_len = self.resource_labels.len();
        self.resource_labels
            .retain(|rl| !rl.matches(resource, label_id));
        self.resource_labels.len() < initial_len
    }
}
