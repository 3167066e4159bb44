use crate::label::LabelId;
use crate::resource::ResourceIdentity;
use crate::utils::now_iso;
use serde::{Deserialize, Serialize};

/// Surrogate id handed back when an association is created
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AssociationId(pub i64);

impl std::fmt::Display for AssociationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fact that a label is attached to a resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLabel {
    pub id: AssociationId,
    pub label_id: LabelId,
    pub resource: ResourceIdentity,
    pub created_at: String,
    pub updated_at: String,
}

impl ResourceLabel {
    #[must_use]
    pub fn matches(&self, resource: &ResourceIdentity, label_id: LabelId) -> bool {
        self.label_id == label_id && &self.resource == resource
    }
}

/// An association about to be inserted; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResourceLabel {
    pub label_id: LabelId,
    pub resource: ResourceIdentity,
}

impl NewResourceLabel {
    #[must_use]
    pub fn new(resource: ResourceIdentity, label_id: LabelId) -> Self {
        Self { label_id, resource }
    }

    pub(crate) fn into_record(self, id: AssociationId) -> ResourceLabel {
        let now = now_iso();
        ResourceLabel {
            id,
            label_id: self.label_id,
            resource: self.resource,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
