//! Resource-label association storage.
//!
//! An association records that one label is attached to one resource. The
//! [`AssociationStore`] trait abstracts persistence; two stores are provided:
//! - [`InMemoryAssociationStore`] for tests and embedding
//! - [`JsonFileAssociationStore`], persisting to `resource-labels.json`
//!
//! Both share [`ResourceLabelsFile`] for the check-then-insert logic.

mod memory;
mod set;
mod storage;
mod store;
mod types;

pub use memory::InMemoryAssociationStore;
pub use set::ResourceLabelsFile;
pub use storage::{read_resource_labels, write_resource_labels, JsonFileAssociationStore};
pub use store::{AssociationStore, StoreError};
pub use types::{AssociationId, NewResourceLabel, ResourceLabel};
