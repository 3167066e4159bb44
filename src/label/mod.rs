//! Label catalog access.
//!
//! Label definitions are owned by an external catalog; this module only reads
//! them. Two catalogs are provided:
//! - [`InMemoryLabelCatalog`], seeded at construction
//! - [`JsonFileLabelCatalog`], reading a `labels.json` file maintained elsewhere

mod catalog;
mod storage;
mod types;

pub use catalog::{CatalogError, InMemoryLabelCatalog, LabelCatalog};
pub use storage::{find_label_by_id, read_labels, JsonFileLabelCatalog};
pub use types::{Label, LabelId, LabelLevel, LabelScope, LabelsFile, ProjectId};
