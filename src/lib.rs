// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod association;
pub mod config;
pub mod error;
pub mod error_mapping;
pub mod label;
pub mod logging;
pub mod manager;
pub mod resource;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use association::{
    AssociationId, AssociationStore, InMemoryAssociationStore, JsonFileAssociationStore,
    ResourceLabel, StoreError,
};
pub use config::{default_config_path, load_config, ConfigError, LabelsConfig};
pub use error::{ErrorKind, LabelError};
pub use error_mapping::{classify, ErrorBody, ErrorCategory, ToStructuredError};
pub use label::{
    CatalogError, InMemoryLabelCatalog, JsonFileLabelCatalog, Label, LabelCatalog, LabelId,
    LabelLevel, LabelScope, ProjectId,
};
pub use logging::{init_logging, LogConfig, LoggingError};
pub use manager::{
    open_dir_manager, open_file_manager, BaseManager, FileManager, LabelManager, MarkLabelOptions,
};
pub use resource::{resolve, ResourceIdentity, ResourceKey, ResourceType};
pub use validation::{AssociationValidator, ProjectContext};
