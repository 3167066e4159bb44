use std::path::{Path, PathBuf};

/// Default name of the data folder under the user's home directory
pub const DATA_FOLDER: &str = ".resource-labels";

/// File holding the read-only label catalog
pub const LABELS_FILE: &str = "labels.json";

/// File holding resource-label associations
pub const RESOURCE_LABELS_FILE: &str = "resource-labels.json";

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Default data directory (`~/.resource-labels`), falling back to `./.resource-labels`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_FOLDER)
}

/// Get the path to the label catalog file
#[must_use]
pub fn get_labels_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LABELS_FILE)
}

/// Get the path to the association file
#[must_use]
pub fn get_resource_labels_path(data_dir: &Path) -> PathBuf {
    data_dir.join(RESOURCE_LABELS_FILE)
}
