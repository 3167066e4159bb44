//! Common test utilities

use resource_labels::label::{Label, LabelId, LabelLevel, LabelsFile, ProjectId};
use resource_labels::utils::get_labels_path;
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

#[allow(dead_code)] // Not every test binary uses every helper
pub fn label_id(raw: i64) -> LabelId {
    LabelId::parse(raw).expect("positive label id")
}

/// The catalog shared by the integration tests:
/// 7 global, 8 owned by project 1, 9 system-level, 10 deleted
#[allow(dead_code)]
pub fn sample_labels() -> Vec<Label> {
    vec![
        Label::global(label_id(7), "release").with_color("#22c55e"),
        Label::project(label_id(8), "team-a", ProjectId(1)),
        Label::global(label_id(9), "scanned").with_level(LabelLevel::System),
        Label::global(label_id(10), "retired").mark_deleted(),
    ]
}

/// Write `labels` as the catalog file under `data_dir`
#[allow(dead_code)]
pub fn seed_labels(data_dir: &Path, labels: Vec<Label>) {
    std::fs::create_dir_all(data_dir).expect("Failed to create data dir");
    let content = serde_json::to_string_pretty(&LabelsFile { labels }).expect("serialize labels");
    std::fs::write(get_labels_path(data_dir), content).expect("Failed to write labels.json");
}
