#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{create_test_dir, label_id, sample_labels, seed_labels};
use futures::future::join_all;
use resource_labels::association::{read_resource_labels, AssociationId};
use resource_labels::config::load_config;
use resource_labels::error::{ErrorKind, LabelError};
use resource_labels::label::ProjectId;
use resource_labels::manager::{
    open_dir_manager, open_file_manager, LabelManager, MarkLabelOptions,
};
use resource_labels::resource::ResourceKey;
use resource_labels::utils::get_resource_labels_path;
use resource_labels::validation::ProjectContext;

#[tokio::test]
async fn test_mark_list_remove_remark_on_repository() {
    let temp_dir = create_test_dir();
    seed_labels(temp_dir.path(), sample_labels());
    let manager = open_dir_manager(temp_dir.path());

    let id = manager
        .mark_label_to_resource(MarkLabelOptions::new("repository", "lib/app", 7))
        .await
        .expect("Should mark label 7");
    assert_eq!(id, AssociationId(1));

    let labels = manager
        .get_labels_of_resource("repository", ResourceKey::name("lib/app"))
        .await
        .expect("Should list labels");
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].id, label_id(7));
    assert_eq!(labels[0].name, "release");

    let err = manager
        .mark_label_to_resource(MarkLabelOptions::new("repository", "lib/app", 7))
        .await
        .unwrap_err();
    assert!(matches!(err, LabelError::AlreadyMarked { .. }));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    manager
        .remove_label_from_resource("repository", ResourceKey::name("lib/app"), 7)
        .await
        .expect("Should remove label 7");
    assert!(manager
        .get_labels_of_resource("repository", ResourceKey::name("lib/app"))
        .await
        .unwrap()
        .is_empty());

    // Ids are never reused after a removal
    let id = manager
        .mark_label_to_resource(MarkLabelOptions::new("repository", "lib/app", 7))
        .await
        .expect("Should mark label 7 again");
    assert_eq!(id, AssociationId(2));
}

#[tokio::test]
async fn test_associations_survive_reopen() {
    let temp_dir = create_test_dir();
    seed_labels(temp_dir.path(), sample_labels());

    {
        let manager = open_dir_manager(temp_dir.path());
        manager
            .mark_label_to_resource(
                MarkLabelOptions::new("project", 1_i64, 8).in_project(ProjectId(1)),
            )
            .await
            .expect("Should mark project label");
        manager
            .mark_label_to_resource(MarkLabelOptions::new("project", 1_i64, 7))
            .await
            .expect("Should mark global label");
    }

    let file = read_resource_labels(&get_resource_labels_path(temp_dir.path()))
        .await
        .expect("Should read association file");
    assert_eq!(file.next_id, 3);
    assert_eq!(file.resource_labels.len(), 2);

    let manager = open_dir_manager(temp_dir.path());
    let ids: Vec<i64> = manager
        .get_labels_of_resource("p", ResourceKey::Id(1))
        .await
        .expect("Should list labels")
        .iter()
        .map(|l| l.id.get())
        .collect();
    assert_eq!(ids, vec![8, 7]);
}

#[tokio::test]
async fn test_project_label_outside_its_project() {
    let temp_dir = create_test_dir();
    seed_labels(temp_dir.path(), sample_labels());
    let manager = open_dir_manager(temp_dir.path());

    let err = manager
        .mark_label_to_resource(
            MarkLabelOptions::new("repository", "team-b/api", 8).in_project(ProjectId(2)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);

    // Nothing was written for the rejected mark
    assert!(!get_resource_labels_path(temp_dir.path()).exists());

    manager
        .mark_label_to_resource(
            MarkLabelOptions::new("repository", "team-a/api", 8).in_project(Some(1_i64)),
        )
        .await
        .expect("Owning project may use its label");
}

#[tokio::test]
async fn test_non_positive_project_context_keeps_scope_check() {
    let temp_dir = create_test_dir();
    seed_labels(temp_dir.path(), sample_labels());
    let manager = open_dir_manager(temp_dir.path());

    for raw in [0_i64, -4] {
        let err = manager
            .mark_label_to_resource(
                MarkLabelOptions::new("repository", "team-a/api", 8).in_project(Some(raw)),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LabelError::OutOfProjectScope { .. }), "project {raw}");
    }
    assert!(!get_resource_labels_path(temp_dir.path()).exists());
}

#[tokio::test]
async fn test_rejected_labels() {
    let temp_dir = create_test_dir();
    seed_labels(temp_dir.path(), sample_labels());
    let manager = open_dir_manager(temp_dir.path());

    let cases = [
        (9, ErrorKind::BadRequest),
        (10, ErrorKind::NotFound),
        (404, ErrorKind::NotFound),
        (0, ErrorKind::BadRequest),
    ];
    for (raw, kind) in cases {
        let err = manager
            .mark_label_to_resource(MarkLabelOptions::new("chart", "lib/redis", raw))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), kind, "label {raw}: {err}");
    }

    let err = manager
        .mark_label_to_resource(MarkLabelOptions::new("helm", "lib/redis", 7))
        .await
        .unwrap_err();
    assert!(matches!(err, LabelError::UnknownResourceType(_)));
}

#[tokio::test]
async fn test_validate_and_exists_against_file_catalog() {
    let temp_dir = create_test_dir();
    seed_labels(temp_dir.path(), sample_labels());
    let manager = open_dir_manager(temp_dir.path());

    let label = manager
        .validate(8, ProjectContext::Unscoped)
        .await
        .expect("Unscoped context skips the scope check");
    assert_eq!(label.project_id(), Some(ProjectId(1)));

    assert!(manager.exists(7).await.is_some());
    assert!(manager.exists(10).await.is_none());
    assert!(manager.exists(-3).await.is_none());
}

#[tokio::test]
async fn test_missing_catalog_file_means_no_labels() {
    let temp_dir = create_test_dir();
    let manager = open_dir_manager(temp_dir.path());

    let err = manager
        .mark_label_to_resource(MarkLabelOptions::new("repository", "lib/app", 7))
        .await
        .unwrap_err();
    assert!(matches!(err, LabelError::LabelNotFound(_)));

    assert!(manager
        .get_labels_of_resource("repository", ResourceKey::name("lib/app"))
        .await
        .expect("Empty store lists nothing")
        .is_empty());
}

#[tokio::test]
async fn test_corrupt_association_file_is_internal() {
    let temp_dir = create_test_dir();
    seed_labels(temp_dir.path(), sample_labels());
    std::fs::write(get_resource_labels_path(temp_dir.path()), "{ not json").unwrap();
    let manager = open_dir_manager(temp_dir.path());

    let err = manager
        .get_labels_of_resource("repository", ResourceKey::name("lib/app"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_corrupt_catalog_file_is_internal() {
    let temp_dir = create_test_dir();
    std::fs::write(temp_dir.path().join("labels.json"), "{ not json").unwrap();
    let manager = open_dir_manager(temp_dir.path());

    let err = manager
        .validate(7, ProjectContext::Unscoped)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);

    let err = manager
        .mark_label_to_resource(MarkLabelOptions::new("repository", "lib/app", 7))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(!get_resource_labels_path(temp_dir.path()).exists());

    assert!(manager.exists(7).await.is_none());
}

#[tokio::test]
async fn test_concurrent_marks_of_same_pair() {
    let temp_dir = create_test_dir();
    seed_labels(temp_dir.path(), sample_labels());
    let manager = open_dir_manager(temp_dir.path());

    let attempts = (0..8).map(|_| {
        let manager = manager.clone();
        async move {
            manager
                .mark_label_to_resource(MarkLabelOptions::new("artifact-tag", "lib/app:1.0", 7))
                .await
        }
    });
    let results = join_all(attempts).await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    for result in results.iter().filter(|r| r.is_err()) {
        assert_eq!(result.as_ref().unwrap_err().kind(), ErrorKind::Conflict);
    }

    let labels = manager
        .get_labels_of_resource("image", ResourceKey::name("lib/app:1.0"))
        .await
        .unwrap();
    assert_eq!(labels.len(), 1);
}

#[tokio::test]
async fn test_open_from_config_file() {
    let temp_dir = create_test_dir();
    let data_dir = temp_dir.path().join("data");
    seed_labels(&data_dir, sample_labels());

    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!("[storage]\ndata_dir = {:?}\n", data_dir.to_string_lossy()),
    )
    .unwrap();

    let config = load_config(&config_path).expect("Should load config");
    let manager = open_file_manager(&config);
    manager
        .mark_label_to_resource(MarkLabelOptions::new("r", "lib/app", 7))
        .await
        .expect("Should mark through configured data dir");

    assert!(get_resource_labels_path(&data_dir).exists());
}
