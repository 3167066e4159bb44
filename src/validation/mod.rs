//! Label applicability checks.

use crate::error::LabelError;
use crate::label::{Label, LabelCatalog, LabelId, LabelLevel, LabelScope, ProjectId};
use std::sync::Arc;
use tracing::debug;

/// Project a resource lives in, as far as the caller knows.
///
/// `Unscoped` is used by lookups that carry no project; it skips the scope
/// check entirely, so a project-scoped label passes validation there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectContext {
    #[default]
    Unscoped,
    Project(ProjectId),
}

impl From<ProjectId> for ProjectContext {
    fn from(id: ProjectId) -> Self {
        Self::Project(id)
    }
}

/// Only `None` means "no project". Any supplied id, even a non-positive
/// one, is checked against project-scoped labels and never bypasses scope.
impl From<Option<i64>> for ProjectContext {
    fn from(raw: Option<i64>) -> Self {
        raw.map_or(Self::Unscoped, |id| Self::Project(ProjectId(id)))
    }
}

/// Confirms labels exist and may be used in a project context
#[derive(Debug)]
pub struct AssociationValidator<C> {
    catalog: Arc<C>,
}

impl<C> Clone for AssociationValidator<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<C: LabelCatalog> AssociationValidator<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Check that a label exists and may be attached under `project`.
    ///
    /// # Errors
    ///
    /// - [`LabelError::InvalidLabelId`] for a non-positive id
    /// - [`LabelError::LabelNotFound`] if the label is absent or soft-deleted
    /// - [`LabelError::NotUserLevel`] for system labels
    /// - [`LabelError::OutOfProjectScope`] when a project label is used in another project
    /// - [`LabelError::CatalogError`] on catalog faults
    pub async fn validate(
        &self,
        label_id: i64,
        project: ProjectContext,
    ) -> Result<Label, LabelError> {
        let label = self.exists(label_id).await?;

        if label.level != LabelLevel::User {
            return Err(LabelError::NotUserLevel(label.id));
        }

        if let (LabelScope::Project { project_id: owner }, ProjectContext::Project(context)) =
            (label.scope, project)
        {
            if owner != context {
                return Err(LabelError::OutOfProjectScope {
                    label_id: label.id,
                    owner,
                    context,
                });
            }
        }

        Ok(label)
    }

    /// Look a label up without scope or level checks.
    ///
    /// # Errors
    ///
    /// Same lookup failures as [`Self::validate`].
    pub async fn exists(&self, label_id: i64) -> Result<Label, LabelError> {
        let id = LabelId::parse(label_id)?;
        match self.catalog.lookup(id).await? {
            Some(label) if !label.deleted => Ok(label),
            Some(_) => {
                debug!(label_id = %id, "label is soft-deleted");
                Err(LabelError::LabelNotFound(id))
            }
            None => Err(LabelError::LabelNotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::label::InMemoryLabelCatalog;

    fn id(raw: i64) -> LabelId {
        LabelId::parse(raw).unwrap()
    }

    fn validator() -> AssociationValidator<InMemoryLabelCatalog> {
        AssociationValidator::new(Arc::new(InMemoryLabelCatalog::new([
            Label::global(id(1), "stable"),
            Label::project(id(2), "team-a", ProjectId(10)),
            Label::global(id(3), "scanned").with_level(LabelLevel::System),
            Label::global(id(4), "retired").mark_deleted(),
        ])))
    }

    #[tokio::test]
    async fn test_global_label_valid_anywhere() {
        let v = validator();
        assert!(v.validate(1, ProjectContext::Unscoped).await.is_ok());
        assert!(v.validate(1, ProjectId(10).into()).await.is_ok());
        assert!(v.validate(1, ProjectId(11).into()).await.is_ok());
    }

    #[tokio::test]
    async fn test_project_label_scope() {
        let v = validator();
        let label = v.validate(2, ProjectId(10).into()).await.unwrap();
        assert_eq!(label.name, "team-a");

        let err = v.validate(2, ProjectId(11).into()).await.unwrap_err();
        assert!(matches!(
            err,
            LabelError::OutOfProjectScope { owner: ProjectId(10), context: ProjectId(11), .. }
        ));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[tokio::test]
    async fn test_unscoped_skips_scope_check() {
        let v = validator();
        assert!(v.validate(2, ProjectContext::Unscoped).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_and_deleted_labels_not_found() {
        let v = validator();
        for raw in [4, 99] {
            let err = v.validate(raw, ProjectContext::Unscoped).await.unwrap_err();
            assert!(matches!(err, LabelError::LabelNotFound(_)));
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }
    }

    #[tokio::test]
    async fn test_system_label_rejected() {
        let v = validator();
        let err = v.validate(3, ProjectContext::Unscoped).await.unwrap_err();
        assert!(matches!(err, LabelError::NotUserLevel(_)));
        // exists() does not care about level
        assert!(v.exists(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_non_positive_label_id() {
        let v = validator();
        let err = v.validate(0, ProjectContext::Unscoped).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(v.exists(-1).await.is_err());
    }

    #[test]
    fn test_project_context_from_option() {
        assert_eq!(ProjectContext::from(None), ProjectContext::Unscoped);
        assert_eq!(
            ProjectContext::from(Some(0)),
            ProjectContext::Project(ProjectId(0))
        );
        assert_eq!(
            ProjectContext::from(Some(-1)),
            ProjectContext::Project(ProjectId(-1))
        );
        assert_eq!(
            ProjectContext::from(Some(5)),
            ProjectContext::Project(ProjectId(5))
        );
    }

    #[tokio::test]
    async fn test_non_positive_project_id_does_not_bypass_scope() {
        let v = validator();
        for raw in [0_i64, -1] {
            let err = v.validate(2, Some(raw).into()).await.unwrap_err();
            assert!(matches!(err, LabelError::OutOfProjectScope { .. }));
        }
        assert!(v.validate(1, Some(0_i64).into()).await.is_ok());
    }
}
