//! Label type definitions.

use crate::error::LabelError;
use crate::utils::now_iso;
use serde::{Deserialize, Serialize};

/// Identity of a label in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct LabelId(i64);

impl LabelId {
    /// Validate a raw label id coming from a caller.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidLabelId`] when `raw` is not positive.
    pub fn parse(raw: i64) -> Result<Self, LabelError> {
        if raw <= 0 {
            return Err(LabelError::InvalidLabelId(raw));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for LabelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of the project owning a project-scoped label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a label may be used
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum LabelScope {
    /// Usable on any resource
    Global,
    /// Usable only on resources of the owning project
    Project {
        #[serde(rename = "projectId")]
        project_id: ProjectId,
    },
}

/// Who manages a label. Only user labels can be attached to resources.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelLevel {
    System,
    #[default]
    User,
}

/// A label definition read from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional hex color (e.g., "#ef4444")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub scope: LabelScope,
    #[serde(default)]
    pub level: LabelLevel,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Label {
    fn new(id: LabelId, name: impl Into<String>, scope: LabelScope) -> Self {
        let now = now_iso();
        Self {
            id,
            name: name.into(),
            description: None,
            color: None,
            scope,
            level: LabelLevel::User,
            deleted: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// A user-level label usable on any resource
    #[must_use]
    pub fn global(id: LabelId, name: impl Into<String>) -> Self {
        Self::new(id, name, LabelScope::Global)
    }

    /// A user-level label bound to `project_id`
    #[must_use]
    pub fn project(id: LabelId, name: impl Into<String>, project_id: ProjectId) -> Self {
        Self::new(id, name, LabelScope::Project { project_id })
    }

    #[must_use]
    pub fn with_level(mut self, level: LabelLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn mark_deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Owning project for project-scoped labels
    #[must_use]
    pub fn project_id(&self) -> Option<ProjectId> {
        match self.scope {
            LabelScope::Global => None,
            LabelScope::Project { project_id } => Some(project_id),
        }
    }
}

/// The labels.json file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LabelsFile {
    #[serde(default)]
    pub labels: Vec<Label>,
}
