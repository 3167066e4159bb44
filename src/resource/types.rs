//! Resource identity type definitions.

use serde::{Deserialize, Serialize};

/// Kind of entity a label can be attached to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Project,
    Repository,
    ArtifactTag,
    Chart,
}

impl ResourceType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Repository => "repository",
            Self::ArtifactTag => "artifact-tag",
            Self::Chart => "chart",
        }
    }

    /// Single-letter tag used by older clients
    #[must_use]
    pub fn short_tag(&self) -> &'static str {
        match self {
            Self::Project => "p",
            Self::Repository => "r",
            Self::ArtifactTag => "i",
            Self::Chart => "c",
        }
    }
}

impl std::str::FromStr for ResourceType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "project" | "p" => Ok(Self::Project),
            "repository" | "r" => Ok(Self::Repository),
            "artifact-tag" | "image" | "i" => Ok(Self::ArtifactTag),
            "chart" | "c" => Ok(Self::Chart),
            _ => Err(format!("Invalid resource type: {s}")),
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a resource is addressed: numeric id or name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKey {
    Id(i64),
    Name(String),
}

impl ResourceKey {
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl From<i64> for ResourceKey {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ResourceKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ResourceKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Canonical reference to one labelable resource.
///
/// Only built through [`super::resolve`], so the key is always non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentity {
    resource_type: ResourceType,
    key: ResourceKey,
}

impl ResourceIdentity {
    pub(super) fn new(resource_type: ResourceType, key: ResourceKey) -> Self {
        Self { resource_type, key }
    }

    #[must_use]
    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    #[must_use]
    pub fn key(&self) -> &ResourceKey {
        &self.key
    }
}

impl std::fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.resource_type, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_from_str() {
        assert_eq!("project".parse::<ResourceType>(), Ok(ResourceType::Project));
        assert_eq!("Repository".parse::<ResourceType>(), Ok(ResourceType::Repository));
        assert_eq!("artifact-tag".parse::<ResourceType>(), Ok(ResourceType::ArtifactTag));
        assert_eq!("image".parse::<ResourceType>(), Ok(ResourceType::ArtifactTag));
        assert_eq!("c".parse::<ResourceType>(), Ok(ResourceType::Chart));
        assert!("bogus".parse::<ResourceType>().is_err());
        assert!("".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_short_tags_parse_back() {
        for rt in [
            ResourceType::Project,
            ResourceType::Repository,
            ResourceType::ArtifactTag,
            ResourceType::Chart,
        ] {
            assert_eq!(rt.short_tag().parse::<ResourceType>(), Ok(rt));
            assert_eq!(rt.as_str().parse::<ResourceType>(), Ok(rt));
        }
    }

    #[test]
    fn test_identity_display() {
        let identity =
            ResourceIdentity::new(ResourceType::Repository, ResourceKey::name("lib/app"));
        assert_eq!(identity.to_string(), "repository:lib/app");

        let identity = ResourceIdentity::new(ResourceType::Project, ResourceKey::Id(3));
        assert_eq!(identity.to_string(), "project:3");
    }

    #[test]
    fn test_identity_serialization() {
        let identity =
            ResourceIdentity::new(ResourceType::ArtifactTag, ResourceKey::name("lib/app:1.0"));
        let json = serde_json::to_string(&identity).unwrap();
        assert!(json.contains("\"resourceType\":\"artifact-tag\""));
        assert!(json.contains("\"name\":\"lib/app:1.0\""));
    }
}
