use super::types::{ResourceIdentity, ResourceKey, ResourceType};
use crate::error::LabelError;

/// Normalize a raw resource reference into a [`ResourceIdentity`].
///
/// # Errors
///
/// Returns [`LabelError::UnknownResourceType`] for an unrecognized type tag and
/// [`LabelError::InvalidResourceKey`] for a non-positive id or a blank name.
pub fn resolve(resource_type: &str, raw_key: ResourceKey) -> Result<ResourceIdentity, LabelError> {
    let rtype: ResourceType = resource_type
        .parse()
        .map_err(|_| LabelError::UnknownResourceType(resource_type.to_string()))?;

    let key = match raw_key {
        ResourceKey::Id(id) if id <= 0 => {
            return Err(LabelError::InvalidResourceKey(format!(
                "{rtype} id must be positive, got {id}"
            )));
        }
        ResourceKey::Id(id) => ResourceKey::Id(id),
        ResourceKey::Name(name) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(LabelError::InvalidResourceKey(format!(
                    "{rtype} name cannot be empty"
                )));
            }
            ResourceKey::Name(trimmed.to_string())
        }
    };

    Ok(ResourceIdentity::new(rtype, key))
}
