//! Resource identity resolution.
//!
//! Labels can be attached to projects, repositories, artifact tags and charts.
//! A resource is addressed by its type tag plus a numeric id or a name; the
//! key is opaque to this crate beyond being non-empty.

mod resolve;
mod types;

pub use resolve::resolve;
pub use types::{ResourceIdentity, ResourceKey, ResourceType};
