//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and a
//! reader that produces the document body on every request.

mod categories;

pub use categories::{CategoriesResource, CategoryList, DEFAULT_CATEGORIES};

use super::error::ResourceError;
use crate::core::config::ResourcesConfig;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Produce the current document. Called on every read; never cached.
    fn read(config: &ResourcesConfig) -> Result<String, ResourceError>;
}
