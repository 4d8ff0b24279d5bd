//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{CategoriesResource, ResourceDefinition};
use super::service::ResourceEntry;

/// Build an annotated resource entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        reader: R::read,
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![build_resource::<CategoriesResource>()]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![CategoriesResource::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 1);

        let categories = &resources[0].resource.raw;
        assert_eq!(categories.uri, "expense:///categories");
        assert_eq!(categories.mime_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_resource_uris_match_registry() {
        let registered: Vec<_> = get_all_resources()
            .iter()
            .map(|r| r.resource.raw.uri.clone())
            .collect();
        assert_eq!(registered, resource_uris());
    }
}
