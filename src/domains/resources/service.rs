//! Resource service implementation.
//!
//! The ResourceService lists registered resources and reads them by URI.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::ResourcesConfig;

/// Produces a resource body from the current configuration.
pub type ResourceReader = fn(&ResourcesConfig) -> Result<String, ResourceError>;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Reader invoked on every request.
    pub reader: ResourceReader,
}

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Configuration for the resources domain.
    config: ResourcesConfig,

    /// Key: resource URI.
    resources: HashMap<String, ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(config: ResourcesConfig) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| {
                info!("Registering resource: {}", entry.resource.raw.uri);
                (entry.resource.raw.uri.clone(), entry)
            })
            .collect();

        Self { config, resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        let mut resources: Vec<_> = self
            .resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect();
        resources.sort_by(|a, b| a.raw.uri.cmp(&b.raw.uri));
        resources
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let body = (entry.reader)(&self.config)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text: body,
                meta: None,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_service(dir: &TempDir) -> ResourceService {
        ResourceService::new(ResourcesConfig {
            categories_path: dir.path().join("categories.json"),
        })
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let dir = TempDir::new().unwrap();
        let resources = test_service(&dir).list_resources().await;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.name, "Expense Categories");
    }

    #[tokio::test]
    async fn test_read_categories() {
        let dir = TempDir::new().unwrap();
        let result = test_service(&dir)
            .read_resource("expense:///categories")
            .await
            .unwrap();

        assert_eq!(result.contents.len(), 1);
        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                mime_type, text, ..
            } => {
                assert_eq!(mime_type.as_deref(), Some("application/json"));
                assert!(text.contains("Bills & Utilities"));
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let dir = TempDir::new().unwrap();
        let result = test_service(&dir)
            .read_resource("expense:///nonexistent")
            .await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
