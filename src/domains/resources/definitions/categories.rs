//! Expense categories resource definition.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::ResourceDefinition;
use crate::core::config::ResourcesConfig;
use crate::domains::resources::error::ResourceError;

/// Categories served when no backing file exists.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Business",
    "Other",
];

/// The `{"categories": [...]}` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

impl Default for CategoryList {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl CategoryList {
    /// Load the list from `path`, or the defaults if the file is absent.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} not found, serving default categories", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|source| ResourceError::InvalidContent {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Expense categories resource (read fresh from disk on every request).
pub struct CategoriesResource;

impl ResourceDefinition for CategoriesResource {
    const URI: &'static str = "expense:///categories";
    const NAME: &'static str = "Expense Categories";
    const DESCRIPTION: &'static str =
        "Suggested expense categories for populating client pickers";
    const MIME_TYPE: &'static str = "application/json";

    fn read(config: &ResourcesConfig) -> Result<String, ResourceError> {
        let list = CategoryList::load(&config.categories_path)?;
        Ok(serde_json::to_string_pretty(&list)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> ResourcesConfig {
        ResourcesConfig {
            categories_path: dir.path().join("categories.json"),
        }
    }

    #[test]
    fn test_categories_metadata() {
        assert_eq!(CategoriesResource::URI, "expense:///categories");
        assert_eq!(CategoriesResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_missing_file_serves_defaults() {
        let dir = TempDir::new().unwrap();
        let body = CategoriesResource::read(&config_in(&dir)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let categories = value["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 10);
        assert_eq!(categories[0], "Food & Dining");
        assert_eq!(categories[9], "Other");
    }

    #[test]
    fn test_file_is_reread_on_every_request() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        std::fs::write(&config.categories_path, r#"{"categories": ["Rent"]}"#).unwrap();
        let first: CategoryList =
            serde_json::from_str(&CategoriesResource::read(&config).unwrap()).unwrap();
        assert_eq!(first.categories, vec!["Rent"]);

        std::fs::write(&config.categories_path, r#"{"categories": ["Rent", "Pets"]}"#).unwrap();
        let second: CategoryList =
            serde_json::from_str(&CategoriesResource::read(&config).unwrap()).unwrap();
        assert_eq!(second.categories, vec!["Rent", "Pets"]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        std::fs::write(&config.categories_path, "not json").unwrap();

        let err = CategoriesResource::read(&config).unwrap_err();
        assert!(matches!(err, ResourceError::InvalidContent { .. }));
    }
}
