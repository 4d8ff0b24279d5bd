//! Resources domain module.
//!
//! Resources are read-only documents fetched by URI, independent of tool
//! calls. The server exposes one: the advisory category list used by
//! clients to populate pickers.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{CategoriesResource, CategoryList, DEFAULT_CATEGORIES, ResourceDefinition};
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceEntry, ResourceService};
