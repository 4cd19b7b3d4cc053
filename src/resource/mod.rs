//! Resource abstraction layer
//!
//! This module provides a data-driven approach to discovering cloud
//! resources. Resource declarations are loaded from JSON files at compile
//! time, allowing new resource types to be added without code changes.
//!
//! # Architecture
//!
//! - [`registry`] - Loads and caches resource declarations from embedded JSON
//! - [`descriptor`] - Typed declaration structs (list/detail/attr/tags specs)
//! - [`enumerate`] - Walks a declaration into populated [`Resource`] values
//! - [`instance`] - One discovered resource with lazy details and tags
//! - [`region`] - Region resolution and filtering for global namespaces
//! - [`paths`] - Dot-notation extraction over structured responses
//!
//! # Example
//!
//! ```ignore
//! use awsweep::resource::{get_resource, Enumerator, Scope};
//!
//! async fn list_buckets(client: &dyn awsweep::ApiClient) -> Result<(), awsweep::Error> {
//!     let descriptor = get_resource("s3-buckets").unwrap();
//!     let engine = Enumerator::new();
//!     let scope = Scope::in_region("123456789012", "eu-west-1");
//!     for bucket in engine.enumerate(&descriptor, client, &scope, None, None).await? {
//!         println!("{}", bucket.id());
//!     }
//!     Ok(())
//! }
//! ```

pub mod descriptor;
pub mod enumerate;
pub mod instance;
pub mod paths;
pub mod region;
pub mod registry;

pub use descriptor::{
    AttrSpec, DetailSpec, EnumSpec, IdentitySource, LocationSpec, ResourceDescriptor, TagsSpec,
};
pub use enumerate::{Enumerator, Scope};
pub use instance::Resource;
pub use region::{LocationFilter, RegionCache, RegionFilter, DEFAULT_REGION};
pub use registry::{get_all_resource_keys, get_resource};
