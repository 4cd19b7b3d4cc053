//! Metadata-driven enumeration engine for AWS resource inventories.
//!
//! A resource type is declared as data - which operation lists it, which
//! operations fetch its supplementary attributes, child items and tags,
//! and where its identity lives in a raw record - and one generic engine
//! walks the declaration into fully populated [`Resource`] values. Adding
//! a resource type means adding a JSON declaration, not enumeration code.
//!
//! # Features
//!
//! - Declarative resource registry embedded at compile time
//! - Eager attribute augmentation, lazy cached details and tags
//! - Region resolution and filtering for globally-named resources
//!   (bucket namespaces), memoized per process
//! - Transport-agnostic: bring any [`ApiClient`] implementation
//!
//! # Example
//!
//! ```ignore
//! use awsweep::{Enumerator, HttpApiClient, Scope};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), awsweep::Error> {
//!     let descriptor = awsweep::resource::get_resource("s3-buckets").unwrap();
//!     let endpoint = Url::parse("https://s3.us-east-1.amazonaws.com").unwrap();
//!     let client = HttpApiClient::new(endpoint, "s3", "us-east-1");
//!
//!     let engine = Enumerator::new();
//!     let scope = Scope::in_region("123456789012", "us-east-1");
//!     let buckets = engine.enumerate(&descriptor, &client, &scope, None, None).await?;
//!
//!     for bucket in &buckets {
//!         println!("{} (created {:?})", bucket.id(), bucket.date());
//!         for object in bucket.details(&client).await? {
//!             println!("  {}", object["Key"]);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cost model
//!
//! Enumeration issues one list call plus one call per declared attribute
//! per returned record, and - for globally-named types - up to one region
//! resolution per previously unseen instance. Inventories with hundreds
//! of records fan out into thousands of remote calls; see
//! [`Enumerator::enumerate`] before using this on a latency-sensitive
//! path.

pub mod aws;
pub mod error;
pub mod resource;

pub use aws::client::{ApiClient, ApiError};
pub use aws::rest::HttpApiClient;
pub use error::Error;
pub use resource::{Enumerator, Resource, Scope};
