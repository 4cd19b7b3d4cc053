//! AWS API interaction module
//!
//! This module defines the boundary between the enumeration engine and the
//! remote services it walks.
//!
//! # Module Structure
//!
//! - [`client`] - The [`ApiClient`](client::ApiClient) trait and its error type
//! - [`rest`] - Reference HTTP transport implementing the trait
//!
//! # Example
//!
//! ```ignore
//! use awsweep::aws::rest::HttpApiClient;
//! use url::Url;
//!
//! let endpoint = Url::parse("https://s3.us-east-1.amazonaws.com")?;
//! let client = HttpApiClient::new(endpoint, "s3", "us-east-1");
//! ```

pub mod client;
pub mod rest;
