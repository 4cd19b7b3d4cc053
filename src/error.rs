//! Error types for enumeration operations.

use thiserror::Error;

use crate::aws::client::ApiError;

/// Errors surfaced by the enumeration engine.
///
/// Remote failures and extraction failures are deliberately separate
/// variants so callers can tell "the service rejected us" from "the
/// resource declaration no longer matches the response shape".
#[derive(Debug, Error)]
pub enum Error {
    /// A remote operation failed at the service level.
    #[error("remote operation failed: {0}")]
    Remote(#[from] ApiError),

    /// A declared result path did not resolve within a response.
    #[error("path `{path}` did not resolve in the `{operation}` response")]
    Extraction { operation: String, path: String },

    /// A record returned by the list call lacks its declared identity field.
    #[error("record from `{operation}` has no `{field}` field")]
    MissingId { operation: String, field: String },

    /// No declaration is registered under the given key.
    #[error("unknown resource type: {0}")]
    UnknownResource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Extraction {
            operation: "list_buckets".to_string(),
            path: "Buckets[]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "path `Buckets[]` did not resolve in the `list_buckets` response"
        );

        let err = Error::MissingId {
            operation: "list_buckets".to_string(),
            field: "Name".to_string(),
        };
        assert_eq!(err.to_string(), "record from `list_buckets` has no `Name` field");

        assert_eq!(
            Error::UnknownResource("s3-tables".to_string()).to_string(),
            "unknown resource type: s3-tables"
        );
    }

    #[test]
    fn test_remote_wraps_api_error() {
        let api = ApiError::new("get_bucket_acl", "AccessDenied", "not allowed");
        let err = Error::from(api);
        assert!(matches!(err, Error::Remote(_)));
        assert!(err.to_string().contains("get_bucket_acl"));
        assert!(err.to_string().contains("AccessDenied"));
    }
}
