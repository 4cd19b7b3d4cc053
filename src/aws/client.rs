//! API client boundary.
//!
//! The engine never speaks a wire protocol itself: it drives remote
//! services through the [`ApiClient`] trait, which executes one named
//! operation with parameters and returns the structured response body.
//! Retry, backoff, pagination and cancellation all live behind this
//! boundary - the engine performs none of them.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure reported by an [`ApiClient`] implementation.
#[derive(Debug, Clone, Error)]
#[error("{operation}: {code}: {message}")]
pub struct ApiError {
    /// Name of the operation that failed.
    pub operation: String,
    /// Service error code or category (e.g. `AccessDenied`, `Throttling`).
    pub code: String,
    /// Human-readable message from the service.
    pub message: String,
}

impl ApiError {
    pub fn new(
        operation: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation: operation.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A client bound to one service, region and account context.
///
/// Implementations may retry transparently; by the time a call returns
/// here it is final. Cancellation propagates through the returned future.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Execute a named remote operation and return its structured response.
    async fn call(&self, operation: &str, params: &Map<String, Value>) -> Result<Value, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::new("list_buckets", "Throttling", "slow down");
        assert_eq!(err.to_string(), "list_buckets: Throttling: slow down");
    }
}
