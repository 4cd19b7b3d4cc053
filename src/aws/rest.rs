//! Reference HTTP transport.
//!
//! [`HttpApiClient`] maps operation calls onto a JSON-over-HTTP endpoint:
//! `POST {endpoint}/{service}/{operation}` with the parameters as the JSON
//! body. It carries no credential discovery (an optional static bearer
//! token only), no retries and no pagination - embedders with real
//! transport requirements supply their own [`ApiClient`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use url::Url;

use super::client::{ApiClient, ApiError};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..MAX_LOG_BODY_LENGTH],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Pull the service error code and message out of an error body.
///
/// Understands the JSON-protocol error shape (`__type` / `message`, with
/// `Code` / `Message` as the REST variant); falls back to the HTTP status.
fn parse_error_body(body: &str, status: reqwest::StatusCode) -> (String, String) {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let code = value
            .get("__type")
            .or_else(|| value.get("Code"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let message = value
            .get("message")
            .or_else(|| value.get("Message"))
            .and_then(Value::as_str)
            .unwrap_or("request rejected")
            .to_string();
        if let Some(code) = code {
            return (code, message);
        }
    }
    (format!("Http{}", status.as_u16()), "API request failed".to_string())
}

/// HTTP implementation of [`ApiClient`] for one service endpoint.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    endpoint: Url,
    service: String,
    region: String,
    token: Option<String>,
}

impl HttpApiClient {
    /// Create a client for `service` at `endpoint`, bound to `region`.
    pub fn new(endpoint: Url, service: &str, region: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            service: service.to_string(),
            region: region.to_string(),
            token: None,
        }
    }

    /// Attach a static bearer token to every request.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Use a preconfigured [`reqwest::Client`] (timeouts, proxies, ...).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Rebind the client to a different region.
    pub fn switch_region(&mut self, region: &str) {
        self.region = region.to_string();
    }

    fn operation_url(&self, operation: &str) -> Result<Url, ApiError> {
        let raw = format!(
            "{}/{}/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            urlencoding::encode(&self.service),
            urlencoding::encode(operation)
        );
        Url::parse(&raw).map_err(|e| ApiError::new(operation, "InvalidEndpoint", e.to_string()))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn call(&self, operation: &str, params: &Map<String, Value>) -> Result<Value, ApiError> {
        let url = self.operation_url(operation)?;
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(url).json(&Value::Object(params.clone()));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::new(operation, "TransportError", e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::new(operation, "TransportError", e.to_string()))?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            let (code, message) = parse_error_body(&body, status);
            return Err(ApiError::new(operation, code, message));
        }

        // Handle empty response
        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::new(operation, "MalformedResponse", e.to_string()))
    }
}
