//! Thin reqwest wrapper producing [`TransportResult`] values.

use crate::config::ClientConfig;
use crate::http::TransportResult;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Authentication configuration.
#[derive(Clone)]
pub enum AuthConfig {
    /// Bearer token authentication (Authorization: Bearer {token}).
    Bearer(String),
    /// Custom header authentication (e.g., X-API-Key: {key}).
    ApiKey { header: String, key: String },
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Self::ApiKey { header, .. } => f
                .debug_struct("ApiKey")
                .field("header", header)
                .field("key", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Internal failure taxonomy; collapsed to a string before leaving the
/// transport.
#[derive(Debug, Error)]
enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Header(String),
}

/// Wire shape of the server's unified response envelope:
/// `{status, code, message, data, errors}`.
#[derive(Debug, Default, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

impl RawEnvelope {
    fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }

    /// Non-empty server message, if any.
    fn message(&self) -> Option<String> {
        self.message.clone().filter(|m| !m.is_empty())
    }

    /// Best failure description: the server message, then `errors.detail`.
    fn error_message(&self) -> Option<String> {
        if let Some(message) = self.message() {
            return Some(message);
        }
        self.errors
            .as_ref()?
            .get("detail")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// HTTP transport shared by the per-resource clients.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    auth: Option<AuthConfig>,
}

impl HttpTransport {
    /// Build a transport from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, crate::error::Error> {
        let mut base_url = Url::parse(&config.base_url)?;
        // Relative joins drop the last path segment unless it ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            auth: config.auth.clone(),
        })
    }

    /// Build headers including authentication.
    fn build_headers(&self) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::new();

        match &self.auth {
            None => {}
            Some(AuthConfig::Bearer(token)) => {
                let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                    TransportError::Header("Bearer token contains invalid header characters".into())
                })?;
                headers.insert(AUTHORIZATION, value);
            }
            Some(AuthConfig::ApiKey { header, key }) => {
                let name = reqwest::header::HeaderName::try_from(header)
                    .map_err(|_| TransportError::Header("API key header name is invalid".into()))?;
                let value = HeaderValue::from_str(key).map_err(|_| {
                    TransportError::Header("API key contains invalid header characters".into())
                })?;
                headers.insert(name, value);
            }
        }

        Ok(headers)
    }

    /// GET a detail resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> TransportResult<T> {
        self.execute(Method::GET, path, &[], None).await
    }

    /// GET a collection with a cache-busting `_t` parameter.
    pub async fn get_uncached<T: DeserializeOwned>(&self, path: &str) -> TransportResult<T> {
        self.execute(Method::GET, path, &[cache_bust()], None).await
    }

    /// GET with explicit query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> TransportResult<T> {
        self.execute(Method::GET, path, query, None).await
    }

    /// POST a JSON body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> TransportResult<T> {
        match encode_body(body) {
            Ok(body) => self.execute(Method::POST, path, &[], Some(body)).await,
            Err(failure) => failure,
        }
    }

    /// PUT a JSON body.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> TransportResult<T> {
        match encode_body(body) {
            Ok(body) => self.execute(Method::PUT, path, &[], Some(body)).await,
            Err(failure) => failure,
        }
    }

    /// PATCH a JSON body.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> TransportResult<T> {
        match encode_body(body) {
            Ok(body) => self.execute(Method::PATCH, path, &[], Some(body)).await,
            Err(failure) => failure,
        }
    }

    /// DELETE a resource. The stripped-204 reply carries no payload.
    pub async fn delete(&self, path: &str) -> TransportResult<()> {
        self.execute(Method::DELETE, path, &[], None).await
    }

    /// Issue one request, folding every failure into `Failure`.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> TransportResult<T> {
        match self.try_execute(method, path, query, body).await {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(error = %e, "transport call failed");
                TransportResult::Failure {
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn try_execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<TransportResult<T>, TransportError> {
        let url = self.base_url.join(path)?;
        let headers = self.build_headers()?;

        tracing::debug!(method = %method, url = %url, "WHartTest API request");

        let mut request = self.client.request(method, url).headers(headers);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Prefer the unified envelope's description when the body
            // carries one.
            if let Ok(envelope) = serde_json::from_str::<RawEnvelope>(&text)
                && let Some(message) = envelope.error_message()
            {
                return Ok(TransportResult::Failure {
                    error: Some(message),
                });
            }
            return Err(TransportError::Status { status, body: text });
        }

        // An empty 2xx body (a stripped 204) carries no payload.
        let envelope = if text.trim().is_empty() {
            RawEnvelope::default()
        } else {
            serde_json::from_str::<RawEnvelope>(&text).inspect_err(|e| {
                tracing::warn!("Undecodable response body: {e}");
            })?
        };

        if envelope.is_error() {
            return Ok(TransportResult::Failure {
                error: envelope.error_message(),
            });
        }

        let message = envelope.message();
        let data = serde_json::from_value(envelope.data.unwrap_or(Value::Null))?;
        Ok(TransportResult::Success { data, message })
    }
}

/// Current-time query parameter used to defeat intermediate caches on
/// collection reads.
fn cache_bust() -> (&'static str, String) {
    ("_t", chrono::Utc::now().timestamp_millis().to_string())
}

fn encode_body<B: Serialize, T>(body: &B) -> Result<Value, TransportResult<T>> {
    serde_json::to_value(body).map_err(|e| TransportResult::Failure {
        error: Some(format!("Failed to encode request body: {e}")),
    })
}
