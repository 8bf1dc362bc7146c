use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use tracing::{debug, warn};

use crate::application::CompletionTransport;
use crate::domain::{CompletionPayload, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const MODELS_PATH: &str = "/v1/models";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Connection settings for the completion provider: the HTTP client, the
/// ready-made `Authorization` header value and the base URL.
///
/// Passed explicitly to [`OpenAiClient`] so tests can point it at a local stub.
#[derive(Clone)]
pub struct ProviderConfig {
    http: reqwest::Client,
    authorization: HeaderValue,
    base_url: String,
}

impl ProviderConfig {
    /// Build a config with its own HTTP client. `timeout` of `None` leaves
    /// requests unbounded.
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| DomainError::config(format!("failed to build HTTP client: {e}")))?;

        Self::with_client(http, api_key, base_url)
    }

    /// Fails with [`DomainError::ConfigError`] when the key cannot be sent
    /// as a header value, e.g. because it contains a newline.
    pub fn with_client(
        http: reqwest::Client,
        api_key: &str,
        base_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| DomainError::config("OPENAI_API_KEY is not a valid header value"))?;
        authorization.set_sensitive(true);

        let base: String = base_url.into();
        Ok(Self {
            http,
            authorization,
            base_url: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("authorization", &"Bearer <redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// HTTP client for the OpenAI model-listing and chat-completions endpoints
/// (and compatible servers).
///
/// Each call performs exactly one request carrying the configured bearer
/// token and returns the response body untouched. Non-success statuses are
/// reported as [`DomainError::TransportError`].
pub struct OpenAiClient {
    config: ProviderConfig,
    models_url: String,
    completions_url: String,
}

impl OpenAiClient {
    pub fn new(config: ProviderConfig) -> Self {
        let models_url = format!("{}{MODELS_PATH}", config.base_url());
        let completions_url = format!("{}{COMPLETIONS_PATH}", config.base_url());
        Self {
            config,
            models_url,
            completions_url,
        }
    }

    async fn read_body(response: reqwest::Response) -> Result<String, DomainError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::transport(format!(
                "OpenAiClient: API returned {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("OpenAiClient: failed to read body: {e}")))
    }
}

#[async_trait]
impl CompletionTransport for OpenAiClient {
    async fn list_models(&self) -> Result<String, DomainError> {
        debug!("GET {}", self.models_url);
        let response = self
            .config
            .http
            .get(&self.models_url)
            .header(AUTHORIZATION, &self.config.authorization)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("OpenAiClient: request failed: {e}")))?;

        Self::read_body(response).await
    }

    async fn complete(&self, payload: &CompletionPayload) -> Result<String, DomainError> {
        debug!("POST {} (model {})", self.completions_url, payload.model());
        let response = self
            .config
            .http
            .post(&self.completions_url)
            .header(AUTHORIZATION, &self.config.authorization)
            .json(payload)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("OpenAiClient: request failed: {e}")))?;

        Self::read_body(response).await
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let config = ProviderConfig::with_client(
            reqwest::Client::new(),
            "sk-very-secret",
            "https://api.openai.com/",
        )
        .unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-very-secret"));
        assert!(printed.contains("https://api.openai.com"));
    }

    #[test]
    fn test_endpoint_urls_trim_trailing_slash() {
        let config =
            ProviderConfig::with_client(reqwest::Client::new(), "k", "http://localhost:9000/").unwrap();
        let client = OpenAiClient::new(config);
        assert_eq!(client.models_url, "http://localhost:9000/v1/models");
        assert_eq!(
            client.completions_url,
            "http://localhost:9000/v1/chat/completions"
        );
    }

    #[test]
    fn test_key_with_control_characters_is_config_error() {
        let err = ProviderConfig::with_client(reqwest::Client::new(), "sk-abc\n", "http://x")
            .unwrap_err();
        assert!(matches!(err, DomainError::ConfigError(_)));
        assert!(!err.to_string().contains("sk-abc"));
    }
}
