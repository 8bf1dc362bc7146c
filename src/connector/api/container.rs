use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::application::{
    CompletionTransport, ImageHost, ListModelsUseCase, PromptImageUseCase, PromptTextUseCase,
    UploadImageUseCase,
};
use crate::connector::adapter::{
    ImgurClient, MockCompletionTransport, MockImageHost, OpenAiClient, ProviderConfig,
    DEFAULT_BASE_URL, DEFAULT_IMGUR_BASE_URL,
};
use crate::domain::DomainError;

/// Settings for wiring the adapters.
///
/// | Variable                  | Default                  | Purpose                         |
/// |---------------------------|--------------------------|---------------------------------|
/// | `OPENAI_API_KEY`          | none, required           | Bearer token for the provider   |
/// | `OPENAI_BASE_URL`         | `https://api.openai.com` | Provider or compatible server   |
/// | `IMGUR_CLIENT_ID`         | none                     | Enables image uploads           |
/// | `IMGUR_BASE_URL`          | `https://api.imgur.com`  | Image host                      |
/// | `PROMPTGATE_TIMEOUT_SECS` | none                     | Per-request timeout             |
#[derive(Clone, Default)]
pub struct ContainerConfig {
    pub mock: bool,
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub imgur_client_id: Option<String>,
    pub imgur_base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl ContainerConfig {
    pub fn from_env(mock: bool) -> Self {
        let timeout = parse_timeout(std::env::var("PROMPTGATE_TIMEOUT_SECS").ok().as_deref());

        Self {
            mock,
            openai_api_key: non_empty_env("OPENAI_API_KEY"),
            openai_base_url: non_empty_env("OPENAI_BASE_URL"),
            imgur_client_id: non_empty_env("IMGUR_CLIENT_ID"),
            imgur_base_url: non_empty_env("IMGUR_BASE_URL"),
            timeout,
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    non_empty(std::env::var(key).ok())
}

/// Trimmed value, or `None` when absent or blank.
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Whole seconds, greater than zero. Anything else means no timeout.
fn parse_timeout(raw: Option<&str>) -> Option<Duration> {
    let raw = raw?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            warn!("Ignoring invalid PROMPTGATE_TIMEOUT_SECS value '{}'", raw);
            None
        }
    }
}

pub struct Container {
    transport: Arc<dyn CompletionTransport>,
    image_host: Option<Arc<dyn ImageHost>>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self, DomainError> {
        if config.mock {
            debug!("Using mock completion transport and image host");
            return Ok(Self::with_services(
                Arc::new(MockCompletionTransport::new()),
                Some(Arc::new(MockImageHost::new())),
            ));
        }

        let api_key = config
            .openai_api_key
            .as_deref()
            .ok_or_else(|| DomainError::config("OPENAI_API_KEY is not set"))?;
        let base_url = config
            .openai_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        debug!("Using completion provider at {}", base_url);

        let provider = ProviderConfig::new(api_key, base_url, config.timeout)?;
        let transport: Arc<dyn CompletionTransport> = Arc::new(OpenAiClient::new(provider));

        let image_host: Option<Arc<dyn ImageHost>> = match config.imgur_client_id.as_deref() {
            Some(client_id) => {
                let base_url = config
                    .imgur_base_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_IMGUR_BASE_URL.to_string());
                debug!("Using image host at {}", base_url);
                Some(Arc::new(ImgurClient::new(client_id, base_url, config.timeout)?))
            }
            None => {
                debug!("IMGUR_CLIENT_ID is not set; image uploads are disabled");
                None
            }
        };

        Ok(Self::with_services(transport, image_host))
    }

    /// Wire the use cases over already-built adapters.
    pub fn with_services(
        transport: Arc<dyn CompletionTransport>,
        image_host: Option<Arc<dyn ImageHost>>,
    ) -> Self {
        Self {
            transport,
            image_host,
        }
    }

    pub fn list_models_use_case(&self) -> ListModelsUseCase {
        ListModelsUseCase::new(self.transport.clone())
    }

    pub fn prompt_text_use_case(&self) -> PromptTextUseCase {
        PromptTextUseCase::new(self.transport.clone())
    }

    pub fn prompt_image_use_case(&self) -> PromptImageUseCase {
        let use_case = PromptImageUseCase::new(self.transport.clone());

        match self.image_host.clone() {
            Some(host) => use_case.with_image_host(host),
            None => use_case,
        }
    }

    pub fn upload_image_use_case(&self) -> Result<UploadImageUseCase, DomainError> {
        self.image_host
            .clone()
            .map(UploadImageUseCase::new)
            .ok_or_else(|| DomainError::config("IMGUR_CLIENT_ID is not set"))
    }

    pub fn provider_name(&self) -> &str {
        self.transport.provider_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_config_error() {
        let err = Container::new(ContainerConfig::default()).err().unwrap();
        assert!(matches!(err, DomainError::ConfigError(_)));
    }

    #[test]
    fn test_mock_needs_no_credentials() {
        let container = Container::new(ContainerConfig {
            mock: true,
            ..ContainerConfig::default()
        })
        .unwrap();
        assert_eq!(container.provider_name(), "mock");
        assert!(container.upload_image_use_case().is_ok());
    }

    #[test]
    fn test_uploads_disabled_without_client_id() {
        let container = Container::new(ContainerConfig {
            openai_api_key: Some("sk-test".to_string()),
            ..ContainerConfig::default()
        })
        .unwrap();
        assert_eq!(container.provider_name(), "openai");
        assert!(container.upload_image_use_case().is_err());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(Some("30")), Some(Duration::from_secs(30)));
        assert_eq!(parse_timeout(Some(" 5\n")), Some(Duration::from_secs(5)));
        assert_eq!(parse_timeout(Some("0")), None);
        assert_eq!(parse_timeout(Some("-3")), None);
        assert_eq!(parse_timeout(Some("soon")), None);
        assert_eq!(parse_timeout(Some("")), None);
        assert_eq!(parse_timeout(None), None);
    }

    #[test]
    fn test_non_empty_trims_and_filters_blank() {
        assert_eq!(non_empty(Some("sk-abc\n".to_string())), Some("sk-abc".to_string()));
        assert_eq!(non_empty(Some("  cid  ".to_string())), Some("cid".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some(" \t\n".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_invalid_api_key_fails_at_construction() {
        let err = Container::new(ContainerConfig {
            openai_api_key: Some("sk-\u{7f}bad".to_string()),
            ..ContainerConfig::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, DomainError::ConfigError(_)));
    }
}
