use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::ImageHost;
use crate::domain::DomainError;

pub const DEFAULT_IMGUR_BASE_URL: &str = "https://api.imgur.com";
const UPLOAD_PATH: &str = "/3/image";

/// [`ImageHost`] backed by the Imgur upload API.
///
/// Sends the bytes as a multipart `image` part under the application's
/// `Client-ID` and returns `data.link` from the response.
pub struct ImgurClient {
    http: reqwest::Client,
    authorization: HeaderValue,
    url: String,
}

impl ImgurClient {
    pub fn new(
        client_id: &str,
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

        Self::with_client(http, client_id, base_url)
    }

    pub fn with_client(
        http: reqwest::Client,
        client_id: &str,
        base_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let mut authorization = HeaderValue::from_str(&format!("Client-ID {client_id}"))
            .map_err(|_| DomainError::config("IMGUR_CLIENT_ID is not a valid header value"))?;
        authorization.set_sensitive(true);

        let base: String = base_url.into();
        Ok(Self {
            http,
            authorization,
            url: format!("{}{UPLOAD_PATH}", base.trim_end_matches('/')),
        })
    }

    /// Pull the hosted URL out of an upload response body.
    fn parse_link(body: &str) -> Result<String, DomainError> {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            DomainError::decoding(format!("ImgurClient: response is not valid JSON: {e}"))
        })?;

        value
            .pointer("/data/link")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| DomainError::decoding("ImgurClient: response has no data.link"))
    }
}

impl fmt::Debug for ImgurClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImgurClient")
            .field("authorization", &"Client-ID <redacted>")
            .field("url", &self.url)
            .finish()
    }
}

#[async_trait]
impl ImageHost for ImgurClient {
    async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String, DomainError> {
        debug!("POST {} ({} bytes)", self.url, bytes.len());
        let form = Form::new().part("image", Part::bytes(bytes).file_name(filename.to_string()));

        let response = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, &self.authorization)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("ImgurClient: request failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("ImgurClient: upload returned {status}: {body}");
            return Err(DomainError::transport(format!(
                "Failed to upload image: {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("ImgurClient: failed to read body: {e}")))?;

        Self::parse_link(&body)
    }
}
