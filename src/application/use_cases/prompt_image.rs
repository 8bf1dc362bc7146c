use std::sync::Arc;

use tracing::{debug, info};

use crate::application::use_cases::message_builder::build_image_request;
use crate::application::use_cases::response_projector::{project_array_field, CHOICES_FIELD};
use crate::application::use_cases::upload_image::UploadImageUseCase;
use crate::application::{CompletionTransport, ImageHost};
use crate::domain::{CompletionPayload, DomainError, ResultRecord};

/// Use case for prompting with one text part and one image reference.
pub struct PromptImageUseCase {
    transport: Arc<dyn CompletionTransport>,
    image_host: Option<Arc<dyn ImageHost>>,
}

impl PromptImageUseCase {
    pub fn new(transport: Arc<dyn CompletionTransport>) -> Self {
        Self {
            transport,
            image_host: None,
        }
    }

    pub fn with_image_host(mut self, image_host: Arc<dyn ImageHost>) -> Self {
        self.image_host = Some(image_host);
        self
    }

    pub async fn execute(
        &self,
        text: &str,
        image_url: &str,
    ) -> Result<Vec<ResultRecord>, DomainError> {
        debug!("Image prompt references {}", image_url);
        let payload = CompletionPayload::from(build_image_request(text, image_url));
        info!(
            "Prompting {} with an image on {}",
            payload.model(),
            self.transport.provider_name()
        );

        let body = self.transport.complete(&payload).await?;
        project_array_field(&body, CHOICES_FIELD)
    }

    /// Publish `bytes` through the image host, then prompt with the returned URL.
    pub async fn execute_with_upload(
        &self,
        text: &str,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<Vec<ResultRecord>, DomainError> {
        let host = self
            .image_host
            .clone()
            .ok_or_else(|| DomainError::config("no image host configured"))?;

        let url = UploadImageUseCase::new(host).execute(bytes, filename).await?;
        self.execute(text, &url).await
    }
}
