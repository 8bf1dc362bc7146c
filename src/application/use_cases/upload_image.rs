use std::sync::Arc;

use tracing::info;

use crate::application::ImageHost;
use crate::domain::DomainError;

/// Use case for publishing an image so it can be referenced from a prompt.
pub struct UploadImageUseCase {
    image_host: Arc<dyn ImageHost>,
}

impl UploadImageUseCase {
    pub fn new(image_host: Arc<dyn ImageHost>) -> Self {
        Self { image_host }
    }

    pub async fn execute(&self, bytes: Vec<u8>, filename: &str) -> Result<String, DomainError> {
        if bytes.is_empty() {
            return Err(DomainError::invalid_input("Please select a file to upload"));
        }

        info!("Uploading image {} ({} bytes)", filename, bytes.len());
        self.image_host.upload(bytes, filename).await
    }
}
