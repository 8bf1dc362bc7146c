use async_trait::async_trait;

use crate::domain::DomainError;

/// Publishes raw image bytes and returns a publicly reachable URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String, DomainError>;
}
