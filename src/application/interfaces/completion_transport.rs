use async_trait::async_trait;

use crate::domain::{CompletionPayload, DomainError};

/// Authenticated access to the completion provider.
///
/// Implementors perform exactly one outbound request per call and hand back
/// the raw response body; decoding is left to the caller.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// GET the provider's model listing.
    async fn list_models(&self) -> Result<String, DomainError>;

    /// POST `payload` as JSON to the chat-completions endpoint.
    async fn complete(&self, payload: &CompletionPayload) -> Result<String, DomainError>;

    fn provider_name(&self) -> &str;
}
