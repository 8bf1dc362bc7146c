use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::CompletionTransport;
use crate::domain::{CompletionPayload, DomainError};

const MOCK_MODELS_BODY: &str = r#"{"object":"list","data":[{"id":"gpt-4o","object":"model","created":1715367049,"owned_by":"system"},{"id":"gpt-4o-mini","object":"model","created":1721172741,"owned_by":"system"}]}"#;

/// Offline [`CompletionTransport`] returning canned bodies.
///
/// Unless a completion body is fixed, the reply echoes the text of the last
/// message sent. Every payload is recorded for inspection.
pub struct MockCompletionTransport {
    models_body: String,
    completion_body: Option<String>,
    failure: Option<String>,
    sent: Arc<Mutex<Vec<Value>>>,
    list_calls: AtomicUsize,
}

impl MockCompletionTransport {
    pub fn new() -> Self {
        Self {
            models_body: MOCK_MODELS_BODY.to_string(),
            completion_body: None,
            failure: None,
            sent: Arc::new(Mutex::new(Vec::new())),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// A transport whose every call fails with a transport error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    pub fn with_models_body(mut self, body: impl Into<String>) -> Self {
        self.models_body = body.into();
        self
    }

    pub fn with_completion_body(mut self, body: impl Into<String>) -> Self {
        self.completion_body = Some(body.into());
        self
    }

    /// Payloads passed to `complete`, serialized, in call order.
    pub async fn sent_payloads(&self) -> Vec<Value> {
        self.sent.lock().await.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn echo_body(payload: &CompletionPayload) -> String {
        let last_text = payload.last_message_text();

        json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "model": payload.model(),
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": format!("echo: {last_text}")},
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }
}

impl Default for MockCompletionTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionTransport for MockCompletionTransport {
    async fn list_models(&self) -> Result<String, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(DomainError::transport(message.clone()));
        }
        Ok(self.models_body.clone())
    }

    async fn complete(&self, payload: &CompletionPayload) -> Result<String, DomainError> {
        if let Some(message) = &self.failure {
            return Err(DomainError::transport(message.clone()));
        }

        let value = serde_json::to_value(payload)?;
        debug!("MockCompletionTransport received {}", value);

        let body = match &self.completion_body {
            Some(body) => body.clone(),
            None => Self::echo_body(payload),
        };
        self.sent.lock().await.push(value);

        Ok(body)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
