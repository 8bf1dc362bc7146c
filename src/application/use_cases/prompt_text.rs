use std::sync::Arc;

use tracing::info;

use crate::application::use_cases::message_builder::build_text_request;
use crate::application::use_cases::response_projector::{project_array_field, CHOICES_FIELD};
use crate::application::CompletionTransport;
use crate::domain::{ChatMessage, CompletionPayload, DomainError, ResultRecord};

/// Use case for completing a (possibly multi-turn) text conversation.
pub struct PromptTextUseCase {
    transport: Arc<dyn CompletionTransport>,
}

impl PromptTextUseCase {
    pub fn new(transport: Arc<dyn CompletionTransport>) -> Self {
        Self { transport }
    }

    pub async fn execute(&self, turns: Vec<ChatMessage>) -> Result<Vec<ResultRecord>, DomainError> {
        let payload = CompletionPayload::from(build_text_request(turns));
        info!(
            "Prompting {} with {} turn(s) on {}",
            payload.model(),
            payload.message_count(),
            self.transport.provider_name()
        );

        let body = self.transport.complete(&payload).await?;
        project_array_field(&body, CHOICES_FIELD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockCompletionTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_sends_turns_with_defaults() {
        let transport = Arc::new(MockCompletionTransport::new());
        let use_case = PromptTextUseCase::new(transport.clone());

        let choices = use_case
            .execute(vec![ChatMessage::system("short answers"), ChatMessage::user("ping")])
            .await
            .unwrap();

        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0]["message"]["content"], "echo: ping");

        let sent = transport.sent_payloads().await;
        assert_eq!(
            sent,
            vec![json!({
                "model": "gpt-4o",
                "messages": [
                    {"role": "system", "content": "short answers"},
                    {"role": "user", "content": "ping"}
                ],
                "temperature": 0.8
            })]
        );
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decoding_error() {
        let transport =
            Arc::new(MockCompletionTransport::new().with_completion_body("<html>502</html>"));
        let err = PromptTextUseCase::new(transport)
            .execute(vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(err.is_decoding_error());
    }

    #[tokio::test]
    async fn test_empty_conversation_is_forwarded() {
        let transport = Arc::new(MockCompletionTransport::new());
        PromptTextUseCase::new(transport.clone())
            .execute(Vec::new())
            .await
            .unwrap();
        assert_eq!(transport.sent_payloads().await[0]["messages"], json!([]));
    }
}
