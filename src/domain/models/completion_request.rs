use serde::{Deserialize, Serialize};

use super::{join_text_parts, ChatMessage, ContentPart};

/// Model used for every outbound completion.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Sampling temperature attached to text completions.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

/// Single-turn or multi-turn text completion payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

/// A chat turn whose content is always a part list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMessage {
    role: String,
    content: Vec<ContentPart>,
}

impl ImageMessage {
    pub fn new(role: impl Into<String>, content: Vec<ContentPart>) -> Self {
        Self {
            role: role.into(),
            content,
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn content(&self) -> &[ContentPart] {
        &self.content
    }
}

/// Multi-modal sibling of [`CompletionRequest`]. Carries no temperature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMessageRequest {
    model: String,
    messages: Vec<ImageMessage>,
}

impl ImageMessageRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ImageMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ImageMessage] {
        &self.messages
    }
}

/// Anything the chat-completions endpoint accepts. Serializes as the inner
/// request with no wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompletionPayload {
    Text(CompletionRequest),
    Image(ImageMessageRequest),
}

impl CompletionPayload {
    pub fn model(&self) -> &str {
        match self {
            Self::Text(request) => request.model(),
            Self::Image(request) => request.model(),
        }
    }

    pub fn message_count(&self) -> usize {
        match self {
            Self::Text(request) => request.messages().len(),
            Self::Image(request) => request.messages().len(),
        }
    }

    /// Text of the final turn, or an empty string for an empty conversation.
    pub fn last_message_text(&self) -> String {
        match self {
            Self::Text(request) => request
                .messages()
                .last()
                .map(|message| message.content().text())
                .unwrap_or_default(),
            Self::Image(request) => request
                .messages()
                .last()
                .map(|message| join_text_parts(message.content()))
                .unwrap_or_default(),
        }
    }
}

impl From<CompletionRequest> for CompletionPayload {
    fn from(request: CompletionRequest) -> Self {
        Self::Text(request)
    }
}

impl From<ImageMessageRequest> for CompletionPayload {
    fn from(request: ImageMessageRequest) -> Self {
        Self::Image(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completion_request_defaults() {
        let request = CompletionRequest::new(vec![ChatMessage::user("hi")]);
        assert_eq!(request.model(), DEFAULT_MODEL);
        assert_eq!(request.temperature(), DEFAULT_TEMPERATURE);
        assert_eq!(request.messages().len(), 1);
    }

    #[test]
    fn test_payload_serializes_without_wrapper() {
        let payload = CompletionPayload::from(CompletionRequest::new(vec![ChatMessage::system(
            "be brief",
        )]));
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-4o",
                "messages": [{"role": "system", "content": "be brief"}],
                "temperature": 0.8
            })
        );
    }

    #[test]
    fn test_image_payload_has_no_temperature() {
        let payload = CompletionPayload::from(ImageMessageRequest::new(
            DEFAULT_MODEL,
            vec![ImageMessage::new("user", vec![ContentPart::text("look")])],
        ));
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("temperature").is_none());
        assert_eq!(payload.message_count(), 1);
        assert_eq!(payload.model(), "gpt-4o");
    }

    #[test]
    fn test_last_message_text_reads_final_turn() {
        let text = CompletionPayload::from(CompletionRequest::new(vec![
            ChatMessage::user("first"),
            ChatMessage::user(vec![
                ContentPart::text("look"),
                ContentPart::image_url("https://i.example.com/d.png"),
            ]),
        ]));
        assert_eq!(text.last_message_text(), "look");

        let image = CompletionPayload::from(ImageMessageRequest::new(
            DEFAULT_MODEL,
            vec![ImageMessage::new(
                "user",
                vec![ContentPart::text("a"), ContentPart::text("b")],
            )],
        ));
        assert_eq!(image.last_message_text(), "a\nb");

        let empty = CompletionPayload::from(CompletionRequest::new(Vec::new()));
        assert_eq!(empty.last_message_text(), "");
    }
}
