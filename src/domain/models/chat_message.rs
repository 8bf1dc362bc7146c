use serde::{Deserialize, Serialize};

/// Reference to an image the completion provider can fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    url: String,
}

impl ImageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// One discriminated unit of a multi-modal message.
///
/// On the wire each variant carries only its own payload field, tagged by
/// `type`:
///
/// ```text
/// {"type": "text", "text": "..."}
/// {"type": "image_url", "image_url": {"url": "..."}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl::new(url),
        }
    }
}

/// Join the text parts of a part list, skipping images.
pub fn join_text_parts(parts: &[ContentPart]) -> String {
    parts
        .iter()
        .filter_map(|part| match part {
            ContentPart::Text { text } => Some(text.as_str()),
            ContentPart::ImageUrl { .. } => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body of a chat turn: either a plain string or an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Text carried by this content, joining the text parts of a multi-modal body.
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Parts(parts) => join_text_parts(parts),
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<ContentPart>> for MessageContent {
    fn from(parts: Vec<ContentPart>) -> Self {
        Self::Parts(parts)
    }
}

/// Accepted inbound shapes: a full `{role, content}` object, or a bare string
/// which is read as a user turn.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChatMessageRepr {
    Bare(String),
    Full { role: String, content: MessageContent },
}

impl From<ChatMessageRepr> for ChatMessage {
    fn from(repr: ChatMessageRepr) -> Self {
        match repr {
            ChatMessageRepr::Bare(content) => ChatMessage::user(content),
            ChatMessageRepr::Full { role, content } => ChatMessage::new(role, content),
        }
    }
}

/// A single chat turn. `role` is conventionally `user`, `assistant` or
/// `system` but is passed through unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ChatMessageRepr")]
pub struct ChatMessage {
    role: String,
    content: MessageContent,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<MessageContent>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new("assistant", content)
    }

    pub fn system(content: impl Into<MessageContent>) -> Self {
        Self::new("system", content)
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_part_omits_image_field() {
        let value = serde_json::to_value(ContentPart::text("describe this")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "describe this"}));
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_image_part_omits_text_field() {
        let value =
            serde_json::to_value(ContentPart::image_url("https://i.example.com/a.png")).unwrap();
        assert_eq!(
            value,
            json!({"type": "image_url", "image_url": {"url": "https://i.example.com/a.png"}})
        );
        assert!(value.get("text").is_none());
    }

    #[test]
    fn test_plain_content_serializes_as_string() {
        let value = serde_json::to_value(ChatMessage::user("hello")).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn test_bare_string_reads_as_user_turn() {
        let message: ChatMessage = serde_json::from_value(json!("just a question")).unwrap();
        assert_eq!(message.role(), "user");
        assert_eq!(message.content(), &MessageContent::from("just a question"));
    }

    #[test]
    fn test_multi_modal_content_deserializes_in_order() {
        let message: ChatMessage = serde_json::from_value(json!({
            "role": "user",
            "content": [
                {"type": "text", "text": "what is this?"},
                {"type": "image_url", "image_url": {"url": "https://i.example.com/b.jpg"}}
            ]
        }))
        .unwrap();

        assert_eq!(
            message.content(),
            &MessageContent::Parts(vec![
                ContentPart::text("what is this?"),
                ContentPart::image_url("https://i.example.com/b.jpg"),
            ])
        );
    }

    #[test]
    fn test_unknown_role_is_kept() {
        let message: ChatMessage =
            serde_json::from_value(json!({"role": "narrator", "content": "once"})).unwrap();
        assert_eq!(message.role(), "narrator");
    }

    #[test]
    fn test_unknown_part_type_is_rejected() {
        let result: Result<ContentPart, _> =
            serde_json::from_value(json!({"type": "audio", "audio": "..."}));
        assert!(result.is_err());
    }

    #[test]
    fn test_content_text_joins_text_parts() {
        let content = MessageContent::Parts(vec![
            ContentPart::text("first"),
            ContentPart::image_url("https://i.example.com/c.png"),
            ContentPart::text("second"),
        ]);
        assert_eq!(content.text(), "first\nsecond");
    }
}
