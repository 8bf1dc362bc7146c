//! Assembly of outbound completion payloads from caller-supplied fields.

use crate::domain::{
    ChatMessage, CompletionRequest, ContentPart, ImageMessage, ImageMessageRequest, DEFAULT_MODEL,
};

/// Wrap `turns` as-is into a text completion request with the default model
/// and temperature. An empty conversation is accepted.
pub fn build_text_request(turns: Vec<ChatMessage>) -> CompletionRequest {
    CompletionRequest::new(turns)
}

/// Build a single user message carrying `text` followed by an image reference.
///
/// The provider expects the text part first; both strings are used verbatim.
pub fn build_image_request(text: &str, image_url: &str) -> ImageMessageRequest {
    let message = ImageMessage::new(
        "user",
        vec![ContentPart::text(text), ContentPart::image_url(image_url)],
    );
    ImageMessageRequest::new(DEFAULT_MODEL, vec![message])
}
