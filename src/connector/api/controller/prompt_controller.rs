use anyhow::Result;

use crate::domain::ChatMessage;

use super::super::Container;
use super::{format_choices, format_records_json};

const KNOWN_ROLES: [&str; 3] = ["user", "assistant", "system"];

pub struct PromptController<'a> {
    container: &'a Container,
}

impl<'a> PromptController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn prompt(&self, turns: Vec<String>, json: bool) -> Result<String> {
        let messages: Vec<ChatMessage> = turns.iter().map(|turn| parse_turn(turn)).collect();

        let use_case = self.container.prompt_text_use_case();
        let choices = use_case.execute(messages).await?;

        if json {
            return format_records_json(&choices);
        }
        Ok(format_choices(&choices))
    }
}

/// `system:Be brief` becomes a system turn; anything without a known role
/// prefix is a user turn taken verbatim.
fn parse_turn(turn: &str) -> ChatMessage {
    if let Some((role, content)) = turn.split_once(':') {
        let role = role.trim().to_lowercase();
        if KNOWN_ROLES.contains(&role.as_str()) {
            return ChatMessage::new(role, content.trim_start());
        }
    }
    ChatMessage::user(turn)
}
