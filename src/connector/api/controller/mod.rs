pub mod image_controller;
pub mod models_controller;
pub mod prompt_controller;

pub use image_controller::ImageController;
pub use models_controller::ModelsController;
pub use prompt_controller::PromptController;

use serde_json::Value;

use crate::domain::ResultRecord;

/// Render projected records as pretty JSON.
pub(crate) fn format_records_json(records: &[ResultRecord]) -> anyhow::Result<String> {
    let values: Vec<Value> = records.iter().cloned().map(Value::Object).collect();
    Ok(serde_json::to_string_pretty(&values)?)
}

/// Render completion choices as the assistant text of each, in rank order.
pub(crate) fn format_choices(choices: &[ResultRecord]) -> String {
    if choices.is_empty() {
        return "No choices returned.".to_string();
    }

    let texts: Vec<String> = choices
        .iter()
        .map(|choice| match choice.get("message").map(|m| &m["content"]) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        })
        .collect();

    if texts.len() == 1 {
        return texts.into_iter().next().unwrap_or_default();
    }

    texts
        .iter()
        .enumerate()
        .map(|(i, text)| format!("[{}] {}", i, text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ResultRecord {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_single_choice_prints_content_only() {
        let choices = vec![record(json!({"index": 0, "message": {"role": "assistant", "content": "Hello!"}}))];
        assert_eq!(format_choices(&choices), "Hello!");
    }

    #[test]
    fn test_multiple_choices_are_numbered() {
        let choices = vec![
            record(json!({"message": {"content": "a"}})),
            record(json!({"message": {"content": "b"}})),
        ];
        assert_eq!(format_choices(&choices), "[0] a\n\n[1] b");
    }

    #[test]
    fn test_no_choices() {
        assert_eq!(format_choices(&[]), "No choices returned.");
    }

    #[test]
    fn test_missing_message_prints_empty() {
        let choices = vec![record(json!({"index": 0, "finish_reason": "length"}))];
        assert_eq!(format_choices(&choices), "");
    }
}
