//! Projection of a named array field of a JSON response into generic records.

use serde_json::Value;

use crate::domain::{DomainError, ResultRecord};

/// Top-level field holding the entries of a model listing.
pub const MODELS_FIELD: &str = "data";

/// Top-level field holding the ranked candidates of a completion.
pub const CHOICES_FIELD: &str = "choices";

/// Parse `raw_body` and copy every element of its `field_name` array into a
/// [`ResultRecord`], keeping source order.
///
/// A missing or non-array field yields an empty vector: provider error
/// payloads use a different top-level shape and callers tell "no results"
/// from "call failed" through the error channel instead. A body that is not
/// JSON, or an array element that is not an object, is a decoding error and
/// nothing parsed so far is returned.
pub fn project_array_field(
    raw_body: &str,
    field_name: &str,
) -> Result<Vec<ResultRecord>, DomainError> {
    let root: Value = serde_json::from_str(raw_body).map_err(|e| {
        DomainError::decoding(format!("response body is not valid JSON: {e}"))
    })?;

    let items = match root {
        Value::Object(mut fields) => match fields.remove(field_name) {
            Some(Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(DomainError::decoding(format!(
                "element {index} of '{field_name}' is not an object: {}",
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
