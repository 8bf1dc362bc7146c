use serde_json::{Map, Value};

/// Schema-less record projected out of a provider response.
///
/// Used for both model descriptions and completion choices. Keys keep the
/// order they had in the response body; nested values are left untouched.
pub type ResultRecord = Map<String, Value>;

/// Read a string field from a record, if present.
pub fn record_str<'a>(record: &'a ResultRecord, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}
