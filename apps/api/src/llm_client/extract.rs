//! Brace-extraction parse for model replies.
//!
//! Models wrap JSON in prose or code fences often enough that the reply is
//! never trusted to be pure JSON. The object is taken to span from the first
//! `{` to the last `}` of the reply.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in reply")]
    NoObject,

    #[error("{0}")]
    Invalid(#[from] serde_json::Error),
}

/// Returns the substring between the first `{` and the last `}` inclusive,
/// or `None` when the reply has no such pair.
pub fn braced_slice(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extracts and parses the JSON object embedded in `text`.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    let slice = braced_slice(text).ok_or(ExtractError::NoObject)?;
    Ok(serde_json::from_str(slice)?)
}

/// Reads a number field and clamps it into `[0, 1]`. Anything else is `0.0`.
pub fn unit_interval(object: &Map<String, Value>, key: &str) -> f64 {
    object
        .get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
        .unwrap_or(0.0)
}

/// Reads a non-blank string field, trimmed.
pub fn non_blank_str(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Reads a list-of-strings field. A bare string is treated as a one-element
/// list, non-string items and blank entries are dropped.
pub fn string_list(object: &Map<String, Value>, key: &str) -> Vec<String> {
    match object.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_object_surrounded_by_prose() {
        let reply = "Sure! Here is my answer:\n{\"is_valid\": true, \"confidence\": 0.9}\nHope that helps.";
        let object = extract_json_object(reply).unwrap();
        assert_eq!(object.get("is_valid"), Some(&json!(true)));
    }

    #[test]
    fn test_extracts_object_inside_code_fence() {
        let reply = "```json\n{\"key\": \"value\"}\n```";
        let object = extract_json_object(reply).unwrap();
        assert_eq!(object.get("key"), Some(&json!("value")));
    }

    #[test]
    fn test_nested_objects_span_to_last_brace() {
        let reply = "x {\"outer\": {\"inner\": 1}} y";
        assert_eq!(braced_slice(reply), Some("{\"outer\": {\"inner\": 1}}"));
        let object = extract_json_object(reply).unwrap();
        assert_eq!(object["outer"]["inner"], json!(1));
    }

    #[test]
    fn test_no_braces_is_no_object() {
        assert!(matches!(
            extract_json_object("I cannot answer that."),
            Err(ExtractError::NoObject)
        ));
    }

    #[test]
    fn test_only_opening_brace_is_no_object() {
        assert!(braced_slice("start { but never closed").is_none());
    }

    #[test]
    fn test_closing_before_opening_is_no_object() {
        assert!(braced_slice("} backwards {").is_none());
    }

    #[test]
    fn test_two_objects_are_invalid_json() {
        let reply = "{\"a\": 1} and also {\"b\": 2}";
        assert!(matches!(
            extract_json_object(reply),
            Err(ExtractError::Invalid(_))
        ));
    }

    #[test]
    fn test_unit_interval_clamps_and_defaults() {
        let object = json!({"high": 1.7, "low": -0.2, "ok": 0.42, "text": "high"});
        let object = object.as_object().unwrap();
        assert_eq!(unit_interval(object, "high"), 1.0);
        assert_eq!(unit_interval(object, "low"), 0.0);
        assert!((unit_interval(object, "ok") - 0.42).abs() < f64::EPSILON);
        assert_eq!(unit_interval(object, "text"), 0.0);
        assert_eq!(unit_interval(object, "missing"), 0.0);
    }

    #[test]
    fn test_string_list_accepts_bare_string_and_drops_junk() {
        let object = json!({
            "list": ["one", "  ", 3, " two "],
            "single": "only",
            "blank": "   "
        });
        let object = object.as_object().unwrap();
        assert_eq!(string_list(object, "list"), vec!["one", "two"]);
        assert_eq!(string_list(object, "single"), vec!["only"]);
        assert!(string_list(object, "blank").is_empty());
        assert!(string_list(object, "missing").is_empty());
    }
}
