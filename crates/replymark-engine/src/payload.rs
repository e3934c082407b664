//! Reply extraction from JSON payloads.
//!
//! A reply payload is usually an object carrying the reply text under one of a
//! few well-known keys, plus any number of other fields. Those other fields
//! become metadata rows.

use serde_json::{Map, Value};

use crate::render::Row;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Invalid reply payload: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

/// The reply text and the fields that came with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub metadata: Vec<Row>,
}

impl Reply {
    /// Keys checked, in order, for the reply text.
    pub const TEXT_KEYS: [&'static str; 4] = ["response", "answer", "message", "result"];
    pub const EMPTY_OBJECT_TEXT: &'static str = "No data returned.";

    pub fn from_value(value: &Value) -> Self {
        Self::from_value_with_threshold(value, Row::DEFAULT_LONG_THRESHOLD)
    }

    /// Extracts the reply, flagging metadata values longer than `threshold` as long.
    pub fn from_value_with_threshold(value: &Value, threshold: usize) -> Self {
        let Value::Object(map) = value else {
            return Self {
                text: stringify_value(value),
                metadata: vec![],
            };
        };

        let primary = Self::primary_key(map);
        let text = match primary {
            Some(key) => stringify_value(&map[key]),
            None if map.is_empty() => Self::EMPTY_OBJECT_TEXT.to_string(),
            None => pretty_json(value),
        };
        log::debug!("reply text taken from {}", primary.unwrap_or("<whole payload>"));

        let metadata = map
            .iter()
            .filter(|(key, _)| Some(key.as_str()) != primary)
            .map(|(key, v)| Row::new(key.as_str(), stringify_value(v), threshold))
            .collect();

        Self { text, metadata }
    }

    pub fn from_json_str(json: &str) -> Result<Self, PayloadError> {
        Self::from_json_str_with_threshold(json, Row::DEFAULT_LONG_THRESHOLD)
    }

    pub fn from_json_str_with_threshold(json: &str, threshold: usize) -> Result<Self, PayloadError> {
        let value: Value =
            serde_json::from_str(json).map_err(|source| PayloadError::InvalidJson { source })?;
        Ok(Self::from_value_with_threshold(&value, threshold))
    }

    fn primary_key(map: &Map<String, Value>) -> Option<&str> {
        let preferred: Option<&str> = Self::TEXT_KEYS
            .into_iter()
            .find(|key| map.get(*key).is_some_and(has_display_value));
        preferred.or_else(|| {
            map.iter()
                .find(|(_, v)| v.as_str().is_some_and(|s| !s.trim().is_empty()))
                .map(|(key, _)| key.as_str())
        })
    }
}

fn has_display_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// Display form of a JSON value: strings as-is, scalars via display, the rest
/// as pretty JSON.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => pretty_json(value),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
