//! Parsed response bodies

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of an API response
///
/// JSON when the server labelled it `application/json`, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parse a body according to its content type
    pub(crate) fn parse(content_type: Option<&str>, text: String) -> Result<Self, serde_json::Error> {
        if content_type.is_some_and(|ct| ct.contains("application/json")) {
            Ok(Self::Json(serde_json::from_str(&text)?))
        } else {
            Ok(Self::Text(text))
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// Deserialize the body into a typed value
    ///
    /// Text bodies are parsed as JSON, for servers that omit the content type.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        match self {
            Self::Json(value) => serde_json::from_value(value),
            Self::Text(text) => serde_json::from_str(&text),
        }
    }

    /// Best human-readable message carried by an error body
    ///
    /// `error`, then `message`, then the body itself. Empty strings, zero,
    /// `false` and `null` carry no message.
    pub(crate) fn error_message(&self) -> Option<String> {
        match self {
            Self::Json(Value::Object(map)) => ["error", "message"]
                .iter()
                .find_map(|field| map.get(*field).and_then(scalar_message)),
            Self::Json(value) => scalar_message(value),
            Self::Text(text) if !text.is_empty() => Some(text.clone()),
            Self::Text(_) => None,
        }
    }
}

fn scalar_message(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
