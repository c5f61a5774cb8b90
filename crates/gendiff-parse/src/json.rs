use gendiff_types::{Document, Value};

use crate::error::DecodeError;
use crate::format::DocumentFormat;

pub(crate) fn decode(content: &[u8]) -> Result<Document, DecodeError> {
    let raw: serde_json::Value = serde_json::from_slice(content)?;
    match convert(raw) {
        Value::Mapping(map) => Ok(map),
        other => Err(DecodeError::NotAMapping {
            format: DocumentFormat::Json,
            found: other.type_name(),
        }),
    }
}

fn convert(raw: serde_json::Value) -> Value {
    match raw {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) => Value::Number(f),
            None => Value::String(n.to_string()),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Sequence(items.into_iter().map(convert).collect()),
        serde_json::Value::Object(map) => {
            Value::Mapping(map.into_iter().map(|(k, v)| (k, convert(v))).collect())
        }
    }
}
