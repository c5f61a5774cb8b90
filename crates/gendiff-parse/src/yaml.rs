use std::collections::BTreeMap;

use gendiff_types::{Document, Value};

use crate::error::DecodeError;
use crate::format::DocumentFormat;

/// Decode a YAML stream. An empty stream (or a bare `null`) is an empty
/// document.
pub(crate) fn decode(content: &[u8]) -> Result<Document, DecodeError> {
    let raw: serde_yaml::Value = serde_yaml::from_slice(content)?;
    match convert(raw)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Document::new()),
        other => Err(DecodeError::NotAMapping {
            format: DocumentFormat::Yaml,
            found: other.type_name(),
        }),
    }
}

fn convert(raw: serde_yaml::Value) -> Result<Value, DecodeError> {
    Ok(match raw {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => match n.as_f64() {
            Some(f) => Value::Number(f),
            None => Value::String(n.to_string()),
        },
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(convert)
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(map) => {
            let mut out = BTreeMap::new();
            for (k, v) in map {
                let key = key_string(k)?;
                if out.contains_key(&key) {
                    return Err(DecodeError::DuplicateKey { key });
                }
                out.insert(key, convert(v)?);
            }
            Value::Mapping(out)
        }
        serde_yaml::Value::Tagged(tagged) => convert(tagged.value)?,
    })
}

// Non-string keys (`1: a`, `true: b`) are stringified.
fn key_string(key: serde_yaml::Value) -> Result<String, DecodeError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        other => Ok(convert(other)?.to_string()),
    }
}
