//! Decoding of Firestore typed values into plain JSON.
//!
//! The REST API wraps every field in a single-key object naming its type,
//! e.g. `{"stringValue": "u1"}` or `{"arrayValue": {"values": [...]}}`.

use serde_json::{Map, Number, Value};
use store::BackendError;

/// Decode a document's `fields` map.
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Map<String, Value>, BackendError> {
    fields
        .iter()
        .map(|(name, value)| Ok((name.clone(), decode_value(value)?)))
        .collect()
}

/// Decode one typed value.
pub fn decode_value(value: &Value) -> Result<Value, BackendError> {
    let Some((kind, inner)) = value.as_object().and_then(|o| o.iter().next()) else {
        return Err(BackendError::Decode(format!("not a typed value: {value}")));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => Ok(Value::Bool(inner.as_bool().unwrap_or_default())),
        // 64-bit integers travel as strings
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .map_err(|e| BackendError::Decode(format!("integerValue {s}: {e}"))),
            Value::Number(n) => Ok(Value::Number(n.clone())),
            other => Err(BackendError::Decode(format!("integerValue {other}"))),
        },
        // NaN and infinities arrive as strings and have no JSON form
        "doubleValue" => Ok(inner
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => {
            Ok(Value::String(inner.as_str().unwrap_or_default().to_string()))
        }
        "geoPointValue" => Ok(inner.clone()),
        "mapValue" => {
            let empty = Map::new();
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .unwrap_or(&empty);
            decode_fields(fields).map(Value::Object)
        }
        "arrayValue" => inner
            .get("values")
            .and_then(Value::as_array)
            .map(|values| values.iter().map(decode_value).collect::<Result<Vec<_>, _>>())
            .unwrap_or_else(|| Ok(Vec::new()))
            .map(Value::Array),
        other => Err(BackendError::Decode(format!("unsupported value type {other}"))),
    }
}

/// Last segment of a document resource name.
pub fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
