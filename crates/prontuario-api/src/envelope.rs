//! Responses wrap their payload in a key named after the resource,
//! e.g. `{ "patients": [...] }` or `{ "record": {...} }`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

pub fn unwrap<T: DeserializeOwned>(mut value: Value, key: &str) -> Result<T, ApiError> {
    let inner = value
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ApiError::MissingEnvelope(key.to_string()))?;
    Ok(serde_json::from_value(inner)?)
}
