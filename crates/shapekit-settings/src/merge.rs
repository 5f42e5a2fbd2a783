//! Recursive right-biased merge of JSON values.

use serde_json::{Map, Value};

/// Merge `override_value` over `initial` into a new value.
///
/// Keys from both sides are kept; on conflict the override wins. Recursion
/// only happens where the initial value is an object, so arrays and scalars
/// are replaced wholesale. A null on either side yields the other side, so
/// an explicit `null` override never erases a nested default.
pub fn assign(initial: &Value, override_value: &Value) -> Value {
    match (initial, override_value) {
        (Value::Null, other) | (other, Value::Null) => other.clone(),
        (Value::Object(initial), Value::Object(overrides)) => {
            let mut merged = Map::with_capacity(initial.len().max(overrides.len()));
            for (key, value) in initial {
                let value = match overrides.get(key) {
                    Some(over) if value.is_object() => assign(value, over),
                    Some(over) => over.clone(),
                    None => value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            for (key, value) in overrides {
                if !initial.contains_key(key) {
                    merged.insert(key.clone(), value.clone());
                }
            }
            Value::Object(merged)
        }
        (_, other) => other.clone(),
    }
}
