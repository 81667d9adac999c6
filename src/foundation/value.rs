//! Lenient accessors over untyped JSON content.
//!
//! Authored content is partially malformed by construction, so every accessor here defaults
//! instead of failing.

use serde_json::Value;

pub(crate) fn str_field(obj: &Value, key: &str) -> String {
    opt_str(obj, key).unwrap_or_default()
}

/// Non-empty, trimmed string field.
pub(crate) fn opt_str(obj: &Value, key: &str) -> Option<String> {
    let s = obj.get(key)?.as_str()?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub(crate) fn bool_field(obj: &Value, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

pub(crate) fn u32_field(obj: &Value, key: &str) -> Option<u32> {
    let v = obj.get(key)?;
    let n = match v {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64))?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    u32::try_from(n).ok()
}

pub(crate) fn array_field<'a>(obj: &'a Value, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
