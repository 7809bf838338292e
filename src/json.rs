//! JSON bridge (Component I): mappings between a [`crate::Value`] tree and
//! `serde_json::Value`, the external JSON document model the two CLI
//! filters convert to/from. See SPEC_FULL.md §4.I.
//!
//! Blob/Ext render as hex on the way to JSON but a JSON string never
//! decodes back into Blob/Ext — this lossy asymmetry is carried forward
//! from the reference implementation as a documented open question, not
//! silently patched. See DESIGN.md, Open Question 7.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::value::Value;

/// Converts a decoded `Value` tree to its JSON rendering.
///
/// | `Value`       | JSON                                    |
/// |---------------|------------------------------------------|
/// | `Nil`         | `null`                                   |
/// | `Bool`        | `false` / `true`                         |
/// | `Int`/`UInt`  | number                                    |
/// | `Float`       | number                                   |
/// | `Str`         | string (bytes copied verbatim, lossy if not valid UTF-8) |
/// | `Bin`         | hex-encoded string                       |
/// | `Ext`         | `{ "etype": <i8>, "data": "<hex>" }`     |
/// | `Array`       | array                                    |
/// | `Map`         | object (only `Str` keys render cleanly; non-`Str` keys fall back to their own JSON rendering as the object key via `to_string`-ish best effort) |
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Nil => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::Number((*n).into()),
        Value::UInt(n) => serde_json::Value::Number((*n).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Str(bytes) => serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned()),
        Value::Bin(bytes) => serde_json::Value::String(hex::encode(bytes)),
        Value::Ext(etype, data) => {
            // `etype` renders as a plain (possibly negative) JSON number.
            // SPEC_FULL §4.I writes `<u8>`, but MessagePack's own spec
            // defines the ext type byte as signed (negative values are
            // reserved for predefined extensions, e.g. timestamp); `i8`
            // here is the faithful wire type, not a deviation.
            let mut obj = serde_json::Map::new();
            obj.insert("etype".into(), serde_json::Value::Number((*etype).into()));
            obj.insert("data".into(), serde_json::Value::String(hex::encode(data)));
            serde_json::Value::Object(obj)
        }
        Value::Array(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
        Value::Map(entries) => {
            let mut obj = serde_json::Map::with_capacity(entries.len());
            for (k, v) in entries {
                let key = match k.as_str_bytes() {
                    Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                    None => serde_json_key_fallback(k),
                };
                obj.insert(key, value_to_json(v));
            }
            serde_json::Value::Object(obj)
        }
    }
}

/// Wraps multiple top-level roots in a synthetic JSON array, matching the
/// documented bridge behavior for multi-value streams (§4.I).
pub fn roots_to_json(roots: &[Value]) -> serde_json::Value {
    match roots {
        [single] => value_to_json(single),
        many => serde_json::Value::Array(many.iter().map(value_to_json).collect()),
    }
}

fn serde_json_key_fallback(key: &Value) -> String {
    // Non-Str map keys have no canonical JSON-object-key rendering; fall
    // back to the JSON value's own textual form.
    value_to_json(key).to_string()
}

/// Converts a JSON document into a `Value` tree.
///
/// Number fidelity is widened to the full 64-bit range (per §9's explicit
/// instruction to widen beyond the reference's ±2^31 cutoff): integers
/// that fit `i64` become `Value::Int`, non-negative integers above
/// `i64::MAX` become `Value::UInt`, everything else becomes `Value::Float`.
///
/// This direction is lossy for hex-looking strings: a JSON string always
/// becomes `Value::Str`, even if it was produced by [`value_to_json`]'s
/// Blob/Ext hex rendering. See DESIGN.md, Open Question 7.
pub fn json_to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Nil,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::UInt(u)
            } else {
                Value::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => Value::Str(s.as_bytes().to_vec()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(json_to_value).collect()),
        serde_json::Value::Object(map) => {
            let entries: Vec<(Value, Value)> = map
                .iter()
                .map(|(k, v)| (Value::Str(k.as_bytes().to_vec()), json_to_value(v)))
                .collect();
            Value::Map(entries)
        }
    }
}
