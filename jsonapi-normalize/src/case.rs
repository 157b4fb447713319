//! Key casing: `post-blocks` / `post_blocks` become `postBlocks`.

use regex::{Captures, Regex};
use serde_json::{Map, Value};

lazy_static! {
    static ref SEGMENT_REGEX: Regex = Regex::new(r#"[-_]([A-Za-z0-9_])"#).unwrap();
}

/// Uppercases the character following every `-` or `_` and drops the delimiter.
///
/// Everything else is left untouched, so `already-camelCase` becomes `alreadyCamelCase`
/// and a trailing delimiter survives.
pub fn to_camel(key: &str) -> String {
    SEGMENT_REGEX
        .replace_all(key, |caps: &Captures| caps[1].to_ascii_uppercase())
        .into_owned()
}

/// Rebuilds `value` with every object key passed through [`to_camel`], at any depth.
///
/// Scalars are returned as they are. Dates arrive here in their serialized form
/// (a string for `chrono`), so they are never taken apart.
pub fn camelize_deep(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(camelize_deep).collect()),
        Value::Object(map) => Value::Object(camelize_map(map)),
        other => other.clone(),
    }
}

/// [`camelize_deep`] for a map that is already known to be an object.
pub fn camelize_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter().map(|(k, v)| (to_camel(k), camelize_deep(v))).collect()
}

/// The two independent casing toggles of a normalize call.
///
/// `keys` governs structural names (type keys of the store, attribute, link, meta and
/// relationship names); `type_values` governs the `type` strings written into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasePolicy {
    pub keys: bool,
    pub type_values: bool,
}

impl Default for CasePolicy {
    fn default() -> Self { Self { keys: true, type_values: true } }
}

impl CasePolicy {
    pub fn key(&self, key: &str) -> String {
        if self.keys {
            to_camel(key)
        } else {
            key.to_owned()
        }
    }

    pub fn type_value(&self, ty: &str) -> String {
        if self.type_values {
            to_camel(ty)
        } else {
            ty.to_owned()
        }
    }

    /// Cases the top-level keys only; values are copied verbatim. Used for links.
    pub fn keys_only(&self, map: &Map<String, Value>) -> Map<String, Value> {
        map.iter().map(|(k, v)| (self.key(k), v.clone())).collect()
    }

    /// Cases keys at every depth. Used for attributes and meta.
    pub fn deep(&self, map: &Map<String, Value>) -> Map<String, Value> {
        if self.keys {
            camelize_map(map)
        } else {
            map.clone()
        }
    }
}
