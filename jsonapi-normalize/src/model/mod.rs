pub mod document;
pub mod record;
pub mod relationship;
pub mod resource;

use serde_json::{Map, Value};
use std::fmt;

/// Meta-data object, can contain any data
pub type Meta = Map<String, Value>;
pub type Links = Map<String, Value>;
pub type Attributes = Map<String, Value>;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Resource id, either a string or a number on the wire
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Id {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Text(id) => f.write_str(id),
            // `3.0` is keyed as `3`, like an integral number
            Id::Number(id) => match id.as_f64() {
                Some(n) if id.is_f64() && n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER => {
                    write!(f, "{}", n as i64)
                },
                _ => write!(f, "{}", id),
            },
        }
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self { Id::Text(id.into()) }
}

impl From<String> for Id {
    fn from(id: String) -> Self { Id::Text(id) }
}

impl From<u64> for Id {
    fn from(id: u64) -> Self { Id::Number(id.into()) }
}

/// Deserializes a field that may be `null`, keeping "absent" and "null" apart:
/// combined with `#[serde(default)]` an absent field stays `None` and `null` becomes `Some(None)`.
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
