use crate::model::resource::IdentifierData;
use crate::model::{deserialize_present, Links, Meta};
use indexmap::IndexMap;

/// Relationships of a resource, in the order they were declared; a repeated name keeps
/// its first position and its last value
pub type Relationships = IndexMap<String, Relationship>;

/// Relationship with another object
///
/// `data` is `None` when the member is absent, `Some(None)` when it is `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Relationship {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "deserialize_present")]
    pub data: Option<Option<IdentifierData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub meta: Option<Meta>,
}
