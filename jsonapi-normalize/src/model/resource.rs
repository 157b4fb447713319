use crate::model::relationship::Relationships;
use crate::model::{Attributes, Id, Links, Meta};
use std::slice;

pub type ResourceIdentifiers = Vec<ResourceIdentifier>;
pub type Resources = Vec<Resource>;

/// Resource Identifier
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Linkage of a relationship that is not `null`: to-one or to-many
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum IdentifierData {
    Single(ResourceIdentifier),
    Multiple(ResourceIdentifiers),
}

impl IdentifierData {
    /// Views either shape as a slice, a to-one linkage being a slice of one.
    pub fn identifiers(&self) -> &[ResourceIdentifier] {
        match self {
            IdentifierData::Single(id) => slice::from_ref(id),
            IdentifierData::Multiple(ids) => ids.as_slice(),
        }
    }

    pub fn is_to_many(&self) -> bool { matches!(self, IdentifierData::Multiple(_)) }

    /// Rebuilds the linkage with the same cardinality.
    pub fn map<F>(&self, f: F) -> IdentifierData
    where
        F: Fn(&ResourceIdentifier) -> ResourceIdentifier,
    {
        match self {
            IdentifierData::Single(id) => IdentifierData::Single(f(id)),
            IdentifierData::Multiple(ids) => IdentifierData::Multiple(ids.iter().map(f).collect()),
        }
    }
}

/// JSON-API Resource
///
/// Every optional member is kept as `Option` so that an absent member and an empty one
/// (`"attributes": {}`) stay distinguishable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Resource {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub attributes: Option<Attributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub relationships: Option<Relationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl Resource {
    pub fn new(ty: impl Into<String>, id: impl Into<Id>) -> Self {
        Self {
            ty: ty.into(),
            id: id.into(),
            attributes: None,
            relationships: None,
            links: None,
            meta: None,
        }
    }
}
