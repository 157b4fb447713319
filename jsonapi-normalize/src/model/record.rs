use crate::model::relationship::Relationships;
use crate::model::{Attributes, Id, Links, Meta};

/// A resource as stored under `store[type][id]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub id: Id,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub attributes: Option<Attributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

/// Identity echo of one primary resource, kept under the endpoint meta
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResourceProjection {
    pub id: Id,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

/// An empty JSON object, `{}`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Empty {}

/// `data` of an endpoint projection: the primary resources, or `{}` when the document had none
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ProjectionData {
    Resources(Vec<ResourceProjection>),
    Empty(Empty),
}

impl Default for ProjectionData {
    fn default() -> Self { ProjectionData::Empty(Empty {}) }
}

/// Everything stored for one endpoint under the store's `meta` key
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct EndpointProjection {
    pub data: ProjectionData,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub meta: Option<Meta>,
}
