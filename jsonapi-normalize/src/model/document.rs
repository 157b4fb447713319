use crate::error::NormalizeError;
use crate::model::resource::{Resource, Resources};
use crate::model::{Links, Meta};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::slice;
use std::str::FromStr;

/// A `data` or `included` section: one resource or a list of them
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PrimaryDataItem {
    Single(Box<Resource>),
    Multiple(Resources),
}

impl PrimaryDataItem {
    /// Views either shape as a slice, so callers never branch on cardinality.
    pub fn resources(&self) -> &[Resource] {
        match self {
            PrimaryDataItem::Single(res) => slice::from_ref(res.as_ref()),
            PrimaryDataItem::Multiple(vec) => vec.as_slice(),
        }
    }

    pub fn len(&self) -> usize { self.resources().len() }

    pub fn is_empty(&self) -> bool { self.resources().is_empty() }
}

impl<'de> Deserialize<'de> for PrimaryDataItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Decided on the JSON shape so the resource's own error (`missing field`) surfaces.
        let value = Value::deserialize(deserializer)?;
        let item = if value.is_array() {
            serde_json::from_value::<Resources>(value).map(PrimaryDataItem::Multiple)
        } else {
            serde_json::from_value::<Resource>(value).map(|res| PrimaryDataItem::Single(Box::new(res)))
        };
        item.map_err(serde::de::Error::custom)
    }
}

impl From<Resource> for PrimaryDataItem {
    fn from(res: Resource) -> Self { PrimaryDataItem::Single(Box::new(res)) }
}

impl From<Resources> for PrimaryDataItem {
    fn from(vec: Resources) -> Self { PrimaryDataItem::Multiple(vec) }
}

/// A top-level JSON:API document
///
/// `data: null` reads the same as a missing `data`. Members other than
/// `data`, `included`, `links` and `meta` are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub data: Option<PrimaryDataItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub included: Option<PrimaryDataItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl Document {
    pub fn from_value(value: &Value) -> crate::Result<Self> {
        Document::deserialize(value).map_err(NormalizeError::MalformedInput)
    }

    pub fn with_data(data: impl Into<PrimaryDataItem>) -> Self {
        Self { data: Some(data.into()), ..Default::default() }
    }

    pub fn with_included(mut self, included: impl Into<PrimaryDataItem>) -> Self {
        self.included = Some(included.into());
        self
    }
}

impl FromStr for Document {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(NormalizeError::MalformedInput)
    }
}
