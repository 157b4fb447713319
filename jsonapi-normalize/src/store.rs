use crate::merge::Merge;
use crate::model::record::NormalizedRecord;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Key of the store holding endpoint projections
pub const META_KEY: &str = "meta";

/// Flattened output of a normalize call: `type -> id -> record`, plus `meta` when an
/// endpoint was given. Types and ids keep the order they were first seen in.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct NormalizedStore(Map<String, Value>);

impl NormalizedStore {
    pub fn new() -> Self { Default::default() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    /// Top-level keys, the reserved `meta` key excluded
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str).filter(|k| *k != META_KEY)
    }

    /// Merges `record` into `self[type_key][record.id]`; fields of a record already
    /// stored under the same key are overwritten field by field, others are kept.
    pub fn insert_record(&mut self, type_key: &str, record: &NormalizedRecord) -> crate::Result<()> {
        let mut by_id = Map::new();
        by_id.insert(record.id.to_string(), serde_json::to_value(record)?);
        let mut fragment = Map::new();
        fragment.insert(type_key.to_owned(), Value::Object(by_id));
        self.0.merge(fragment);
        Ok(())
    }

    pub fn resources(&self, ty: &str) -> Option<&Map<String, Value>> {
        self.0.get(ty).and_then(Value::as_object)
    }

    pub fn get(&self, ty: &str, id: &str) -> Option<&Value> {
        self.resources(ty).and_then(|by_id| by_id.get(id))
    }

    /// Typed read-back of a stored record
    pub fn record(&self, ty: &str, id: &str) -> crate::Result<Option<NormalizedRecord>> {
        match self.get(ty, id) {
            Some(value) => Ok(Some(NormalizedRecord::deserialize(value)?)),
            None => Ok(None),
        }
    }

    /// The projection stored for an endpoint key (already filtered or not)
    pub fn endpoint_meta(&self, endpoint: &str) -> Option<&Value> {
        self.0.get(META_KEY).and_then(|meta| meta.get(endpoint))
    }

    pub fn as_map(&self) -> &Map<String, Value> { &self.0 }

    pub fn into_value(self) -> Value { Value::Object(self.0) }
}

impl Merge for NormalizedStore {
    fn merge(&mut self, other: NormalizedStore) { self.0.merge(other.0) }
}

impl From<Map<String, Value>> for NormalizedStore {
    fn from(map: Map<String, Value>) -> Self { NormalizedStore(map) }
}

impl From<NormalizedStore> for Value {
    fn from(store: NormalizedStore) -> Self { store.into_value() }
}
