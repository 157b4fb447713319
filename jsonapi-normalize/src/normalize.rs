use crate::extract::{extract_entities, extract_meta_data};
use crate::merge::Merge;
use crate::model::document::Document;
use crate::options::NormalizeOptions;
use crate::store::NormalizedStore;
use serde_json::Value;

/// Flattens `document` into a `type -> id -> record` store.
///
/// `data` is extracted first and `included` second, so when both carry the same
/// resource the fields of the `included` copy win; fields only one of them has are
/// kept. When `options` name an endpoint, its projection is added under `meta`.
/// The document is only read.
pub fn normalize(document: &Document, options: &NormalizeOptions) -> crate::Result<NormalizedStore> {
    let policy = options.case_policy();
    let mut store = NormalizedStore::new();

    if let Some(data) = &document.data {
        debug!("normalizing {} primary resource(s)", data.len());
        store.merge(extract_entities(data, policy)?);
    }

    if let Some(included) = &document.included {
        debug!("normalizing {} included resource(s)", included.len());
        store.merge(extract_entities(included, policy)?);
    }

    if let Some(endpoint) = options.endpoint_key() {
        debug!("projecting primary data for endpoint `{}`", endpoint);
        store.merge(extract_meta_data(document, endpoint, options)?);
    }

    Ok(store)
}

/// [`normalize`] over an untyped JSON value; a value that is not a JSON:API document
/// is reported as [`NormalizeError::MalformedInput`](crate::NormalizeError::MalformedInput).
pub fn normalize_value(document: &Value, options: &NormalizeOptions) -> crate::Result<NormalizedStore> {
    normalize(&Document::from_value(document)?, options)
}

/// [`normalize`] over a JSON string.
pub fn normalize_str(document: &str, options: &NormalizeOptions) -> crate::Result<NormalizedStore> {
    normalize(&document.parse::<Document>()?, options)
}
