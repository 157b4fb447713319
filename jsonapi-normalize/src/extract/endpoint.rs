use crate::case::CasePolicy;
use crate::extract::relationship::extract_relationships;
use crate::model::document::Document;
use crate::model::record::{EndpointProjection, ProjectionData, ResourceProjection};
use crate::model::resource::Resource;
use crate::options::{strip_query, NormalizeOptions};
use crate::store::{NormalizedStore, META_KEY};
use serde_json::{Map, Value};

/// Builds the `meta` fragment of the store for `endpoint`.
///
/// With `filter_endpoint` the projection sits right under `meta[endpoint]`. Without it,
/// the projection goes one level deeper, under the query string of the endpoint
/// (`meta["posts/me"]["?page=2"]`), and the outer object only carries the document links.
/// An endpoint without a query string is partitioned under the empty key.
pub fn extract_meta_data(
    document: &Document, endpoint: &str, options: &NormalizeOptions,
) -> crate::Result<NormalizedStore> {
    let projection = serde_json::to_value(project(document, options.case_policy()))?;

    let base = strip_query(endpoint);
    let query = &endpoint[base.len()..];

    let mut by_endpoint = Map::new();
    if options.filter_endpoint {
        by_endpoint.insert(base.to_owned(), projection);
    } else {
        let mut outer = Map::new();
        if let Some(links) = &document.links {
            outer.insert("links".into(), Value::Object(links.clone()));
        }
        outer.insert(query.to_owned(), projection);
        by_endpoint.insert(base.to_owned(), Value::Object(outer));
    }

    let mut fragment = Map::new();
    fragment.insert(META_KEY.into(), Value::Object(by_endpoint));
    Ok(fragment.into())
}

/// The identity echo of the document's primary data, with its top-level links and meta.
pub fn project(document: &Document, policy: CasePolicy) -> EndpointProjection {
    let data = match &document.data {
        Some(data) => ProjectionData::Resources(
            data.resources().iter().map(|res| project_resource(res, policy)).collect(),
        ),
        None => ProjectionData::default(),
    };
    EndpointProjection {
        data,
        links: document.links.clone(),
        meta: document.meta.as_ref().map(|meta| policy.deep(meta)),
    }
}

fn project_resource(resource: &Resource, policy: CasePolicy) -> ResourceProjection {
    ResourceProjection {
        id: resource.id.clone(),
        ty: policy.type_value(&resource.ty),
        relationships: resource
            .relationships
            .as_ref()
            .map(|relationships| extract_relationships(relationships, policy)),
    }
}
