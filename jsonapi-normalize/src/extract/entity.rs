use crate::case::CasePolicy;
use crate::extract::relationship::extract_relationships;
use crate::model::document::PrimaryDataItem;
use crate::model::record::NormalizedRecord;
use crate::model::resource::Resource;
use crate::store::NormalizedStore;

/// Builds the `type -> id -> record` fragment of a `data` or `included` section.
///
/// Resources are visited in input order; one appearing twice in the section is merged
/// into its first entry, the later occurrence winning on shared fields.
pub fn extract_entities(section: &PrimaryDataItem, policy: CasePolicy) -> crate::Result<NormalizedStore> {
    let mut fragment = NormalizedStore::new();
    for resource in section.resources() {
        let type_key = policy.key(&resource.ty);
        trace!("extracting {}/{} as {}", resource.ty, resource.id, type_key);
        fragment.insert_record(&type_key, &to_record(resource, policy))?;
    }
    Ok(fragment)
}

/// The denormalized record of one resource. Members absent from the input stay absent.
pub fn to_record(resource: &Resource, policy: CasePolicy) -> NormalizedRecord {
    NormalizedRecord {
        id: resource.id.clone(),
        ty: policy.type_value(&resource.ty),
        attributes: resource.attributes.as_ref().map(|attributes| policy.deep(attributes)),
        links: resource.links.as_ref().map(|links| policy.keys_only(links)),
        meta: resource.meta.as_ref().map(|meta| policy.deep(meta)),
        relationships: resource
            .relationships
            .as_ref()
            .map(|relationships| extract_relationships(relationships, policy)),
    }
}
