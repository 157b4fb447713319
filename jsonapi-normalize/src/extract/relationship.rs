use crate::case::CasePolicy;
use crate::model::relationship::{Relationship, Relationships};
use crate::model::resource::ResourceIdentifier;

/// Normalizes the `relationships` block of one resource.
///
/// Every relationship name is kept, even when its object is empty. `data` keeps its
/// shape: absent stays absent, `null` stays `null`, `[]` stays `[]`.
pub fn extract_relationships(relationships: &Relationships, policy: CasePolicy) -> Relationships {
    relationships
        .iter()
        .map(|(name, relationship)| {
            trace!("relationship `{}`: {}", name, describe(relationship));
            (policy.key(name), extract_relationship(relationship, policy))
        })
        .collect()
}

fn extract_relationship(relationship: &Relationship, policy: CasePolicy) -> Relationship {
    Relationship {
        data: relationship
            .data
            .as_ref()
            .map(|data| data.as_ref().map(|data| data.map(|id| extract_identifier(id, policy)))),
        links: relationship.links.as_ref().map(|links| policy.keys_only(links)),
        meta: relationship.meta.as_ref().map(|meta| policy.deep(meta)),
    }
}

fn extract_identifier(id: &ResourceIdentifier, policy: CasePolicy) -> ResourceIdentifier {
    ResourceIdentifier {
        ty: policy.type_value(&id.ty),
        id: id.id.clone(),
        meta: id.meta.as_ref().map(|meta| policy.deep(meta)),
    }
}

fn describe(relationship: &Relationship) -> &'static str {
    match relationship.data {
        None => "no data",
        Some(None) => "null",
        Some(Some(ref data)) if data.is_to_many() => "to-many",
        Some(Some(_)) => "to-one",
    }
}
