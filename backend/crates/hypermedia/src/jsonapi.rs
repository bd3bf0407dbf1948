//! JSON:API (`application/vnd.api+json`) document building.
//!
//! Models the subset of the JSON:API specification the backend emits: typed
//! resource objects whose `relationships` entries carry a `links.related`
//! URL and `data` resource identifiers, wrapped in a top-level [`Document`]
//! that may carry `included` resources for compound responses:
//!
//! ```json
//! {
//!   "data": {
//!     "type": "orders",
//!     "id": "…",
//!     "attributes": { "status": "paid" },
//!     "relationships": {
//!       "items": {
//!         "links": { "related": "…/orders/…/items" },
//!         "data": [{ "type": "products", "id": "…" }]
//!       }
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Media type of a JSON:API document.
pub const JSONAPI: &str = "application/vnd.api+json";

/// Failures raised while assembling a JSON:API document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonApiError {
    /// Resource attributes serialised to something other than a JSON object.
    #[error("resource attributes must serialise to a JSON object")]
    AttributesNotAnObject,
    /// Resource attributes failed to serialise at all.
    #[error("resource attributes failed to serialise: {0}")]
    AttributeSerialisation(String),
}

/// A `(type, id)` pair identifying a resource without its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceIdentifier {
    /// Resource type, e.g. `orders`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource identifier within its type.
    pub id: String,
}

impl ResourceIdentifier {
    /// Identify a resource by type and id.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

/// Links attached to a relationship entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLinks {
    /// URL resolving to the related resource(s).
    pub related: String,
}

/// Resource linkage: one identifier, a nullable one, or many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// To-one linkage; `None` serialises as `"data": null`.
    One(Option<ResourceIdentifier>),
    /// To-many linkage.
    Many(Vec<ResourceIdentifier>),
}

/// A named relationship on a resource object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Navigation links for the relationship.
    pub links: RelationshipLinks,
    /// Resource linkage identifying the related resource(s).
    pub data: RelationshipData,
}

impl Relationship {
    /// A to-one relationship with a `related` link.
    #[must_use]
    pub fn to_one(related: impl Into<String>, target: Option<ResourceIdentifier>) -> Self {
        Self {
            links: RelationshipLinks {
                related: related.into(),
            },
            data: RelationshipData::One(target),
        }
    }

    /// A to-many relationship with a `related` link.
    #[must_use]
    pub fn to_many(related: impl Into<String>, targets: Vec<ResourceIdentifier>) -> Self {
        Self {
            links: RelationshipLinks {
                related: related.into(),
            },
            data: RelationshipData::Many(targets),
        }
    }
}

/// Links attached to a resource object or document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfLink {
    /// Canonical URL of the resource or document.
    #[serde(rename = "self")]
    pub self_link: String,
}

/// A full resource object: identity, attributes, and relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
    /// Resource type, e.g. `orders`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource identifier within its type.
    pub id: String,
    /// Attribute object; empty attributes are omitted from the wire form.
    #[serde(skip_serializing_if = "Map::is_empty", default)]
    pub attributes: Map<String, Value>,
    /// Named relationships to other resources.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub relationships: BTreeMap<String, Relationship>,
    /// Resource-level links, at least `self`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub links: Option<SelfLink>,
}

impl ResourceObject {
    /// Build a resource object from serialisable attributes.
    ///
    /// # Errors
    /// Returns [`JsonApiError::AttributesNotAnObject`] when the attributes
    /// serialise to a scalar or array, and
    /// [`JsonApiError::AttributeSerialisation`] when they cannot be
    /// serialised at all.
    pub fn new<A: Serialize>(
        kind: impl Into<String>,
        id: impl Into<String>,
        attributes: &A,
    ) -> Result<Self, JsonApiError> {
        let value = serde_json::to_value(attributes)
            .map_err(|err| JsonApiError::AttributeSerialisation(err.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(JsonApiError::AttributesNotAnObject);
        };
        Ok(Self {
            kind: kind.into(),
            id: id.into(),
            attributes: fields,
            relationships: BTreeMap::new(),
            links: None,
        })
    }

    /// Attach the resource's canonical `self` link.
    #[must_use]
    pub fn with_self_link(mut self, href: impl Into<String>) -> Self {
        self.links = Some(SelfLink {
            self_link: href.into(),
        });
        self
    }

    /// Add a named relationship. Re-adding a name replaces the entry.
    #[must_use]
    pub fn relationship(mut self, name: impl Into<String>, relationship: Relationship) -> Self {
        self.relationships.insert(name.into(), relationship);
        self
    }

    /// The `(type, id)` identifier of this resource.
    #[must_use]
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.kind.clone(), self.id.clone())
    }
}

/// Primary data of a document: a single resource or a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    /// Single-resource document.
    One(ResourceObject),
    /// Collection document; an empty collection serialises as `"data": []`.
    Many(Vec<ResourceObject>),
}

/// Top-level JSON:API document.
///
/// ## Invariants
/// - `included` never contains two entries with the same `(type, id)`, nor
///   an entry already present as primary data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Primary data.
    pub data: PrimaryData,
    /// Document-level links, at least `self`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub links: Option<SelfLink>,
    /// Side-loaded resources for compound documents.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub included: Vec<ResourceObject>,
}

impl Document {
    /// A document whose primary data is a single resource.
    #[must_use]
    pub const fn single(resource: ResourceObject) -> Self {
        Self {
            data: PrimaryData::One(resource),
            links: None,
            included: Vec::new(),
        }
    }

    /// A document whose primary data is a collection.
    #[must_use]
    pub const fn collection(resources: Vec<ResourceObject>) -> Self {
        Self {
            data: PrimaryData::Many(resources),
            links: None,
            included: Vec::new(),
        }
    }

    /// Attach the document's canonical `self` link.
    #[must_use]
    pub fn with_self_link(mut self, href: impl Into<String>) -> Self {
        self.links = Some(SelfLink {
            self_link: href.into(),
        });
        self
    }

    /// Side-load a resource into `included`.
    ///
    /// Including a `(type, id)` already present in the primary data or in
    /// `included` is a no-op, keeping compound documents duplicate free.
    #[must_use]
    pub fn include(mut self, resource: ResourceObject) -> Self {
        if !self.contains(&resource.kind, &resource.id) {
            self.included.push(resource);
        }
        self
    }

    fn contains(&self, kind: &str, id: &str) -> bool {
        let in_primary = match &self.data {
            PrimaryData::One(resource) => resource.kind == kind && resource.id == id,
            PrimaryData::Many(resources) => resources
                .iter()
                .any(|resource| resource.kind == kind && resource.id == id),
        };
        in_primary
            || self
                .included
                .iter()
                .any(|resource| resource.kind == kind && resource.id == id)
    }
}

#[cfg(test)]
mod tests;
