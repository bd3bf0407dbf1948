//! HAL (`application/hal+json`) representation building.
//!
//! A [`HalResource`] wraps a resource's serialisable state and accumulates
//! links and embedded sub-resources. On the wire the state's fields sit at
//! the top level, followed by `_links` and `_embedded`:
//!
//! ```json
//! {
//!   "id": "…",
//!   "status": "paid",
//!   "_links": {
//!     "self": { "href": "https://shop.example.com/api/orders/…" },
//!     "items": { "href": "https://shop.example.com/api/orders/…/items" }
//!   }
//! }
//! ```
//!
//! HAL permits either a single link object or an array per relation;
//! registering a second link (or embedded resource) for a relation upgrades
//! the entry to an array.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::link::{Link, Relation};

/// Media type of a HAL representation.
pub const HAL_JSON: &str = "application/hal+json";

/// Failures raised while assembling a HAL representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HalError {
    /// The resource state serialised to something other than a JSON object.
    #[error("HAL resource state must serialise to a JSON object")]
    StateNotAnObject,
    /// The resource state failed to serialise at all.
    #[error("HAL resource state failed to serialise: {0}")]
    StateSerialisation(String),
    /// A custom relation name was empty.
    #[error("link relation names must not be empty")]
    EmptyRelation,
}

/// One link object or an array of them, per the HAL grammar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn push(&mut self, value: T) {
        match std::mem::replace(self, Self::Many(Vec::new())) {
            Self::One(first) => *self = Self::Many(vec![first, value]),
            Self::Many(mut entries) => {
                entries.push(value);
                *self = Self::Many(entries);
            }
        }
    }
}

/// Insertion-ordered relation table serialised as a JSON object.
#[derive(Debug, Clone, PartialEq)]
struct RelationMap<T>(Vec<(String, OneOrMany<T>)>);

impl<T> Default for RelationMap<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> RelationMap<T> {
    fn insert(&mut self, rel: &str, value: T) {
        if let Some((_, entry)) = self.0.iter_mut().find(|(name, _)| name == rel) {
            entry.push(value);
        } else {
            self.0.push((rel.to_owned(), OneOrMany::One(value)));
        }
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Serialize> Serialize for RelationMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, entry) in &self.0 {
            map.serialize_entry(rel, entry)?;
        }
        map.end()
    }
}

/// Builder for a HAL resource representation.
///
/// ## Invariants
/// - The wrapped state serialises to a JSON object.
/// - Relation names are non-empty.
///
/// # Examples
/// ```
/// use hypermedia::{HalResource, Link, Relation};
/// use serde_json::json;
///
/// let order = HalResource::new(&json!({ "status": "paid" }))
///     .expect("object state")
///     .link(Relation::Self_, Link::new("https://shop.example.com/api/orders/1"));
/// let value = serde_json::to_value(&order).expect("serialises");
/// assert_eq!(value["_links"]["self"]["href"], "https://shop.example.com/api/orders/1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HalResource {
    state: Map<String, Value>,
    links: RelationMap<Link>,
    embedded: RelationMap<HalResource>,
}

impl HalResource {
    /// Wrap serialisable state as the representation's top-level fields.
    ///
    /// # Errors
    /// Returns [`HalError::StateNotAnObject`] when the state serialises to a
    /// scalar or array, and [`HalError::StateSerialisation`] when it cannot
    /// be serialised at all.
    pub fn new<S: Serialize>(state: &S) -> Result<Self, HalError> {
        let value = serde_json::to_value(state)
            .map_err(|err| HalError::StateSerialisation(err.to_string()))?;
        match value {
            Value::Object(fields) => Ok(Self {
                state: fields,
                links: RelationMap::default(),
                embedded: RelationMap::default(),
            }),
            _ => Err(HalError::StateNotAnObject),
        }
    }

    /// A resource with no state of its own, used for collection envelopes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            state: Map::new(),
            links: RelationMap::default(),
            embedded: RelationMap::default(),
        }
    }

    /// Register a link under a typed relation.
    ///
    /// Registering the same relation again upgrades the entry to an array.
    #[must_use]
    pub fn link(mut self, rel: Relation, link: Link) -> Self {
        self.links.insert(rel.as_str(), link);
        self
    }

    /// Register a link under a free-form relation name.
    ///
    /// # Errors
    /// Returns [`HalError::EmptyRelation`] when `rel` is empty once trimmed.
    pub fn link_named(mut self, rel: &str, link: Link) -> Result<Self, HalError> {
        if rel.trim().is_empty() {
            return Err(HalError::EmptyRelation);
        }
        self.links.insert(rel, link);
        Ok(self)
    }

    /// Embed a sub-resource under a typed relation.
    ///
    /// Embedding the same relation again upgrades the entry to an array.
    #[must_use]
    pub fn embed(mut self, rel: Relation, resource: Self) -> Self {
        self.embedded.insert(rel.as_str(), resource);
        self
    }

    /// Embed a whole collection under one relation, always as an array.
    ///
    /// An empty iterator still materialises the relation as `[]` so clients
    /// can distinguish "no members" from "not embedded".
    #[must_use]
    pub fn embed_all(mut self, rel: Relation, resources: impl IntoIterator<Item = Self>) -> Self {
        let entries: Vec<Self> = resources.into_iter().collect();
        self.embedded
            .0
            .push((rel.as_str().to_owned(), OneOrMany::Many(entries)));
        self
    }
}

impl Serialize for HalResource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let reserved =
            usize::from(!self.links.is_empty()) + usize::from(!self.embedded.is_empty());
        let mut map = serializer.serialize_map(Some(self.state.len() + reserved))?;
        for (key, value) in &self.state {
            map.serialize_entry(key, value)?;
        }
        if !self.links.is_empty() {
            map.serialize_entry("_links", &self.links)?;
        }
        if !self.embedded.is_empty() {
            map.serialize_entry("_embedded", &self.embedded)?;
        }
        map.end()
    }
}
