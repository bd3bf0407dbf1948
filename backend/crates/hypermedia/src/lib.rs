//! Wire-format primitives for hypermedia (HATEOAS) HTTP APIs.
//!
//! Purpose: model the two public hypermedia conventions the backend speaks so
//! that handlers assemble typed documents instead of hand-rolling JSON:
//!
//! - [`hal`] — Hypertext Application Language (`application/hal+json`): a
//!   representation whose top-level `_links` object maps relation names to
//!   link objects, with optional `_embedded` sub-resources.
//! - [`jsonapi`] — JSON:API (`application/vnd.api+json`): typed resource
//!   objects whose `relationships` object carries `links.related` URLs and
//!   `data` resource identifiers.
//!
//! The crate is transport agnostic. It knows nothing about HTTP frameworks,
//! content negotiation, or the domain model; callers supply serialisable
//! state and resolved URLs.

pub mod hal;
pub mod jsonapi;
pub mod link;

pub use self::hal::{HAL_JSON, HalError, HalResource};
pub use self::jsonapi::{
    Document, JSONAPI, JsonApiError, Relationship, RelationshipData, ResourceIdentifier,
    ResourceObject,
};
pub use self::link::{Link, LinkBase, LinkError, Relation};
