//! Backend library modules for the hypermedia storefront API.

pub mod api;
pub mod config;
pub mod doc;
pub mod domain;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Trace middleware attaching request-scoped identifiers.
pub use middleware::Trace;
