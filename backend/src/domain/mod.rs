//! Domain primitives and the storefront resource graph.
//!
//! Purpose: define strongly typed, transport-agnostic storefront entities
//! and the validated in-memory graph the API serves. Keep types immutable
//! and document invariants and serialisation contracts (serde) in each
//! type's Rustdoc.
//!
//! Public surface:
//! - [`Order`], [`OrderItem`], [`OrderStatus`] — orders and their lines.
//! - [`Product`], [`Customer`] — the resources orders link to.
//! - [`Catalogue`] — the validated resource graph with id lookups.
//! - [`DomainError`], [`ErrorCode`] — transport-agnostic failures.

pub mod catalogue;
pub mod customer;
pub mod error;
pub mod order;
pub mod product;

pub use self::catalogue::{Catalogue, CatalogueValidationError};
pub use self::customer::Customer;
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::order::{Order, OrderItem, OrderStatus};
pub use self::product::Product;

/// Response header carrying the request-scoped trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
