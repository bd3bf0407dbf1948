//! REST API modules.
//!
//! Handlers negotiate between the HAL and JSON:API representations, then
//! delegate document assembly to [`represent`].

pub mod customers;
pub mod error;
pub mod health;
pub mod negotiate;
pub mod orders;
pub mod products;
pub mod represent;

pub use error::{ApiError, ApiResult};
pub use negotiate::Representation;
