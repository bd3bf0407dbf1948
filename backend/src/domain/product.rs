//! Product catalogue entries.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A purchasable product.
///
/// Prices are integer minor units (cents, pence) to keep monetary arithmetic
/// exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable product identifier.
    pub id: Uuid,
    /// Merchant stock-keeping unit.
    #[schema(example = "KET-0042")]
    pub sku: String,
    /// Display name.
    #[schema(example = "Stovetop kettle")]
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Unit price in minor currency units.
    #[schema(example = 2450)]
    pub price_cents: i64,
}
