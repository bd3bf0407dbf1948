//! Orders and their line items.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed but not yet paid.
    Pending,
    /// Payment captured.
    Paid,
    /// Handed to the carrier.
    Shipped,
    /// Cancelled before fulfilment.
    Cancelled,
}

/// One line of an order: a product at a quantity and captured unit price.
///
/// The unit price is copied from the product at purchase time so later
/// catalogue changes do not rewrite order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product the line refers to.
    pub product_id: Uuid,
    /// Units ordered; always at least one.
    #[schema(example = 2)]
    pub quantity: u32,
    /// Unit price in minor currency units at purchase time.
    #[schema(example = 2450)]
    pub unit_price_cents: i64,
}

impl OrderItem {
    /// Line total in minor currency units.
    pub const fn line_total_cents(&self) -> i64 {
        self.unit_price_cents.saturating_mul(self.quantity as i64)
    }
}

/// A customer's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Stable order identifier.
    pub id: Uuid,
    /// Customer who placed the order.
    pub customer_id: Uuid,
    /// Lifecycle state.
    pub status: OrderStatus,
    /// ISO 4217 currency code for all monetary amounts on the order.
    #[schema(example = "GBP")]
    pub currency: String,
    /// Line items making up the order.
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Order total in minor currency units, derived from the line items.
    pub fn total_cents(&self) -> i64 {
        self.items
            .iter()
            .map(OrderItem::line_total_cents)
            .fold(0, i64::saturating_add)
    }
}
