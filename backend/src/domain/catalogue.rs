//! In-memory storefront resource graph.
//!
//! The service exposes a read-only graph, so the whole catalogue lives in
//! memory and is validated once at construction: every order must reference
//! a known customer and known products, and line quantities are at least
//! one. Handlers can then resolve relationships without re-checking.

use uuid::Uuid;

use super::customer::Customer;
use super::error::DomainError;
use super::order::{Order, OrderItem, OrderStatus};
use super::product::Product;

/// Referential failures detected while assembling a [`Catalogue`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueValidationError {
    /// An order references a customer absent from the catalogue.
    #[error("order {order} references unknown customer {customer}")]
    UnknownCustomer {
        /// The offending order.
        order: Uuid,
        /// The dangling customer reference.
        customer: Uuid,
    },
    /// An order line references a product absent from the catalogue.
    #[error("order {order} references unknown product {product}")]
    UnknownProduct {
        /// The offending order.
        order: Uuid,
        /// The dangling product reference.
        product: Uuid,
    },
    /// An order line has a zero quantity.
    #[error("order {order} has a zero-quantity line for product {product}")]
    ZeroQuantity {
        /// The offending order.
        order: Uuid,
        /// The product on the zero-quantity line.
        product: Uuid,
    },
}

/// The storefront's resource graph.
///
/// ## Invariants
/// - Every `Order::customer_id` resolves to a [`Customer`].
/// - Every `OrderItem::product_id` resolves to a [`Product`].
/// - Every `OrderItem::quantity` is at least one.
#[derive(Debug, Clone)]
pub struct Catalogue {
    products: Vec<Product>,
    customers: Vec<Customer>,
    orders: Vec<Order>,
}

impl Catalogue {
    /// Assemble and validate a catalogue.
    ///
    /// # Errors
    /// Returns the first [`CatalogueValidationError`] found when an order
    /// dangles off the graph.
    pub fn new(
        products: Vec<Product>,
        customers: Vec<Customer>,
        orders: Vec<Order>,
    ) -> Result<Self, CatalogueValidationError> {
        for order in &orders {
            if !customers.iter().any(|c| c.id == order.customer_id) {
                return Err(CatalogueValidationError::UnknownCustomer {
                    order: order.id,
                    customer: order.customer_id,
                });
            }
            for item in &order.items {
                if !products.iter().any(|p| p.id == item.product_id) {
                    return Err(CatalogueValidationError::UnknownProduct {
                        order: order.id,
                        product: item.product_id,
                    });
                }
                if item.quantity == 0 {
                    return Err(CatalogueValidationError::ZeroQuantity {
                        order: order.id,
                        product: item.product_id,
                    });
                }
            }
        }
        Ok(Self {
            products,
            customers,
            orders,
        })
    }

    /// Demo catalogue served until a persistence layer exists.
    ///
    /// Identifiers are fixed so links stay stable across restarts.
    ///
    /// # Panics
    /// Never panics in practice: the seed data satisfies the catalogue
    /// invariants by construction.
    pub fn seeded() -> Self {
        let kettle = Product {
            id: Uuid::from_u128(0x5eed_0001),
            sku: "KET-0042".to_owned(),
            name: "Stovetop kettle".to_owned(),
            description: "Two-litre stainless steel kettle.".to_owned(),
            price_cents: 2450,
        };
        let teapot = Product {
            id: Uuid::from_u128(0x5eed_0002),
            sku: "TEA-0007".to_owned(),
            name: "Ceramic teapot".to_owned(),
            description: "Four-cup glazed teapot.".to_owned(),
            price_cents: 1899,
        };
        let caddy = Product {
            id: Uuid::from_u128(0x5eed_0003),
            sku: "CAD-0019".to_owned(),
            name: "Tea caddy".to_owned(),
            description: "Airtight caddy for loose-leaf tea.".to_owned(),
            price_cents: 999,
        };
        let ada = Customer {
            id: Uuid::from_u128(0xc057_0001),
            display_name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
        };
        let grace = Customer {
            id: Uuid::from_u128(0xc057_0002),
            display_name: "Grace Hopper".to_owned(),
            email: "grace@example.com".to_owned(),
        };
        let orders = vec![
            Order {
                id: Uuid::from_u128(0x04d3_0001),
                customer_id: ada.id,
                status: OrderStatus::Paid,
                currency: "GBP".to_owned(),
                items: vec![
                    OrderItem {
                        product_id: kettle.id,
                        quantity: 1,
                        unit_price_cents: kettle.price_cents,
                    },
                    OrderItem {
                        product_id: caddy.id,
                        quantity: 2,
                        unit_price_cents: caddy.price_cents,
                    },
                ],
            },
            Order {
                id: Uuid::from_u128(0x04d3_0002),
                customer_id: grace.id,
                status: OrderStatus::Pending,
                currency: "GBP".to_owned(),
                items: vec![OrderItem {
                    product_id: teapot.id,
                    quantity: 1,
                    unit_price_cents: teapot.price_cents,
                }],
            },
        ];
        match Self::new(vec![kettle, teapot, caddy], vec![ada, grace], orders) {
            Ok(catalogue) => catalogue,
            Err(err) => panic!("seed data must satisfy catalogue invariants: {err}"),
        }
    }

    /// All orders, in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up one order.
    ///
    /// # Errors
    /// Returns a `not_found` [`DomainError`] when no order has the id.
    pub fn order(&self, id: Uuid) -> Result<&Order, DomainError> {
        self.orders
            .iter()
            .find(|order| order.id == id)
            .ok_or_else(|| DomainError::not_found(format!("no order with id {id}")))
    }

    /// Look up one product.
    ///
    /// # Errors
    /// Returns a `not_found` [`DomainError`] when no product has the id.
    pub fn product(&self, id: Uuid) -> Result<&Product, DomainError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or_else(|| DomainError::not_found(format!("no product with id {id}")))
    }

    /// Look up one customer.
    ///
    /// # Errors
    /// Returns a `not_found` [`DomainError`] when no customer has the id.
    pub fn customer(&self, id: Uuid) -> Result<&Customer, DomainError> {
        self.customers
            .iter()
            .find(|customer| customer.id == id)
            .ok_or_else(|| DomainError::not_found(format!("no customer with id {id}")))
    }
}
