//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct that generates the OpenAPI specification
//! for the REST API: every hypermedia endpoint plus the health probes, and
//! the shared error envelope schema. Swagger UI serves the document in
//! debug builds.

use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::domain::{Customer, DomainError, ErrorCode, Order, OrderItem, OrderStatus, Product};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hypermedia storefront API",
        description = "Read-only storefront resource graph served as HAL or \
                       JSON:API, selected by Accept-header negotiation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::orders::list_orders,
        crate::api::orders::get_order,
        crate::api::orders::get_order_items,
        crate::api::products::list_products,
        crate::api::products::get_product,
        crate::api::customers::get_customer,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(
        ApiError,
        DomainError,
        ErrorCode,
        Order,
        OrderItem,
        OrderStatus,
        Product,
        Customer,
    )),
    tags(
        (name = "orders", description = "Orders and their line items"),
        (name = "products", description = "The product catalogue"),
        (name = "customers", description = "Customer identities"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
