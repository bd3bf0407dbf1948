//! Order API handlers.
//!
//! Every handler negotiates the representation first, then assembles the
//! matching document from the in-memory catalogue. Clients navigate from
//! these responses via the embedded links; no URL construction is expected
//! of them.

use actix_web::{HttpRequest, HttpResponse, get, web};
use serde_json::json;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::api::negotiate::{self, Representation, respond};
use crate::api::represent;
use crate::domain::{Catalogue, DomainError};
use hypermedia::LinkBase;

pub(crate) fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| {
        DomainError::invalid_request("resource ids must be UUIDs")
            .with_details(json!({ "id": raw }))
    })
}

/// List all orders in the negotiated representation.
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Order collection"),
        (status = 406, description = "No supported representation is acceptable"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/api/orders")]
pub async fn list_orders(
    request: HttpRequest,
    catalogue: web::Data<Catalogue>,
    base: web::Data<LinkBase>,
) -> ApiResult<HttpResponse> {
    let representation = negotiate::from_request(&request)?;
    match representation {
        Representation::Hal => respond(representation, &represent::orders_hal(&catalogue, &base)?),
        Representation::JsonApi => respond(
            representation,
            &represent::orders_document(&catalogue, &base)?,
        ),
    }
}

/// Fetch one order in the negotiated representation.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order"),
        (status = 400, description = "Malformed order id"),
        (status = 404, description = "No such order"),
        (status = 406, description = "No supported representation is acceptable"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/api/orders/{id}")]
pub async fn get_order(
    request: HttpRequest,
    path: web::Path<String>,
    catalogue: web::Data<Catalogue>,
    base: web::Data<LinkBase>,
) -> ApiResult<HttpResponse> {
    let representation = negotiate::from_request(&request)?;
    let id = parse_id(&path)?;
    let order = catalogue.order(id)?;
    match representation {
        Representation::Hal => respond(representation, &represent::order_hal(order, &base)?),
        Representation::JsonApi => respond(
            representation,
            &represent::order_document(order, &catalogue, &base)?,
        ),
    }
}

/// Fetch one order's line items in the negotiated representation.
#[utoipa::path(
    get,
    path = "/api/orders/{id}/items",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Line item collection"),
        (status = 400, description = "Malformed order id"),
        (status = 404, description = "No such order"),
        (status = 406, description = "No supported representation is acceptable"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["orders"],
    operation_id = "getOrderItems"
)]
#[get("/api/orders/{id}/items")]
pub async fn get_order_items(
    request: HttpRequest,
    path: web::Path<String>,
    catalogue: web::Data<Catalogue>,
    base: web::Data<LinkBase>,
) -> ApiResult<HttpResponse> {
    let representation = negotiate::from_request(&request)?;
    let id = parse_id(&path)?;
    let order = catalogue.order(id)?;
    match representation {
        Representation::Hal => respond(representation, &represent::order_items_hal(order, &base)?),
        Representation::JsonApi => respond(
            representation,
            &represent::order_items_document(order, &catalogue, &base)?,
        ),
    }
}

#[cfg(test)]
mod tests;
