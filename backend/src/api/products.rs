//! Product API handlers.

use actix_web::{HttpRequest, HttpResponse, get, web};

use crate::api::error::ApiResult;
use crate::api::negotiate::{self, Representation, respond};
use crate::api::orders::parse_id;
use crate::api::represent;
use crate::domain::Catalogue;
use hypermedia::LinkBase;

/// List all products in the negotiated representation.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Product collection"),
        (status = 406, description = "No supported representation is acceptable"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/api/products")]
pub async fn list_products(
    request: HttpRequest,
    catalogue: web::Data<Catalogue>,
    base: web::Data<LinkBase>,
) -> ApiResult<HttpResponse> {
    let representation = negotiate::from_request(&request)?;
    match representation {
        Representation::Hal => respond(
            representation,
            &represent::products_hal(&catalogue, &base)?,
        ),
        Representation::JsonApi => respond(
            representation,
            &represent::products_document(&catalogue, &base)?,
        ),
    }
}

/// Fetch one product in the negotiated representation.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product"),
        (status = 400, description = "Malformed product id"),
        (status = 404, description = "No such product"),
        (status = 406, description = "No supported representation is acceptable"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/api/products/{id}")]
pub async fn get_product(
    request: HttpRequest,
    path: web::Path<String>,
    catalogue: web::Data<Catalogue>,
    base: web::Data<LinkBase>,
) -> ApiResult<HttpResponse> {
    let representation = negotiate::from_request(&request)?;
    let id = parse_id(&path)?;
    let product = catalogue.product(id)?;
    match representation {
        Representation::Hal => respond(representation, &represent::product_hal(product, &base)?),
        Representation::JsonApi => respond(
            representation,
            &represent::product_document(product, &base)?,
        ),
    }
}
