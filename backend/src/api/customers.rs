//! Customer API handlers.

use actix_web::{HttpRequest, HttpResponse, get, web};

use crate::api::error::ApiResult;
use crate::api::negotiate::{self, Representation, respond};
use crate::api::orders::parse_id;
use crate::api::represent;
use crate::domain::Catalogue;
use hypermedia::LinkBase;

/// Fetch one customer in the negotiated representation.
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer"),
        (status = 400, description = "Malformed customer id"),
        (status = 404, description = "No such customer"),
        (status = 406, description = "No supported representation is acceptable"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["customers"],
    operation_id = "getCustomer"
)]
#[get("/api/customers/{id}")]
pub async fn get_customer(
    request: HttpRequest,
    path: web::Path<String>,
    catalogue: web::Data<Catalogue>,
    base: web::Data<LinkBase>,
) -> ApiResult<HttpResponse> {
    let representation = negotiate::from_request(&request)?;
    let id = parse_id(&path)?;
    let customer = catalogue.customer(id)?;
    match representation {
        Representation::Hal => respond(representation, &represent::customer_hal(customer, &base)?),
        Representation::JsonApi => respond(
            representation,
            &represent::customer_document(customer, &base)?,
        ),
    }
}
