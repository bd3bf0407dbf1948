//! End-to-end tests: clients can traverse the resource graph purely by
//! following the links each response embeds.

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use backend::Trace;
use backend::api::{customers, orders, products};
use backend::domain::Catalogue;
use hypermedia::{HAL_JSON, JSONAPI, LinkBase};
use serde_json::Value;

const BASE: &str = "https://shop.example.com";

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let catalogue = Catalogue::seeded();
    let base = LinkBase::parse(BASE).expect("valid base");
    App::new()
        .wrap(Trace)
        .app_data(web::Data::new(catalogue))
        .app_data(web::Data::new(base))
        .service(orders::list_orders)
        .service(orders::get_order)
        .service(orders::get_order_items)
        .service(products::list_products)
        .service(products::get_product)
        .service(customers::get_customer)
}

/// Turn an absolute `href` from a response back into a request path.
fn href_to_path(href: &str) -> String {
    href.strip_prefix(BASE)
        .unwrap_or_else(|| panic!("href {href} should be anchored at {BASE}"))
        .to_owned()
}

async fn get_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    path: &str,
    accept: &str,
) -> Value {
    let request = actix_test::TestRequest::get()
        .uri(path)
        .insert_header(("accept", accept))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {path}");
    actix_test::read_body_json(response).await
}

#[actix_web::test]
async fn hal_clients_navigate_orders_by_links_alone() {
    let app = actix_test::init_service(test_app()).await;

    let collection = get_json(&app, "/api/orders", HAL_JSON).await;
    let members = collection["_embedded"]["item"]
        .as_array()
        .expect("orders embedded");
    let first = members.first().expect("at least one order");

    // Follow self to the single resource.
    let self_href = first["_links"]["self"]["href"]
        .as_str()
        .expect("self link");
    let order = get_json(&app, &href_to_path(self_href), HAL_JSON).await;
    assert_eq!(order["id"], first["id"]);

    // Follow items to the line-item collection.
    let items_href = order["_links"]["items"]["href"]
        .as_str()
        .expect("items link");
    let items = get_json(&app, &href_to_path(items_href), HAL_JSON).await;
    let lines = items["_embedded"]["item"].as_array().expect("lines");
    assert!(!lines.is_empty());

    // Follow a line's product link.
    let product_href = lines
        .first()
        .and_then(|line| line["_links"]["product"]["href"].as_str())
        .expect("product link");
    let product = get_json(&app, &href_to_path(product_href), HAL_JSON).await;
    assert!(product["sku"].is_string());

    // Follow customer from the order.
    let customer_href = order["_links"]["customer"]["href"]
        .as_str()
        .expect("customer link");
    let customer = get_json(&app, &href_to_path(customer_href), HAL_JSON).await;
    assert!(customer["displayName"].is_string());
}

#[actix_web::test]
async fn jsonapi_clients_navigate_relationship_links() {
    let app = actix_test::init_service(test_app()).await;

    let collection = get_json(&app, "/api/orders", JSONAPI).await;
    let data = collection["data"].as_array().expect("collection data");
    let first = data.first().expect("at least one order");

    let related = first["relationships"]["items"]["links"]["related"]
        .as_str()
        .expect("related link");
    let items = get_json(&app, &href_to_path(related), JSONAPI).await;
    let lines = items["data"].as_array().expect("line data");
    assert_eq!(
        lines.first().map(|line| line["type"].clone()),
        Some(serde_json::json!("order-items"))
    );

    let customer_related = first["relationships"]["customer"]["links"]["related"]
        .as_str()
        .expect("customer related link");
    let customer = get_json(&app, &href_to_path(customer_related), JSONAPI).await;
    assert_eq!(customer["data"]["type"], serde_json::json!("customers"));
}

#[actix_web::test]
async fn quality_values_steer_negotiation_end_to_end() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/products")
        .insert_header((
            "accept",
            "application/hal+json;q=0.4, application/vnd.api+json;q=0.9",
        ))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert_eq!(content_type, JSONAPI);
}

#[actix_web::test]
async fn error_responses_carry_a_trace_id() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/orders/{}", uuid::Uuid::nil()))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], serde_json::json!("not_found"));
    assert_eq!(body["traceId"].as_str().map(ToOwned::to_owned), header);
}
