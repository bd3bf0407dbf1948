//! Tests for order API handlers.

use crate::api::{customers, orders, products};
use crate::domain::Catalogue;
use crate::middleware::Trace;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use hypermedia::{HAL_JSON, JSONAPI, LinkBase};
use rstest::rstest;
use serde_json::Value;
use uuid::Uuid;

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

fn seeded_order_id() -> Uuid {
    match Catalogue::seeded().orders().first() {
        Some(order) => order.id,
        None => panic!("seeded catalogue has orders"),
    }
}

fn content_type(response: &actix_web::dev::ServiceResponse) -> String {
    response
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

#[rstest]
#[actix_web::test]
async fn orders_default_to_hal() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get().uri("/api/orders").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), HAL_JSON);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body["_links"]["self"]["href"].is_string());
    assert!(body["_embedded"]["item"].is_array());
}

#[rstest]
#[actix_web::test]
async fn orders_serve_jsonapi_on_request() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(("accept", JSONAPI))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), JSONAPI);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body["data"].is_array());
    assert!(body["included"].is_array());
}

#[rstest]
#[actix_web::test]
async fn single_order_resolves_by_id() {
    let app = actix_test::init_service(test_app()).await;
    let id = seeded_order_id();

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/orders/{id}"))
        .insert_header(("accept", HAL_JSON))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["_links"]["self"]["href"],
        serde_json::json!(format!("{BASE}/api/orders/{id}"))
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_ids_yield_the_error_envelope() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/orders/not-a-uuid")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], serde_json::json!("invalid_request"));
    assert_eq!(body["details"]["id"], serde_json::json!("not-a-uuid"));
}

#[rstest]
#[actix_web::test]
async fn unknown_orders_yield_404() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/orders/{}", Uuid::nil()))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], serde_json::json!("not_found"));
}

#[rstest]
#[actix_web::test]
async fn unsupported_accept_headers_yield_406() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(("accept", "text/html"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], serde_json::json!("not_acceptable"));
    assert_eq!(
        body["details"]["supported"],
        serde_json::json!([HAL_JSON, JSONAPI])
    );
}

#[rstest]
#[actix_web::test]
async fn order_items_serve_both_representations() {
    let app = actix_test::init_service(test_app()).await;
    let id = seeded_order_id();

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/orders/{id}/items"))
        .insert_header(("accept", HAL_JSON))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body["_embedded"]["item"].is_array());

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/orders/{id}/items"))
        .insert_header(("accept", JSONAPI))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["links"]["self"],
        serde_json::json!(format!("{BASE}/api/orders/{id}/items"))
    );
}
