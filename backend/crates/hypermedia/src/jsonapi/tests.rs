//! Tests for JSON:API document assembly.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn order_resource() -> ResourceObject {
    ResourceObject::new("orders", "42", &json!({ "status": "paid" }))
        .expect("object attributes")
        .with_self_link("https://s.test/api/orders/42")
        .relationship(
            "items",
            Relationship::to_many(
                "https://s.test/api/orders/42/items",
                vec![ResourceIdentifier::new("products", "7")],
            ),
        )
        .relationship(
            "customer",
            Relationship::to_one(
                "https://s.test/api/customers/9",
                Some(ResourceIdentifier::new("customers", "9")),
            ),
        )
}

#[rstest]
fn resource_objects_serialise_with_typed_relationships(order_resource: ResourceObject) {
    let value = serde_json::to_value(&order_resource).expect("serialises");
    assert_eq!(
        value,
        json!({
            "type": "orders",
            "id": "42",
            "attributes": { "status": "paid" },
            "relationships": {
                "customer": {
                    "links": { "related": "https://s.test/api/customers/9" },
                    "data": { "type": "customers", "id": "9" },
                },
                "items": {
                    "links": { "related": "https://s.test/api/orders/42/items" },
                    "data": [{ "type": "products", "id": "7" }],
                },
            },
            "links": { "self": "https://s.test/api/orders/42" },
        })
    );
}

#[rstest]
#[case(json!(7))]
#[case(json!(["a", "b"]))]
fn non_object_attributes_are_rejected(#[case] attributes: serde_json::Value) {
    let result = ResourceObject::new("orders", "42", &attributes);
    assert_eq!(result.unwrap_err(), JsonApiError::AttributesNotAnObject);
}

#[rstest]
fn empty_to_one_linkage_serialises_as_null() {
    let relationship = Relationship::to_one("https://s.test/api/customers", None);
    let value = serde_json::to_value(&relationship).expect("serialises");
    assert_eq!(value["data"], serde_json::Value::Null);
}

#[rstest]
fn collection_documents_keep_data_as_an_array() {
    let document =
        Document::collection(Vec::new()).with_self_link("https://s.test/api/orders");
    let value = serde_json::to_value(&document).expect("serialises");
    assert_eq!(
        value,
        json!({ "data": [], "links": { "self": "https://s.test/api/orders" } })
    );
}

#[rstest]
fn include_deduplicates_by_type_and_id(order_resource: ResourceObject) {
    let product = ResourceObject::new("products", "7", &json!({ "name": "Kettle" }))
        .expect("object attributes");
    let document = Document::single(order_resource)
        .include(product.clone())
        .include(product);
    assert_eq!(document.included.len(), 1);
}

#[rstest]
fn include_skips_resources_already_in_primary_data(order_resource: ResourceObject) {
    let duplicate = order_resource.clone();
    let document = Document::single(order_resource).include(duplicate);
    assert!(document.included.is_empty());
}

#[rstest]
fn empty_relationships_and_links_are_omitted() {
    let resource =
        ResourceObject::new("products", "7", &json!({ "name": "Kettle" })).expect("attributes");
    let value = serde_json::to_value(&resource).expect("serialises");
    assert_eq!(
        value,
        json!({ "type": "products", "id": "7", "attributes": { "name": "Kettle" } })
    );
}

#[rstest]
fn documents_round_trip_through_serde(order_resource: ResourceObject) {
    let document = Document::single(order_resource).with_self_link("https://s.test/api/orders/42");
    let text = serde_json::to_string(&document).expect("serialises");
    let parsed: Document = serde_json::from_str(&text).expect("deserialises");
    assert_eq!(parsed, document);
}
