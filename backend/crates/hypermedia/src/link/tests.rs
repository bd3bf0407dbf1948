//! Tests for link resolution against a public base URL.

use super::*;
use rstest::rstest;

#[rstest]
#[case("https://shop.example.com/api", "orders/42", "https://shop.example.com/api/orders/42")]
#[case("https://shop.example.com/api/", "orders/42", "https://shop.example.com/api/orders/42")]
#[case("https://shop.example.com/api", "/orders/42", "https://shop.example.com/api/orders/42")]
#[case("http://localhost:8080", "products", "http://localhost:8080/products")]
fn resolve_keeps_the_base_path_prefix(
    #[case] base: &str,
    #[case] path: &str,
    #[case] expected: &str,
) {
    let base = LinkBase::parse(base).expect("valid base");
    assert_eq!(base.resolve(path).expect("resolvable"), expected);
}

#[rstest]
#[case("../secret")]
#[case("orders/../../secret")]
#[case("/orders/42/../../admin")]
fn resolve_rejects_parent_segments(#[case] path: &str) {
    let base = LinkBase::parse("https://shop.example.com/api").expect("valid base");
    let result = base.resolve(path);
    assert_eq!(
        result,
        Err(LinkError::Unresolvable {
            path: path.to_owned(),
        })
    );
}

#[rstest]
fn parse_rejects_relative_urls() {
    let result = LinkBase::parse("/api");
    assert!(matches!(result, Err(LinkError::InvalidBase(_))));
}

#[rstest]
#[case("https://shop.example.com/api?tenant=1")]
#[case("https://shop.example.com/api#orders")]
fn parse_rejects_query_and_fragment(#[case] base: &str) {
    let result = LinkBase::parse(base);
    assert!(matches!(result, Err(LinkError::InvalidBase(_))));
}

#[rstest]
fn link_omits_unset_hints() {
    let link = Link::new("https://shop.example.com/api/orders/42");
    let value = serde_json::to_value(&link).expect("serialises");
    assert_eq!(
        value,
        serde_json::json!({ "href": "https://shop.example.com/api/orders/42" })
    );
}

#[rstest]
fn link_hints_serialise_with_hal_field_names() {
    let link = Link::new("https://shop.example.com/api/orders{?status}")
        .templated()
        .with_title("Orders")
        .with_media_type(crate::HAL_JSON);
    let value = serde_json::to_value(&link).expect("serialises");
    assert_eq!(
        value,
        serde_json::json!({
            "href": "https://shop.example.com/api/orders{?status}",
            "templated": true,
            "title": "Orders",
            "type": "application/hal+json",
        })
    );
}

#[rstest]
#[case(Relation::Self_, "self")]
#[case(Relation::Items, "items")]
#[case(Relation::Collection, "collection")]
fn relations_expose_their_wire_name(#[case] rel: Relation, #[case] expected: &str) {
    assert_eq!(rel.as_str(), expected);
    assert_eq!(rel.to_string(), expected);
}
