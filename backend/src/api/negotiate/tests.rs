//! Tests for Accept-header negotiation.

use super::*;
use crate::domain::ErrorCode;
use rstest::rstest;

#[rstest]
#[case(None, Representation::Hal)]
#[case(Some(""), Representation::Hal)]
#[case(Some("application/hal+json"), Representation::Hal)]
#[case(Some("application/vnd.api+json"), Representation::JsonApi)]
#[case(Some("application/json"), Representation::Hal)]
#[case(Some("*/*"), Representation::Hal)]
#[case(Some("application/*"), Representation::Hal)]
fn plain_ranges_select_a_representation(
    #[case] accept: Option<&str>,
    #[case] expected: Representation,
) {
    assert_eq!(negotiate(accept), Ok(expected));
}

#[rstest]
#[case("application/vnd.api+json, application/hal+json;q=0.5", Representation::JsonApi)]
#[case("application/hal+json;q=0.9, application/vnd.api+json;q=0.3", Representation::Hal)]
#[case("*/*;q=0.1, application/vnd.api+json", Representation::JsonApi)]
#[case("text/html, application/vnd.api+json;q=0.8, */*;q=0.1", Representation::JsonApi)]
fn quality_values_order_the_candidates(#[case] accept: &str, #[case] expected: Representation) {
    assert_eq!(negotiate(Some(accept)), Ok(expected));
}

#[rstest]
fn exact_types_win_quality_ties_over_wildcards() {
    let accept = "*/*, application/vnd.api+json";
    assert_eq!(negotiate(Some(accept)), Ok(Representation::JsonApi));
}

#[rstest]
#[case("*/*, application/hal+json;q=0", Representation::JsonApi)]
#[case("application/*, application/vnd.api+json;q=0", Representation::Hal)]
#[case("*/*;q=0.2, application/hal+json;q=0", Representation::JsonApi)]
fn zero_quality_excludes_a_type_despite_wildcards(
    #[case] accept: &str,
    #[case] expected: Representation,
) {
    assert_eq!(negotiate(Some(accept)), Ok(expected));
}

#[rstest]
fn zero_quality_on_every_match_is_not_acceptable() {
    let accept = "*/*, application/hal+json;q=0, application/vnd.api+json;q=0";
    let error = negotiate(Some(accept)).map(|_| ()).unwrap_err();
    assert_eq!(error.code(), ErrorCode::NotAcceptable);
}

#[rstest]
#[case("text/html")]
#[case("application/xml")]
#[case("application/hal+json;q=0")]
#[case("*/*;q=0")]
fn unsatisfiable_headers_are_not_acceptable(#[case] accept: &str) {
    let error = negotiate(Some(accept)).map(|_| ()).unwrap_err();
    assert_eq!(error.code(), ErrorCode::NotAcceptable);
    let details = error.details().cloned().unwrap_or_default();
    assert_eq!(
        details["supported"],
        serde_json::json!([HAL_JSON, JSONAPI])
    );
}

#[rstest]
fn malformed_ranges_are_skipped_not_fatal() {
    let accept = "not a type,, application/hal+json";
    assert_eq!(negotiate(Some(accept)), Ok(Representation::Hal));
}

#[rstest]
#[case("1", Some(1000))]
#[case("1.000", Some(1000))]
#[case("0.5", Some(500))]
#[case("0.05", Some(50))]
#[case("0.123", Some(123))]
#[case("0", Some(0))]
#[case("1.5", None)]
#[case("2", None)]
#[case("0.1234", None)]
#[case("abc", None)]
fn quality_values_parse_as_thousandths(#[case] raw: &str, #[case] expected: Option<u16>) {
    assert_eq!(q_millis(raw), expected);
}

#[rstest]
fn media_types_round_trip_to_content_type() {
    assert_eq!(Representation::Hal.media_type(), "application/hal+json");
    assert_eq!(Representation::JsonApi.media_type(), "application/vnd.api+json");
}
