//! End-to-end flows that chain several modules together, the way a
//! telemetry ingest path actually uses them.

use fieldkit::checksum::{imeisv_to_imei, luhn_digits};
use fieldkit::geo::{GeoFence, GeoPoint};
use fieldkit::ipv4::canonical_ipv4_pool;
use fieldkit::json::{merge_deep, path_or};
use fieldkit::parse::{parse_num_or, Token};
use fieldkit::strings::left_pad_with_to;
use fieldkit::threshold::Band;

use serde_json::json;

#[test]
fn config_values_parse_into_a_working_band() {
    // Device configs carry thresholds as strings in whatever base the
    // vendor liked that day.
    let lower = parse_num_or(0.0, Token::Text("0x0A"));
    let upper = parse_num_or(0.0, Token::Text("20"));
    let band = Band::new(lower, upper);

    assert_eq!(band.lower(), 10.0);
    assert_eq!(band.upper(), 20.0);
    assert!(band.did_enter(9.0, 15.0));
    assert!(band.did_exit(15.0, 25.0));
}

#[test]
fn device_identity_normalizes_for_display() {
    let imei = imeisv_to_imei("3595680510841401");
    assert_eq!(imei, "359568051084146");

    let (valid, _) = luhn_digits(&imei);
    assert!(valid);

    // Fixed-width display field
    assert_eq!(left_pad_with_to(' ', 18, &imei).len(), 18);
}

#[test]
fn pool_config_merges_and_canonicalizes() {
    let defaults = json!({"net": {"pool": "10.0.0.0/8", "dns": ["1.1.1.1"]}});
    let site = json!({"net": {"pool": "87.70.141.1/22", "dns": ["9.9.9.9"]}});
    let merged = merge_deep(&defaults, &site);

    let fallback = json!("0.0.0.0/0");
    let pool = path_or(&fallback, &["net", "pool"], &merged)
        .as_str()
        .unwrap_or_default();
    assert_eq!(canonical_ipv4_pool(pool), "87.70.140.0/22");

    // Arrays concatenated rather than replaced
    assert_eq!(
        path_or(&fallback, &["net", "dns"], &merged),
        &json!(["1.1.1.1", "9.9.9.9"])
    );
}

#[test]
fn fence_crossing_from_raw_coordinate_strings() {
    let fence = GeoFence::new(GeoPoint::new(36.12, -86.67), 50.0);

    let prev = GeoPoint::new(
        parse_num_or(f64::NAN, Token::Text("33.94")),
        parse_num_or(f64::NAN, Token::Text("-118.40")),
    );
    let cur = GeoPoint::new(
        parse_num_or(f64::NAN, Token::Text("36.12")),
        parse_num_or(f64::NAN, Token::Text("-86.67")),
    );

    assert!(fence.did_enter(prev, cur));
    assert!(!fence.did_enter(cur, cur));
}
