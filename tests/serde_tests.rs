#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used)]

use geosphere::{bounding_rectangle, BoundingRectangle, ContainmentParams, GeoPoint};

#[test]
fn geo_point_serde() {
    let p = GeoPoint::new(8.5, 47.25);
    let serialized = serde_json::to_string(&p).unwrap();
    assert_eq!(serialized, r#"{"lon":8.5,"lat":47.25}"#);
    let deserialized: GeoPoint = serde_json::from_str(&serialized).unwrap();
    assert_eq!(p, deserialized);
}

#[test]
fn bounding_rectangle_serde() {
    let rect = bounding_rectangle(&[GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, -4.0)]);
    let serialized = serde_json::to_string(&rect).unwrap();
    assert_eq!(serialized, r#"{"min":{"lon":1.0,"lat":-4.0},"max":{"lon":3.0,"lat":2.0}}"#);
    let deserialized: BoundingRectangle = serde_json::from_str(&serialized).unwrap();
    assert_eq!(rect, deserialized);
}

#[test]
fn containment_params_serde() {
    let params: ContainmentParams =
        serde_json::from_str(r#"{"collinearity_tolerance_deg":5.0,"cast_margin_m":2.5}"#).unwrap();
    assert!((params.collinearity_tolerance_deg - 5.0).abs() < f64::EPSILON);
    assert!((params.cast_margin_m - 2.5).abs() < f64::EPSILON);
    let round_trip: ContainmentParams = serde_json::from_str(&serde_json::to_string(&params).unwrap()).unwrap();
    assert_eq!(params, round_trip);
}
