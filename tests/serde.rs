#![cfg(feature = "serde")]

use gwells_coords::{ConversionOptions, CoordinateSet, DecimalDegrees, DmsAngle, Ellipsoid, Error, ProjectionMethod, Utm};

#[test]
fn form_payload_aliases() {
    let dd: DecimalDegrees = serde_json::from_str(r#"{"lat": 48.419588, "long": -123.370922}"#).unwrap();
    assert_eq!(dd, DecimalDegrees::new(48.419588, -123.370922));

    let dms: DmsAngle = serde_json::from_str(r#"{"deg": -144, "min": 30, "sec": 35.64}"#).unwrap();
    assert_eq!(dms, DmsAngle::new(-144, 30, 35.64));

    let utm: Utm = serde_json::from_str(r#"{"zone": 10, "easting": 472556.02, "northing": 5363003.85}"#).unwrap();
    assert!(utm.is_north());
}

#[test]
fn options_default_missing_fields() {
    let opts: ConversionOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, ConversionOptions::default());

    let opts: ConversionOptions = serde_json::from_str(
        r#"{"ellipsoid": {"a": 6378137.0, "f": 0.0033528106647474805}, "method": "exact"}"#,
    ).unwrap();
    assert_eq!(opts.method, ProjectionMethod::Exact);
    assert!((opts.ellipsoid.f() - Ellipsoid::WGS84.f()).abs() < 1e-15);
}

#[test]
fn coordinate_set_round_trips_through_json() {
    let set = CoordinateSet::from_decimal_degrees(
        DecimalDegrees::new(59.981918, -138.907356),
        &ConversionOptions::default(),
    );

    let json = serde_json::to_string(&set).unwrap();
    let back: CoordinateSet = serde_json::from_str(&json).unwrap();

    assert_eq!(back, set);
}

#[test]
fn deserialized_utm_zone_is_checked_on_conversion() {
    let utm: Utm = serde_json::from_str(r#"{"zone": 0, "easting": 500000.0, "northing": 5400000.0}"#).unwrap();

    assert_eq!(utm.to_decimal_degrees(), Err(Error::InvalidZone(0)));
    assert_eq!(DecimalDegrees::from_utm(&utm), Err(Error::InvalidZone(0)));
    assert_eq!(
        CoordinateSet::from_utm(&utm, &ConversionOptions::default()),
        Err(Error::InvalidZone(0))
    );
}
