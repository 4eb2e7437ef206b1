//! Coordinate conversions for groundwater well locations in British
//! Columbia: decimal degrees, degrees-minutes-seconds and UTM.
//!
//! ```
//! use gwells_coords::{decimal_degrees_to_dms, decimal_degrees_to_utm, dms_to_decimal_degrees};
//!
//! let utm = decimal_degrees_to_utm(-123.370922, 48.419588);
//! assert_eq!(utm.zone(), 10);
//!
//! let dms = decimal_degrees_to_dms(-123.370922);
//! assert_eq!(dms_to_decimal_degrees(&dms), -123.37092);
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod coords;
pub mod sync;
pub mod utility;
pub mod validation;

mod constants;
mod ellipsoid;
mod options;
pub(crate) mod projections;

pub use coords::dms::{DmsAngle, DmsCoordinate};
pub use coords::latlon::DecimalDegrees;
pub use coords::utm::Utm;
pub use ellipsoid::Ellipsoid;
pub use options::{ConversionOptions, ProjectionMethod};
pub use sync::CoordinateSet;
pub use validation::{is_valid_dms, Axis};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("UTM zone {0} not in range [1, 60]")]
    InvalidZone(i32),
    #[error("UTM coords are invalid: {0}")]
    InvalidUtmCoords(String),
    #[error("DMS angle is invalid: {0}")]
    InvalidDms(String),
    #[error("UTM points in zones {from} and {to} are not on the same plane")]
    ZoneMismatch {
        from: String,
        to: String,
    },
    #[error("Could not parse coordinate: {0}")]
    Parse(String),
    #[error("{0}")]
    Validation(String),
}

pub trait ParseCoord {
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Splits a decimal degree value into degrees, minutes and seconds. Never
/// fails: NaN and infinities are treated as `0`.
///
/// ```
/// use gwells_coords::decimal_degrees_to_dms;
///
/// let dms = decimal_degrees_to_dms(-144.5099);
/// assert_eq!((dms.degrees(), dms.minutes(), dms.seconds()), (-144, 30, 35.64));
///
/// let dms = decimal_degrees_to_dms(f64::NAN);
/// assert_eq!((dms.degrees(), dms.minutes(), dms.seconds()), (0, 0, 0.0));
/// ```
pub fn decimal_degrees_to_dms(value: f64) -> DmsAngle {
    tracing::trace!(value, "decimal degrees to DMS");
    DmsAngle::from_decimal_degrees(value)
}

/// Recombines a DMS angle into decimal degrees rounded to 5 places.
///
/// ```
/// use gwells_coords::{dms_to_decimal_degrees, DmsAngle};
///
/// assert_eq!(dms_to_decimal_degrees(&DmsAngle::new(-49, 24, 55.98)), -49.41555);
/// ```
pub fn dms_to_decimal_degrees(angle: &DmsAngle) -> f64 {
    tracing::trace!(%angle, "DMS to decimal degrees");
    angle.to_decimal_degrees()
}

/// Projects a point to UTM on GRS80. A positive longitude is negated first,
/// then the zone is `floor((longitude + 180) / 6) + 1`. Values are not
/// rounded; see [`Utm::rounded`].
///
/// ```
/// use gwells_coords::decimal_degrees_to_utm;
///
/// let utm = decimal_degrees_to_utm(120.504983, 49.462639);
///
/// assert_eq!(utm.zone(), 10);
/// assert!((utm.easting() - 680786.83).abs() < 1e-2);
/// assert!((utm.northing() - 5481879.63).abs() < 1e-2);
/// ```
pub fn decimal_degrees_to_utm(longitude: f64, latitude: f64) -> Utm {
    Utm::from_decimal_degrees(&DecimalDegrees::new(latitude, longitude))
}

/// Inverse of [`decimal_degrees_to_utm`] for the northern hemisphere.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] when `zone` is outside `[1, 60]`.
///
/// ```
/// use gwells_coords::{utm_to_decimal_degrees, Error};
///
/// let dd = utm_to_decimal_degrees(472556.02, 5363003.85, 10).unwrap();
/// assert!((dd.latitude() - 48.419588).abs() < 1e-6);
/// assert!((dd.longitude() - -123.370922).abs() < 1e-6);
///
/// assert_eq!(utm_to_decimal_degrees(500000., 0., 0), Err(Error::InvalidZone(0)));
/// assert_eq!(utm_to_decimal_degrees(500000., 0., 61), Err(Error::InvalidZone(61)));
/// ```
pub fn utm_to_decimal_degrees(easting: f64, northing: f64, zone: i32) -> Result<DecimalDegrees, Error> {
    Utm::new(zone, true, easting, northing).to_decimal_degrees()
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
