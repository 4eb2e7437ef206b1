//! Range checks for coordinates entered on a well submission.
//!
//! Nothing here changes a value. [`is_valid_dms`] is a plain predicate for
//! form feedback; the `check_*` functions return the message a submission
//! is rejected with.

use crate::{
    coords::dms::DmsAngle,
    utility::dms,
    DecimalDegrees, Error, Utm,
};

/// The province's bounding box, in decimal degrees.
pub const BC_MIN_LATITUDE: f64 = 48.204_555;
pub const BC_MAX_LATITUDE: f64 = 60.0223;
pub const BC_MIN_LONGITUDE: f64 = -139.073_671;
pub const BC_MAX_LONGITUDE: f64 = -114.033_822;

/// UTM limits accepted by the submission form, in meters.
pub const BC_MIN_EASTING: f64 = 200_000.;
pub const BC_MAX_EASTING: f64 = 800_000.;
pub const BC_MIN_NORTHING: f64 = 5_350_500.;
pub const BC_MAX_NORTHING: f64 = 6_655_250.;

/// Fewest decimal places a submitted decimal degree may carry.
pub const MIN_DD_DECIMAL_PLACES: usize = 5;

/// Which axis an angle measures. Latitude runs to 90°, longitude to 180°.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest magnitude an angle on this axis may have, in degrees.
    pub fn limit(self) -> i32 {
        match self {
            Axis::Latitude => dms::QD,
            Axis::Longitude => dms::HD,
        }
    }
}

/// Whether `angle` is a legal DMS value for `axis`:
///
/// * `|degrees|` is at most 90 for latitude or 180 for longitude,
///   and so is the whole angle once minutes and seconds are added
/// * minutes are in `[0, 59]`
/// * seconds are in `[0, 60)`
///
/// ```
/// use gwells_coords::{is_valid_dms, Axis, DmsAngle};
///
/// assert!(is_valid_dms(&DmsAngle::new(-49, 24, 55.98), Axis::Latitude));
/// assert!(is_valid_dms(&DmsAngle::new(-144, 30, 35.64), Axis::Longitude));
/// assert!(!is_valid_dms(&DmsAngle::new(-144, 30, 35.64), Axis::Latitude));
/// assert!(!is_valid_dms(&DmsAngle::new(90, 0, 0.01), Axis::Latitude));
/// assert!(!is_valid_dms(&DmsAngle::new(49, 60, 0.0), Axis::Latitude));
/// assert!(!is_valid_dms(&DmsAngle::new(49, 59, 60.0), Axis::Latitude));
/// ```
pub fn is_valid_dms(angle: &DmsAngle, axis: Axis) -> bool {
    let limit = axis.limit();
    let max_minute = dms::DM - 1;

    angle.degrees.unsigned_abs() <= limit.unsigned_abs()
        && (0..=max_minute).contains(&angle.minutes)
        && (0_f64..f64::from(dms::MS)).contains(&angle.seconds)
        && angle.magnitude() <= f64::from(limit)
}

/// Number of digits after the decimal point in `text`, as typed.
///
/// ```
/// use gwells_coords::validation::decimal_places;
///
/// assert_eq!(decimal_places("48.41958"), 5);
/// assert_eq!(decimal_places("-123.3709"), 4);
/// assert_eq!(decimal_places("49"), 0);
/// assert_eq!(decimal_places("4.841958e1"), 5);
/// ```
pub fn decimal_places(text: &str) -> usize {
    let text = text.trim();
    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().unwrap_or(0)),
        None => (text, 0),
    };

    let fraction = mantissa.split_once('.').map_or(0, |(_, frac)| frac.len());
    let places = i64::try_from(fraction).unwrap_or(i64::MAX).saturating_sub(exponent);

    usize::try_from(places.max(0)).unwrap_or(0)
}

fn parse_number(label: &str, text: &str) -> Result<f64, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::Validation(format!("{label} must be a number.")))
}

fn check_precision(label: &str, text: &str) -> Result<(), Error> {
    if decimal_places(text) < MIN_DD_DECIMAL_PLACES {
        return Err(Error::Validation(format!(
            "{label} must be specified to at least {MIN_DD_DECIMAL_PLACES} decimal places."
        )));
    }

    Ok(())
}

/// Checks a submitted latitude: inside the province, then at least five
/// decimal places. Range errors are reported first.
///
/// # Errors
///
/// Returns [`Error::Validation`] with the message shown to the submitter.
///
/// ```
/// use gwells_coords::validation::check_latitude;
///
/// assert_eq!(check_latitude("48.41958").unwrap(), 48.41958);
/// assert!(check_latitude("48.4195").is_err());
/// assert!(check_latitude("47.00000").is_err());
/// ```
pub fn check_latitude(text: &str) -> Result<f64, Error> {
    let latitude = parse_number("Latitude", text)?;

    // Bounds as printed on the submission form
    if !(BC_MIN_LATITUDE..=BC_MAX_LATITUDE).contains(&latitude) {
        return Err(Error::Validation(
            "Latitude must be between 48.204556 and 60.02230.".to_string(),
        ));
    }

    check_precision("Latitude", text)?;

    Ok(latitude)
}

/// Checks a submitted longitude: inside the province, then at least five
/// decimal places. The sign is not corrected here.
///
/// # Errors
///
/// Returns [`Error::Validation`] with the message shown to the submitter.
///
/// ```
/// use gwells_coords::validation::check_longitude;
///
/// assert_eq!(check_longitude("-123.37092").unwrap(), -123.37092);
/// assert!(check_longitude("123.37092").is_err());
/// ```
pub fn check_longitude(text: &str) -> Result<f64, Error> {
    let longitude = parse_number("Longitude", text)?;

    if !(BC_MIN_LONGITUDE..=BC_MAX_LONGITUDE).contains(&longitude) {
        return Err(Error::Validation(format!(
            "Longitude must be between {BC_MIN_LONGITUDE} and {BC_MAX_LONGITUDE}."
        )));
    }

    check_precision("Longitude", text)?;

    Ok(longitude)
}

/// Whether a point lies in the province's bounding box.
pub fn in_british_columbia(point: &DecimalDegrees) -> bool {
    (BC_MIN_LATITUDE..=BC_MAX_LATITUDE).contains(&point.latitude)
        && (BC_MIN_LONGITUDE..=BC_MAX_LONGITUDE).contains(&point.longitude)
}

/// Checks a UTM point against the limits of the submission form.
///
/// # Errors
///
/// Returns [`Error::Validation`] naming the offending value.
///
/// ```
/// use gwells_coords::{validation::check_utm, Utm};
///
/// assert!(check_utm(&Utm::create(10, true, 472556.02, 5363003.85).unwrap()).is_ok());
/// assert!(check_utm(&Utm::create(10, true, 172556.02, 5363003.85).unwrap()).is_err());
/// assert!(check_utm(&Utm::create(10, true, 472556.02, 5003003.85).unwrap()).is_err());
/// ```
pub fn check_utm(point: &Utm) -> Result<(), Error> {
    if !point.is_north() {
        return Err(Error::Validation("UTM point must be in the northern hemisphere.".to_string()));
    }

    if !(BC_MIN_EASTING..=BC_MAX_EASTING).contains(&point.easting) {
        return Err(Error::Validation(format!(
            "UTM easting must be between {BC_MIN_EASTING} and {BC_MAX_EASTING}."
        )));
    }

    if !(BC_MIN_NORTHING..=BC_MAX_NORTHING).contains(&point.northing) {
        return Err(Error::Validation(format!(
            "UTM northing must be between {BC_MIN_NORTHING} and {BC_MAX_NORTHING}."
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_angle_must_fit_the_axis() {
        assert!(is_valid_dms(&DmsAngle::new(90, 0, 0.), Axis::Latitude));
        assert!(is_valid_dms(&DmsAngle::new(-90, 0, 0.), Axis::Latitude));
        assert!(!is_valid_dms(&DmsAngle::new(89, 60, 0.), Axis::Latitude));
        assert!(!is_valid_dms(&DmsAngle::new(-90, 1, 0.), Axis::Latitude));
        assert!(is_valid_dms(&DmsAngle::new(-180, 0, 0.), Axis::Longitude));
        assert!(!is_valid_dms(&DmsAngle::new(-180, 0, 0.5), Axis::Longitude));
        assert!(!is_valid_dms(&DmsAngle::new(181, 0, 0.), Axis::Longitude));
    }

    #[test]
    fn negative_or_nan_parts_are_invalid() {
        assert!(!is_valid_dms(&DmsAngle::new(49, -1, 0.), Axis::Latitude));
        assert!(!is_valid_dms(&DmsAngle::new(49, 1, -0.5), Axis::Latitude));
        assert!(!is_valid_dms(&DmsAngle::new(49, 1, f64::NAN), Axis::Latitude));
    }

    #[test]
    fn rounded_up_seconds_are_flagged() {
        let angle = DmsAngle::from_decimal_degrees(49.999999);
        assert!(!is_valid_dms(&angle, Axis::Latitude));
    }

    #[test]
    fn bounding_box() {
        assert!(in_british_columbia(&DecimalDegrees::new(48.419588, -123.370922)));
        assert!(in_british_columbia(&DecimalDegrees::new(59.981918, -138.907356)));
        assert!(!in_british_columbia(&DecimalDegrees::new(48.419588, 123.370922)));
        assert!(!in_british_columbia(&DecimalDegrees::new(47.6, -122.3)));
    }

    #[test]
    fn messages() {
        assert_eq!(
            check_latitude("61.00000").unwrap_err().to_string(),
            "Latitude must be between 48.204556 and 60.02230."
        );
        assert_eq!(
            check_longitude("-100.5").unwrap_err().to_string(),
            "Longitude must be between -139.073671 and -114.033822."
        );
        assert_eq!(
            check_longitude("-123.37").unwrap_err().to_string(),
            "Longitude must be specified to at least 5 decimal places."
        );
        assert_eq!(check_latitude("north").unwrap_err().to_string(), "Latitude must be a number.");
    }

    #[test]
    fn range_is_checked_before_precision() {
        assert_eq!(
            check_latitude("61.0").unwrap_err().to_string(),
            "Latitude must be between 48.204556 and 60.02230."
        );
        assert_eq!(
            check_longitude("-100").unwrap_err().to_string(),
            "Longitude must be between -139.073671 and -114.033822."
        );
        assert_eq!(
            check_latitude("49.1").unwrap_err().to_string(),
            "Latitude must be specified to at least 5 decimal places."
        );
    }

    #[test]
    fn southern_utm_is_rejected() {
        let point = Utm::create(10, false, 472556.02, 5363003.85).unwrap();
        assert!(check_utm(&point).is_err());
    }
}
