use std::fmt::Display;

use crate::{
    coords::{dms::{DmsAngle, DmsCoordinate}, utm::Utm},
    options::ConversionOptions,
    Error, ParseCoord,
};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// A latitude/longitude pair in decimal degrees. In British Columbia
/// longitudes are west of Greenwich and so always negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalDegrees {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon", alias = "long"))]
    pub(crate) longitude: f64,
}

impl DecimalDegrees {
    /// Builds a point without checking its range. Every conversion in this
    /// crate accepts out-of-range values; use [`DecimalDegrees::create`] when
    /// the check matters.
    pub fn new(latitude: f64, longitude: f64) -> DecimalDegrees {
        Self {
            latitude,
            longitude,
        }
    }

    /// Tries to create a point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gwells_coords::DecimalDegrees;
    ///
    /// let coord = DecimalDegrees::create(48.419588, -123.370922).unwrap();
    ///
    /// assert_eq!(coord.latitude(), 48.419588);
    /// assert_eq!(coord.longitude(), -123.370922);
    ///
    /// assert!(DecimalDegrees::create(100.0, 0.0).is_err());
    /// assert!(DecimalDegrees::create(0.0, -200.0).is_err());
    /// assert!(DecimalDegrees::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(latitude: f64, longitude: f64) -> Result<DecimalDegrees, Error> {
        if !(-90_f64..=90_f64).contains(&latitude) {
            Err(Error::InvalidCoord(format!("Latitude {latitude} outside of valid range [-90, 90].")))
        } else if !(-180_f64..=180_f64).contains(&longitude) {
            Err(Error::InvalidCoord(format!("Longitude {longitude} outside of valid range [-180, 180].")))
        } else {
            Ok(DecimalDegrees::new(latitude, longitude))
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Returns the distance in meters between two points using the
    /// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula)
    /// on the mean radius of the Earth, `6371.0088` km.
    ///
    /// ```
    /// use gwells_coords::DecimalDegrees;
    ///
    /// let well = DecimalDegrees::new(48.419588, -123.370922);
    /// let address = DecimalDegrees::new(48.420488, -123.370922);
    ///
    /// // 0.0009° of latitude is about 100 m
    /// assert!((well.haversine(&address) - 100.07).abs() < 0.01);
    /// ```
    pub fn haversine(&self, other: &DecimalDegrees) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts both axes to degrees, minutes and seconds.
    ///
    /// ```
    /// use gwells_coords::DecimalDegrees;
    ///
    /// let dms = DecimalDegrees::new(48.50112, -144.5099).to_dms();
    ///
    /// assert_eq!(dms.latitude.degrees(), 48);
    /// assert_eq!(dms.latitude.minutes(), 30);
    /// assert_eq!(dms.latitude.seconds(), 4.03);
    /// assert_eq!(dms.longitude.degrees(), -144);
    /// ```
    pub fn to_dms(&self) -> DmsCoordinate {
        DmsCoordinate {
            latitude: DmsAngle::from_decimal_degrees(self.latitude),
            longitude: DmsAngle::from_decimal_degrees(self.longitude),
        }
    }

    /// Converts from [`DmsCoordinate`], rounding each axis to 5 decimal places.
    pub fn from_dms(value: &DmsCoordinate) -> DecimalDegrees {
        DecimalDegrees::new(
            value.latitude.to_decimal_degrees(),
            value.longitude.to_decimal_degrees(),
        )
    }

    /// Converts to [`Utm`] with the default options.
    ///
    /// ```
    /// use gwells_coords::DecimalDegrees;
    ///
    /// let utm = DecimalDegrees::new(48.419588, -123.370922).to_utm();
    ///
    /// assert_eq!(utm.zone(), 10);
    /// assert!((utm.easting() - 472556.02).abs() < 1e-2);
    /// assert!((utm.northing() - 5363003.85).abs() < 1e-2);
    /// ```
    pub fn to_utm(&self) -> Utm {
        Utm::from_decimal_degrees(self)
    }

    pub fn to_utm_with(&self, options: &ConversionOptions) -> Utm {
        Utm::from_decimal_degrees_with(self, options)
    }

    /// Converts from [`Utm`] with the default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside `[1, 60]`.
    pub fn from_utm(value: &Utm) -> Result<DecimalDegrees, Error> {
        value.to_decimal_degrees()
    }
}

impl Display for DecimalDegrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}

impl ParseCoord for DecimalDegrees {
    /// Parses `"<lat> <lon>"` or `"<lat>, <lon>"`, the same form [`Display`] prints.
    ///
    /// ```
    /// use gwells_coords::{DecimalDegrees, ParseCoord};
    ///
    /// let coord = DecimalDegrees::parse_coord("48.419588, -123.370922").unwrap();
    /// assert_eq!(coord.to_string(), "48.419588 -123.370922");
    ///
    /// assert!(DecimalDegrees::parse_coord("48.419588").is_err());
    /// assert!(DecimalDegrees::parse_coord("north -123").is_err());
    /// ```
    fn parse_coord(value: &str) -> Result<DecimalDegrees, Error> {
        let mut pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty());

        let (Some(lat), Some(lon), None) = (pieces.next(), pieces.next(), pieces.next()) else {
            return Err(Error::Parse(format!("Expected \"<lat> <lon>\", got \"{value}\"")));
        };

        let parse = |text: &str| {
            text.parse::<f64>()
                .map_err(|e| Error::Parse(format!("Invalid decimal degree \"{text}\": {e}")))
        };

        Ok(DecimalDegrees::new(parse(lat)?, parse(lon)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_is_symmetric_and_zero_on_self() {
        let a = DecimalDegrees::new(49.462639, -120.504983);
        let b = DecimalDegrees::new(59.630933, -120.336986);

        assert!(a.haversine(&a).abs() < 1e-9);
        assert!((a.haversine(&b) - b.haversine(&a)).abs() < 1e-6);
        // ~10.17° of latitude
        assert!((a.haversine(&b) / 1000. - 1131.).abs() < 2.);
    }

    #[test]
    fn hemisphere() {
        assert!(DecimalDegrees::new(48.5, -123.).is_north());
        assert!(!DecimalDegrees::new(-48.5, -123.).is_north());
    }

    #[test]
    fn from_utm_checks_the_zone() {
        let utm = DecimalDegrees::new(49., -200.).to_utm();
        assert_eq!(DecimalDegrees::from_utm(&utm), Err(Error::InvalidZone(-3)));

        let utm = DecimalDegrees::new(48.419588, -123.370922).to_utm();
        let back = DecimalDegrees::from_utm(&utm).unwrap();
        assert!((back.latitude() - 48.419588).abs() < 1e-6);
        assert!((back.longitude() - -123.370922).abs() < 1e-6);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let coord = DecimalDegrees::new(59.981918, -138.907356);
        let parsed = DecimalDegrees::parse_coord(&coord.to_string()).unwrap();
        assert_eq!(parsed, coord);
    }
}
