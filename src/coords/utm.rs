use std::fmt::Display;

use crate::{
    constants::{MAX_UTM_ZONE, MIN_UTM_ZONE, UTM_FALSE_EASTING, UTM_SOUTH_FALSE_NORTHING},
    coords::latlon::DecimalDegrees,
    options::ConversionOptions,
    projections::with_projection,
    utility::round_to,
    Error, ParseCoord, ThisOrThat,
};

/// Representation of a
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point. Wells in British Columbia sit in zones 7 through 11 of the
/// northern hemisphere; the southern hemisphere is carried for completeness.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) zone: i32,
    #[cfg_attr(feature = "serde", serde(alias = "north", alias = "is_north", default = "north"))]
    pub(crate) northp: bool,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

#[cfg(feature = "serde")]
fn north() -> bool {
    true
}

impl Utm {
    /// Internal-only constructor that doesn't check the zone
    pub(crate) fn new(zone: i32, northp: bool, easting: f64, northing: f64) -> Utm {
        Self {
            zone,
            northp,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM point from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`
    /// and [`Error::InvalidUtmCoords`] if easting or northing is not finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use gwells_coords::Utm;
    ///
    /// let coord = Utm::create(10, true, 472556.02, 5363003.85).unwrap();
    ///
    /// assert_eq!(coord.zone(), 10);
    /// assert!(coord.is_north());
    ///
    /// assert!(Utm::create(0, true, 472556.02, 5363003.85).is_err());
    /// assert!(Utm::create(61, true, 472556.02, 5363003.85).is_err());
    /// assert!(Utm::create(10, true, f64::NAN, 5363003.85).is_err());
    /// ```
    pub fn create(zone: i32, northp: bool, easting: f64, northing: f64) -> Result<Utm, Error> {
        check_zone(zone)?;

        if !easting.is_finite() || !northing.is_finite() {
            return Err(Error::InvalidUtmCoords(format!(
                "Easting {easting} and northing {northing} must both be finite"
            )));
        }

        Ok(Utm::new(zone, northp, easting, northing))
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }

    pub fn is_north(&self) -> bool {
        self.northp
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Rounds easting and northing to `places` decimals. Forms show whole
    /// meters; reports keep centimetres.
    ///
    /// ```
    /// use gwells_coords::Utm;
    ///
    /// let coord = Utm::create(10, true, 472556.0174, 5363003.8487).unwrap();
    ///
    /// assert_eq!(coord.rounded(2).easting(), 472556.02);
    /// assert_eq!(coord.rounded(0).northing(), 5363004.0);
    /// ```
    pub fn rounded(&self, places: i32) -> Utm {
        Utm {
            easting: round_to(self.easting, places),
            northing: round_to(self.northing, places),
            ..*self
        }
    }

    /// Straight-line distance in meters on the UTM plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZoneMismatch`] when the points are in different zones
    /// or hemispheres; their planes don't share an origin.
    ///
    /// ```
    /// use gwells_coords::Utm;
    ///
    /// let well = Utm::create(10, true, 472556.0, 5363003.0).unwrap();
    /// let address = Utm::create(10, true, 472559.0, 5363007.0).unwrap();
    ///
    /// assert_eq!(well.distance(&address).unwrap(), 5.0);
    /// ```
    pub fn distance(&self, other: &Utm) -> Result<f64, Error> {
        if self.zone != other.zone || self.northp != other.northp {
            return Err(Error::ZoneMismatch {
                from: self.zone_label(),
                to: other.zone_label(),
            });
        }

        Ok((self.easting - other.easting).hypot(self.northing - other.northing))
    }

    fn zone_label(&self) -> String {
        format!("{}{}", self.zone, self.northp.ternary('N', 'S'))
    }

    /// Converts from [`DecimalDegrees`] with the default options. See
    /// [`crate::decimal_degrees_to_utm`] for how the zone is chosen.
    pub fn from_decimal_degrees(value: &DecimalDegrees) -> Utm {
        Self::from_decimal_degrees_with(value, &ConversionOptions::default())
    }

    /// Converts from [`DecimalDegrees`].
    ///
    /// A positive longitude is taken to be a west longitude missing its
    /// sign and is negated before the zone is computed.
    pub fn from_decimal_degrees_with(value: &DecimalDegrees, options: &ConversionOptions) -> Utm {
        let lat = value.latitude;
        let lon = normalize_longitude(value.longitude);
        let zone = zone_for_longitude(lon);
        let lon0 = central_meridian(zone);

        tracing::trace!(lat, lon, zone, method = ?options.method, "projecting to UTM");

        let (x, y) = with_projection(options, |tm| tm.forward(lon0, lat, lon));

        let easting = x + UTM_FALSE_EASTING;
        let (northp, northing) = if y < 0. {
            (false, y + UTM_SOUTH_FALSE_NORTHING)
        } else {
            (true, y)
        };

        Utm {
            zone,
            northp,
            easting,
            northing,
        }
    }

    /// Converts to [`DecimalDegrees`] with the default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside `[1, 60]`, as
    /// it can be after projecting a longitude outside `[-180, 180)`.
    ///
    /// ```
    /// use gwells_coords::{decimal_degrees_to_utm, Error, Utm};
    ///
    /// let coord = Utm::create(7, true, 616773.56, 6651244.21).unwrap();
    /// let dd = coord.to_decimal_degrees().unwrap();
    ///
    /// assert!((dd.latitude() - 59.981918).abs() < 1e-6);
    /// assert!((dd.longitude() - -138.907356).abs() < 1e-6);
    ///
    /// let stray = decimal_degrees_to_utm(-200.0, 49.0);
    /// assert_eq!(stray.to_decimal_degrees(), Err(Error::InvalidZone(-3)));
    /// ```
    pub fn to_decimal_degrees(&self) -> Result<DecimalDegrees, Error> {
        self.to_decimal_degrees_with(&ConversionOptions::default())
    }

    /// Converts to [`DecimalDegrees`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside `[1, 60]`.
    pub fn to_decimal_degrees_with(&self, options: &ConversionOptions) -> Result<DecimalDegrees, Error> {
        check_zone(self.zone)?;

        let x = self.easting - UTM_FALSE_EASTING;
        let y = self.northp.ternary(self.northing, self.northing - UTM_SOUTH_FALSE_NORTHING);
        let lon0 = central_meridian(self.zone);

        tracing::trace!(zone = self.zone, x, y, method = ?options.method, "projecting from UTM");

        Ok(with_projection(options, |tm| tm.reverse(lon0, x, y)))
    }
}

/// British Columbia is entirely west of Greenwich, so longitudes are
/// negative by convention. A positive one has lost its sign.
pub(crate) fn normalize_longitude(lon: f64) -> f64 {
    if lon > 0. {
        tracing::debug!(lon, "positive longitude negated");
        -lon
    } else {
        lon
    }
}

/// `floor((lon + 180) / 6) + 1`, without the Norway or Svalbard exceptions.
/// Longitudes outside [-180, 180) give zones outside [1, 60].
#[allow(clippy::cast_possible_truncation)]
pub fn zone_for_longitude(lon: f64) -> i32 {
    ((lon + 180.) / 6.).floor() as i32 + 1
}

/// Longitude in degrees of the zone's central meridian.
pub fn central_meridian(zone: i32) -> f64 {
    6.0 * f64::from(zone) - 183.
}

pub(crate) fn check_zone(zone: i32) -> Result<(), Error> {
    if (MIN_UTM_ZONE..=MAX_UTM_ZONE).contains(&zone) {
        Ok(())
    } else {
        tracing::debug!(zone, "rejected UTM zone");
        Err(Error::InvalidZone(zone))
    }
}

impl Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            self.zone,
            self.northp.ternary("n", "s"),
            self.easting,
            self.northing
        )
    }
}

impl ParseCoord for Utm {
    /// Parses `"<zone><n|s> <easting> <northing>"`, the form [`Display`]
    /// prints. A bare zone number means the northern hemisphere.
    ///
    /// ```
    /// use gwells_coords::{ParseCoord, Utm};
    ///
    /// let coord = Utm::parse_coord("10n 472556.02 5363003.85").unwrap();
    /// assert_eq!(coord, Utm::create(10, true, 472556.02, 5363003.85).unwrap());
    ///
    /// let coord = Utm::parse_coord("9 550000 6000000").unwrap();
    /// assert!(coord.is_north());
    ///
    /// assert!(Utm::parse_coord("61n 500000 0").is_err());
    /// assert!(Utm::parse_coord("10x 500000 0").is_err());
    /// ```
    fn parse_coord(value: &str) -> Result<Utm, Error> {
        let mut pieces = value.split_whitespace();

        let (Some(zone), Some(easting), Some(northing), None) =
            (pieces.next(), pieces.next(), pieces.next(), pieces.next())
        else {
            return Err(Error::Parse(format!(
                "Expected \"<zone><n|s> <easting> <northing>\", got \"{value}\""
            )));
        };

        let (zone, northp) = match zone.char_indices().last() {
            Some((i, 'n' | 'N')) => (&zone[..i], true),
            Some((i, 's' | 'S')) => (&zone[..i], false),
            _ => (zone, true),
        };

        let zone: i32 = zone
            .parse()
            .map_err(|e| Error::Parse(format!("Invalid UTM zone in \"{value}\": {e}")))?;
        let easting: f64 = easting
            .parse()
            .map_err(|e| Error::Parse(format!("Invalid easting in \"{value}\": {e}")))?;
        let northing: f64 = northing
            .parse()
            .map_err(|e| Error::Parse(format!("Invalid northing in \"{value}\": {e}")))?;

        Utm::create(zone, northp, easting, northing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_across_british_columbia() {
        assert_eq!(zone_for_longitude(-139.073671), 7);
        assert_eq!(zone_for_longitude(-123.370922), 10);
        assert_eq!(zone_for_longitude(-120.), 11);
        assert_eq!(zone_for_longitude(-114.033822), 11);
        assert_eq!(zone_for_longitude(-180.), 1);
        assert_eq!(zone_for_longitude(179.9), 60);
    }

    #[test]
    fn central_meridians() {
        assert_eq!(central_meridian(10), -123.);
        assert_eq!(central_meridian(1), -177.);
        assert_eq!(central_meridian(60), 177.);
    }

    #[test]
    fn positive_longitude_is_negated() {
        assert_eq!(normalize_longitude(120.504983), -120.504983);
        assert_eq!(normalize_longitude(-120.504983), -120.504983);
        assert_eq!(normalize_longitude(0.), 0.);
    }

    #[test]
    fn zone_bounds() {
        assert!(check_zone(1).is_ok());
        assert!(check_zone(60).is_ok());
        assert!(matches!(check_zone(0), Err(Error::InvalidZone(0))));
        assert!(matches!(check_zone(61), Err(Error::InvalidZone(61))));
    }

    #[test]
    fn southern_hemisphere_gets_false_northing() {
        let utm = Utm::from_decimal_degrees(&DecimalDegrees::new(-33.8688, -151.2093));
        assert!(!utm.is_north());
        assert!(utm.northing() > 5_000_000. && utm.northing() < UTM_SOUTH_FALSE_NORTHING);

        let back = utm.to_decimal_degrees().unwrap();
        assert!((back.latitude() - -33.8688).abs() < 1e-6);
        assert!((back.longitude() - -151.2093).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_zone_does_not_invert() {
        let stray = Utm::from_decimal_degrees(&DecimalDegrees::new(49., -200.));
        assert_eq!(stray.zone(), -3);
        assert_eq!(stray.to_decimal_degrees(), Err(Error::InvalidZone(-3)));

        for zone in [0, 61] {
            let utm = Utm::new(zone, true, 500_000., 5_400_000.);
            for options in [
                ConversionOptions::default(),
                ConversionOptions::default().with_method(crate::ProjectionMethod::Exact),
            ] {
                assert_eq!(utm.to_decimal_degrees_with(&options), Err(Error::InvalidZone(zone)));
            }
        }
    }

    #[test]
    fn distance_needs_a_shared_zone() {
        let a = Utm::create(10, true, 500_000., 5_400_000.).unwrap();
        let b = Utm::create(11, true, 500_000., 5_400_000.).unwrap();
        let c = Utm::create(10, false, 500_000., 5_400_000.).unwrap();

        assert!(matches!(a.distance(&b), Err(Error::ZoneMismatch { .. })));
        assert!(matches!(a.distance(&c), Err(Error::ZoneMismatch { .. })));
        assert_eq!(a.distance(&a).unwrap(), 0.);
    }

    #[test]
    fn display_parse() {
        let coord = Utm::create(7, false, 616773.56, 6651244.21).unwrap();
        assert_eq!(coord.to_string(), "7s 616773.56 6651244.21");
        assert_eq!(Utm::parse_coord(&coord.to_string()).unwrap(), coord);
    }
}
