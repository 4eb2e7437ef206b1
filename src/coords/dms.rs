use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    constants::{DD_PRECISION, DMS_SECONDS_PRECISION},
    coords::latlon::DecimalDegrees,
    utility::{degree_sign, dms, finite_or_zero, parse_field, round_to},
    Error, ParseCoord,
};

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

lazy_static! {
    static ref DMS_RE: Regex = Regex::new(
        r#"(?x)
        ^\s*
        (?P<deg>[-+]?\d{1,3})               # signed whole degrees
        \s*(?:°|\*|d|\s)\s*
        (?P<min>\d{1,2})                    # whole minutes
        \s*(?:′|'|m|\s)\s*
        (?P<sec>\d{1,2}(?:\.\d+)?)          # seconds with optional fraction
        \s*(?:″|"|''|s)?
        \s*(?P<hemi>[NSEW])?                # optional hemisphere
        \s*$
        "#
    ).expect("DMS regex is valid");
}

/// An angle in degrees, minutes and seconds. The sign lives on
/// [`DmsAngle::degrees`] alone; minutes and seconds are magnitudes.
///
/// An angle between 0° and -1° cannot be told apart from its positive
/// twin, since `-0` is not an `i32`. Well locations in British Columbia are
/// never that close to the equator or Greenwich.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DmsAngle {
    #[cfg_attr(feature = "serde", serde(alias = "deg"))]
    pub(crate) degrees: i32,
    #[cfg_attr(feature = "serde", serde(alias = "min"))]
    pub(crate) minutes: i32,
    #[cfg_attr(feature = "serde", serde(alias = "sec"))]
    pub(crate) seconds: f64,
}

/// The two DMS angles that make up one location.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DmsCoordinate {
    pub latitude: DmsAngle,
    pub longitude: DmsAngle,
}

impl DmsAngle {
    /// Builds an angle as given, without range checks. See
    /// [`crate::validation::is_valid_dms`] to check one.
    pub fn new(degrees: i32, minutes: i32, seconds: f64) -> DmsAngle {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Builds an angle from raw numeric form values. Non-finite components
    /// count as `0`; degrees and minutes are truncated toward zero and
    /// minutes and seconds lose their sign.
    ///
    /// ```
    /// use gwells_coords::DmsAngle;
    ///
    /// let angle = DmsAngle::lenient(-49.0, 24.0, f64::NAN);
    /// assert_eq!(angle, DmsAngle::new(-49, 24, 0.0));
    ///
    /// let angle = DmsAngle::lenient(f64::INFINITY, 59.9, 12.5);
    /// assert_eq!(angle, DmsAngle::new(0, 59, 12.5));
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn lenient(degrees: f64, minutes: f64, seconds: f64) -> DmsAngle {
        Self {
            degrees: finite_or_zero(degrees).trunc() as i32,
            minutes: finite_or_zero(minutes).abs().trunc() as i32,
            seconds: finite_or_zero(seconds).abs(),
        }
    }

    /// Builds an angle from the text of the three form inputs. Empty or
    /// non-numeric text counts as `0`, so an angle can be converted while
    /// the user is still typing it.
    ///
    /// ```
    /// use gwells_coords::DmsAngle;
    ///
    /// let angle = DmsAngle::from_fields("-49", "24", "");
    /// assert_eq!(angle, DmsAngle::new(-49, 24, 0.0));
    ///
    /// let angle = DmsAngle::from_fields("", "abc", "55.98");
    /// assert_eq!(angle, DmsAngle::new(0, 0, 55.98));
    /// ```
    pub fn from_fields(degrees: &str, minutes: &str, seconds: &str) -> DmsAngle {
        Self::lenient(parse_field(degrees), parse_field(minutes), parse_field(seconds))
    }

    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn is_negative(&self) -> bool {
        self.degrees < 0
    }

    /// Splits a decimal degree value. Non-finite input is treated as `0`.
    ///
    /// * degrees: `trunc(d)`, toward zero
    /// * minutes: `floor(|d| * 60 mod 60)`
    /// * seconds: `|d| * 3600 mod 60`, rounded to 2 decimal places
    ///
    /// Seconds that round up to `60.00` are left as they are rather than
    /// carried into the minutes.
    ///
    /// ```
    /// use gwells_coords::DmsAngle;
    ///
    /// let angle = DmsAngle::from_decimal_degrees(-144.5099);
    ///
    /// assert_eq!(angle.degrees(), -144);
    /// assert_eq!(angle.minutes(), 30);
    /// assert_eq!(angle.seconds(), 35.64);
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_decimal_degrees(value: f64) -> DmsAngle {
        let value = finite_or_zero(value);
        let magnitude = value.abs();

        let degrees = value.trunc() as i32;
        let minutes = ((magnitude * f64::from(dms::DM)) % f64::from(dms::MS)).floor() as i32;
        let seconds = (magnitude * f64::from(dms::DS)) % f64::from(dms::MS);

        Self {
            degrees,
            minutes,
            seconds: round_to(seconds, DMS_SECONDS_PRECISION),
        }
    }

    /// Recombines the angle into decimal degrees, rounded to 5 decimal
    /// places. The sign of `degrees` applies to minutes and seconds; zero
    /// degrees counts as positive.
    ///
    /// ```
    /// use gwells_coords::DmsAngle;
    ///
    /// let angle = DmsAngle::new(-49, 24, 55.98);
    /// assert_eq!(angle.to_decimal_degrees(), -49.41555);
    ///
    /// let angle = DmsAngle::new(0, 30, 0.0);
    /// assert_eq!(angle.to_decimal_degrees(), 0.5);
    /// ```
    pub fn to_decimal_degrees(&self) -> f64 {
        let sign = degree_sign(self.degrees);
        let value = f64::from(self.degrees)
            + sign * f64::from(self.minutes) / f64::from(dms::DM)
            + sign * finite_or_zero(self.seconds) / f64::from(dms::DS);

        round_to(value, DD_PRECISION)
    }

    /// Unsigned size of the angle in degrees, unrounded.
    pub(crate) fn magnitude(&self) -> f64 {
        f64::from(self.degrees.unsigned_abs())
            + f64::from(self.minutes) / f64::from(dms::DM)
            + self.seconds / f64::from(dms::DS)
    }
}

impl DmsCoordinate {
    pub fn new(latitude: DmsAngle, longitude: DmsAngle) -> DmsCoordinate {
        Self { latitude, longitude }
    }

    pub fn from_decimal_degrees(value: &DecimalDegrees) -> DmsCoordinate {
        value.to_dms()
    }

    pub fn to_decimal_degrees(&self) -> DecimalDegrees {
        DecimalDegrees::from_dms(self)
    }
}

/// Prints the parts as stored, seconds to 2 decimal places. Seconds left at
/// `60.00` by [`DmsAngle::from_decimal_degrees`] print as `60.00″`, not as
/// an extra minute.
impl Display for DmsAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{DEGREE_SIGN} {}{ARC_MINUTE_SIGN} {:.2}{ARC_SECOND_SIGN}",
            self.degrees,
            self.minutes,
            self.seconds,
        )
    }
}

impl Display for DmsCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.latitude, self.longitude)
    }
}

impl ParseCoord for DmsAngle {
    /// Parses the usual ways of writing a DMS angle: `49°24′55.98″`,
    /// `49°24'55.98"`, `49 24 55.98`, `49d24m55.98s`, optionally followed by
    /// a hemisphere letter. `S` and `W` make the degrees negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the text is not in DMS notation and
    /// [`Error::InvalidDms`] when a hemisphere letter contradicts a signed
    /// degree value.
    ///
    /// ```
    /// use gwells_coords::{DmsAngle, ParseCoord};
    ///
    /// let angle = DmsAngle::parse_coord("123°22'15.32\"W").unwrap();
    /// assert_eq!(angle, DmsAngle::new(-123, 22, 15.32));
    ///
    /// let angle = DmsAngle::parse_coord("48 25 10.52").unwrap();
    /// assert_eq!(angle, DmsAngle::new(48, 25, 10.52));
    ///
    /// assert!(DmsAngle::parse_coord("48.419588").is_err());
    /// ```
    fn parse_coord(value: &str) -> Result<DmsAngle, Error> {
        let caps = DMS_RE
            .captures(value)
            .ok_or_else(|| Error::Parse(format!("\"{value}\" is not in degree-minute-second notation")))?;

        let degrees: i32 = caps["deg"]
            .parse()
            .map_err(|e| Error::Parse(format!("Invalid degrees in \"{value}\": {e}")))?;
        let minutes: i32 = caps["min"]
            .parse()
            .map_err(|e| Error::Parse(format!("Invalid minutes in \"{value}\": {e}")))?;
        let seconds: f64 = caps["sec"]
            .parse()
            .map_err(|e| Error::Parse(format!("Invalid seconds in \"{value}\": {e}")))?;

        let degrees = match caps.name("hemi").map(|m| m.as_str()) {
            Some(hemi @ ("S" | "W")) => {
                if caps["deg"].starts_with('-') {
                    return Err(Error::InvalidDms(format!(
                        "\"{value}\" has both a negative sign and a {hemi} hemisphere"
                    )));
                }
                -degrees.abs()
            }
            Some(hemi) if degrees < 0 => {
                return Err(Error::InvalidDms(format!(
                    "\"{value}\" has a negative sign with a {hemi} hemisphere"
                )));
            }
            _ => degrees,
        };

        Ok(DmsAngle::new(degrees, minutes, seconds))
    }
}
