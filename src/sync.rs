//! Keeps the three coordinate field groups of a well form in step.
//!
//! Decimal degrees are what gets stored. An edit in the DMS or UTM group is
//! first turned into decimal degrees, and every group is then recomputed
//! from those, so all three always describe the same stored value.

use crate::{
    constants::DD_PRECISION,
    coords::utm::normalize_longitude,
    options::ConversionOptions,
    utility::round_to,
    DecimalDegrees, DmsCoordinate, Error, Utm,
};

/// One location in all three representations.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateSet {
    pub decimal_degrees: DecimalDegrees,
    pub dms: DmsCoordinate,
    pub utm: Utm,
}

impl CoordinateSet {
    /// Fills the DMS and UTM groups from an edit to the decimal degree
    /// fields. The decimal degrees are kept exactly as entered.
    ///
    /// ```
    /// use gwells_coords::{ConversionOptions, CoordinateSet, DecimalDegrees};
    ///
    /// let set = CoordinateSet::from_decimal_degrees(
    ///     DecimalDegrees::new(48.419588, -123.370922),
    ///     &ConversionOptions::default(),
    /// );
    ///
    /// assert_eq!(set.dms.latitude.degrees(), 48);
    /// assert_eq!(set.utm.zone(), 10);
    /// ```
    pub fn from_decimal_degrees(value: DecimalDegrees, options: &ConversionOptions) -> CoordinateSet {
        Self {
            decimal_degrees: value,
            dms: value.to_dms(),
            utm: value.to_utm_with(options),
        }
    }

    /// Recomputes everything after an edit to the DMS fields. The longitude
    /// is made negative, as it is for every location in the province.
    ///
    /// ```
    /// use gwells_coords::{ConversionOptions, CoordinateSet, DmsAngle, DmsCoordinate};
    ///
    /// let dms = DmsCoordinate::new(
    ///     DmsAngle::new(49, 24, 55.98),
    ///     DmsAngle::new(123, 22, 15.32),
    /// );
    /// let set = CoordinateSet::from_dms(&dms, &ConversionOptions::default());
    ///
    /// assert_eq!(set.decimal_degrees.latitude(), 49.41555);
    /// assert_eq!(set.decimal_degrees.longitude(), -123.37092);
    /// assert_eq!(set.dms.longitude.degrees(), -123);
    /// ```
    pub fn from_dms(value: &DmsCoordinate, options: &ConversionOptions) -> CoordinateSet {
        let dd = value.to_decimal_degrees();
        let dd = DecimalDegrees::new(dd.latitude, normalize_longitude(dd.longitude));

        Self::from_decimal_degrees(dd, options)
    }

    /// Recomputes everything after an edit to the UTM fields. The decimal
    /// degrees are rounded to 5 places before the DMS group is derived, and
    /// the UTM group keeps the values as entered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside `[1, 60]`.
    ///
    /// ```
    /// use gwells_coords::{ConversionOptions, CoordinateSet, Utm};
    ///
    /// let utm = Utm::create(10, true, 472556.02, 5363003.85).unwrap();
    /// let set = CoordinateSet::from_utm(&utm, &ConversionOptions::default()).unwrap();
    ///
    /// assert_eq!(set.decimal_degrees.latitude(), 48.41959);
    /// assert_eq!(set.decimal_degrees.longitude(), -123.37092);
    /// assert_eq!(set.utm, utm);
    /// ```
    pub fn from_utm(value: &Utm, options: &ConversionOptions) -> Result<CoordinateSet, Error> {
        let dd = value.to_decimal_degrees_with(options)?;
        let dd = DecimalDegrees::new(
            round_to(dd.latitude, DD_PRECISION),
            round_to(dd.longitude, DD_PRECISION),
        );

        Ok(Self {
            decimal_degrees: dd,
            dms: dd.to_dms(),
            utm: *value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DmsAngle;

    #[test]
    fn dms_edit_fills_utm() {
        let dms = DmsCoordinate::new(DmsAngle::new(59, 58, 54.9), DmsAngle::new(-138, 54, 26.48));
        let set = CoordinateSet::from_dms(&dms, &ConversionOptions::default());

        assert_eq!(set.utm.zone(), 7);
        assert!((set.utm.easting() - 616_773.56).abs() < 1.);
        assert!((set.utm.northing() - 6_651_244.21).abs() < 1.);
    }

    #[test]
    fn bad_zone_is_rejected() {
        let utm = Utm::new(0, true, 500_000., 5_400_000.);
        assert_eq!(
            CoordinateSet::from_utm(&utm, &ConversionOptions::default()),
            Err(Error::InvalidZone(0))
        );
    }

    #[test]
    fn half_typed_dms_still_converts() {
        let dms = DmsCoordinate::new(
            DmsAngle::from_fields("49", "", ""),
            DmsAngle::from_fields("-123", "", ""),
        );
        let set = CoordinateSet::from_dms(&dms, &ConversionOptions::default());

        assert_eq!(set.decimal_degrees, DecimalDegrees::new(49., -123.));
        assert_eq!(set.utm.zone(), 10);
        assert!((set.utm.easting() - 500_000.).abs() < 1e-6);
    }
}
