// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

// False easting applied to every UTM zone
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;
// False northing applied in the southern hemisphere
pub(crate) const UTM_SOUTH_FALSE_NORTHING: f64 = 10_000_000.;

pub(crate) const MIN_UTM_ZONE: i32 = 1;
pub(crate) const MAX_UTM_ZONE: i32 = 60;

/// Decimal places kept on a decimal degree value. Submission rules ask for
/// at least five.
pub(crate) const DD_PRECISION: i32 = 5;
/// Decimal places kept on DMS seconds.
pub(crate) const DMS_SECONDS_PRECISION: i32 = 2;
