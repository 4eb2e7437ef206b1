use lazy_static::lazy_static;

use crate::{coords::latlon::DecimalDegrees, ellipsoid::Ellipsoid, options::{ConversionOptions, ProjectionMethod}};

pub mod series;
pub mod transverse_mercator;

use series::SeriesTransverseMercator;
use transverse_mercator::TransverseMercator;

/// A Transverse Mercator engine scaled for UTM. Coordinates on the plane are
/// meters from the central meridian and the equator, before any false
/// easting or northing.
pub(crate) trait Projection {
    fn forward(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64);
    fn reverse(&self, lon0: f64, x: f64, y: f64) -> DecimalDegrees;
}

lazy_static! {
    static ref GRS80_SERIES: SeriesTransverseMercator = SeriesTransverseMercator::new(&Ellipsoid::GRS80);
    static ref GRS80_EXACT: TransverseMercator = TransverseMercator::utm(&Ellipsoid::GRS80);
}

/// Run `f` against the engine selected by `options`. The GRS80 engines are
/// built once; any other ellipsoid gets a fresh one.
pub(crate) fn with_projection<R>(options: &ConversionOptions, f: impl FnOnce(&dyn Projection) -> R) -> R {
    let grs80 = options.ellipsoid == Ellipsoid::GRS80;

    match (options.method, grs80) {
        (ProjectionMethod::Series, true) => f(&*GRS80_SERIES),
        (ProjectionMethod::Exact, true) => f(&*GRS80_EXACT),
        (ProjectionMethod::Series, false) => f(&SeriesTransverseMercator::new(&options.ellipsoid)),
        (ProjectionMethod::Exact, false) => f(&TransverseMercator::utm(&options.ellipsoid)),
    }
}
