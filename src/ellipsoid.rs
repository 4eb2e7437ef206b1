/// Reference ellipsoid, described by its semi-major axis and flattening.
///
/// British Columbia publishes well locations on NAD83, which uses
/// [`Ellipsoid::GRS80`]. For the precision a well location needs it is
/// interchangeable with [`Ellipsoid::WGS84`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    a: f64,
    /// Flattening
    f: f64,
}

impl Ellipsoid {
    /// GRS80, the NAD83 ellipsoid
    #[allow(clippy::unreadable_literal)]
    pub const GRS80: Ellipsoid = Ellipsoid { a: 6_378_137., f: 1.0 / 298.257222101 };
    /// WGS84
    #[allow(clippy::unreadable_literal)]
    pub const WGS84: Ellipsoid = Ellipsoid { a: 6_378_137., f: 1.0 / 298.257223563 };

    pub const fn new(a: f64, f: f64) -> Ellipsoid {
        Ellipsoid { a, f }
    }

    /// Semi-major axis
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Semi-minor axis
    ///
    /// ```
    /// use gwells_coords::Ellipsoid;
    ///
    /// assert!((Ellipsoid::GRS80.b() - 6_356_752.314).abs() < 1e-3);
    /// ```
    pub fn b(&self) -> f64 {
        self.a * (1. - self.f)
    }

    pub fn f(&self) -> f64 {
        self.f
    }

    /// First eccentricity squared
    pub fn e2(&self) -> f64 {
        self.f * (2. - self.f)
    }

    /// Second eccentricity squared, (a² - b²) / b²
    pub fn ep2(&self) -> f64 {
        let b = self.b();
        (self.a.powi(2) - b.powi(2)) / b.powi(2)
    }

    /// Third flattening, (a - b) / (a + b)
    pub fn n(&self) -> f64 {
        self.f / (2. - self.f)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::GRS80
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_flattening_matches_axes() {
        for ell in [Ellipsoid::GRS80, Ellipsoid::WGS84] {
            let from_axes = (ell.a() - ell.b()) / (ell.a() + ell.b());
            assert!((ell.n() - from_axes).abs() < 1e-15);
        }
    }

    #[test]
    fn grs80_and_wgs84_minor_axes_differ_by_a_tenth_of_a_millimetre() {
        let diff = (Ellipsoid::GRS80.b() - Ellipsoid::WGS84.b()).abs();
        assert!(diff < 1e-3);
        assert!(diff > 0.);
    }

    #[test]
    fn eccentricities() {
        let ell = Ellipsoid::GRS80;
        assert!((ell.e2() - 6.694_380_022_90e-3).abs() < 1e-12);
        assert!((ell.ep2() - ell.e2() / (1. - ell.e2())).abs() < 1e-15);
    }
}
