//! Transverse Mercator by power series in the longitude offset.
//!
//! Hoffmann-Wellenhof, B., Lichtenegger, H., and Collins, J.,
//! *GPS: Theory and Practice*, 3rd ed. Springer-Verlag Wien, 1994, §10.
//! Sub-millimetre within the 6° width of a UTM zone, degrading quickly
//! beyond it.

use crate::{constants::UTM_K0, coords::latlon::DecimalDegrees, ellipsoid::Ellipsoid};

use super::Projection;

#[derive(Clone, Copy, Debug)]
pub(crate) struct SeriesTransverseMercator {
    a: f64,
    b: f64,
    k0: f64,
    ep2: f64,
    /// Mean radius scaling the meridian arc, (a + b)/2 * (1 + n²/4 + n⁴/64)
    alpha: f64,
    /// Coefficients of sin(2φ), sin(4φ), sin(6φ), sin(8φ) in the meridian arc
    arc: [f64; 4],
    /// Coefficients of sin(2y), sin(4y), sin(6y), sin(8y) in the footpoint latitude
    foot: [f64; 4],
}

impl SeriesTransverseMercator {
    pub fn new(ellipsoid: &Ellipsoid) -> SeriesTransverseMercator {
        let a = ellipsoid.a();
        let b = ellipsoid.b();
        let n = ellipsoid.n();

        let alpha = (a + b) / 2. * (1. + n.powi(2) / 4. + n.powi(4) / 64.);

        let arc = [
            -3. * n / 2. + 9. * n.powi(3) / 16. - 3. * n.powi(5) / 32.,
            15. * n.powi(2) / 16. - 15. * n.powi(4) / 32.,
            -35. * n.powi(3) / 48. + 105. * n.powi(5) / 256.,
            315. * n.powi(4) / 512.,
        ];

        let foot = [
            3. * n / 2. - 27. * n.powi(3) / 32. + 269. * n.powi(5) / 512.,
            21. * n.powi(2) / 16. - 55. * n.powi(4) / 32.,
            151. * n.powi(3) / 96. - 417. * n.powi(5) / 128.,
            1097. * n.powi(4) / 512.,
        ];

        Self {
            a,
            b,
            k0: UTM_K0,
            ep2: ellipsoid.ep2(),
            alpha,
            arc,
            foot,
        }
    }

    /// Distance along the meridian from the equator to latitude `phi` (radians).
    pub fn arc_length_of_meridian(&self, phi: f64) -> f64 {
        self.alpha * (phi + sin_series(&self.arc, phi))
    }

    /// Latitude (radians) on the central meridian whose arc length is `y`.
    pub fn footpoint_latitude(&self, y: f64) -> f64 {
        let y_ = y / self.alpha;
        y_ + sin_series(&self.foot, y_)
    }

    /// Radius of curvature in the prime vertical together with ν² = e′² cos²φ.
    fn prime_vertical(&self, phi: f64) -> (f64, f64) {
        let nu2 = self.ep2 * phi.cos().powi(2);
        let big_n = self.a.powi(2) / (self.b * (1. + nu2).sqrt());
        (big_n, nu2)
    }
}

/// Σ c_k sin(2kx), k = 1..=4
fn sin_series(coeffs: &[f64; 4], x: f64) -> f64 {
    coeffs
        .iter()
        .zip(1_i32..)
        .map(|(c, k)| c * (2. * f64::from(k) * x).sin())
        .sum()
}

impl Projection for SeriesTransverseMercator {
    #[allow(clippy::many_single_char_names)]
    fn forward(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let phi = lat.to_radians();
        let l = (lon - lon0).to_radians();

        let (big_n, nu2) = self.prime_vertical(phi);
        let c = phi.cos();
        let t = phi.tan();
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        // l and l² carry a coefficient of 1
        let l3coef = 1. - t2 + nu2;
        let l4coef = 5. - t2 + 9. * nu2 + 4. * nu2 * nu2;
        let l5coef = 5. - 18. * t2 + t4 + 14. * nu2 - 58. * t2 * nu2;
        let l6coef = 61. - 58. * t2 + t4 + 270. * nu2 - 330. * t2 * nu2;
        let l7coef = 61. - 479. * t2 + 179. * t4 - t6;
        let l8coef = 1385. - 3111. * t2 + 543. * t4 - t6;

        let x = big_n * c * l
            + big_n / 6. * c.powi(3) * l3coef * l.powi(3)
            + big_n / 120. * c.powi(5) * l5coef * l.powi(5)
            + big_n / 5040. * c.powi(7) * l7coef * l.powi(7);

        let y = self.arc_length_of_meridian(phi)
            + t / 2. * big_n * c.powi(2) * l.powi(2)
            + t / 24. * big_n * c.powi(4) * l4coef * l.powi(4)
            + t / 720. * big_n * c.powi(6) * l6coef * l.powi(6)
            + t / 40320. * big_n * c.powi(8) * l8coef * l.powi(8);

        (x * self.k0, y * self.k0)
    }

    #[allow(clippy::many_single_char_names)]
    fn reverse(&self, lon0: f64, x: f64, y: f64) -> DecimalDegrees {
        let x = x / self.k0;
        let y = y / self.k0;

        let phif = self.footpoint_latitude(y);
        let (nf, nuf2) = self.prime_vertical(phif);
        let cf = phif.cos();
        let tf = phif.tan();
        let tf2 = tf * tf;
        let tf4 = tf2 * tf2;
        let tf6 = tf4 * tf2;

        // x^k / (k! Nf^k), with cos φf below odd powers and tan φf above even ones
        let mut frac = [0_f64; 9];
        let mut nf_pow = 1.;
        let mut factorial = 1.;
        for (k, slot) in frac.iter_mut().enumerate().skip(1) {
            nf_pow *= nf;
            factorial *= k as f64;
            *slot = if k % 2 == 1 {
                1. / (factorial * nf_pow * cf)
            } else {
                tf / (factorial * nf_pow)
            };
        }

        // x¹ has no polynomial coefficient
        let x2poly = -1. - nuf2;
        let x3poly = -1. - 2. * tf2 - nuf2;
        let x4poly = 5. + 3. * tf2 + 6. * nuf2
            - 6. * tf2 * nuf2
            - 3. * nuf2 * nuf2
            - 9. * tf2 * nuf2 * nuf2;
        let x5poly = 5. + 28. * tf2 + 24. * tf4 + 6. * nuf2 + 8. * tf2 * nuf2;
        let x6poly = -61. - 90. * tf2 - 45. * tf4 - 107. * nuf2 + 162. * tf2 * nuf2;
        let x7poly = -61. - 662. * tf2 - 1320. * tf4 - 720. * tf6;
        let x8poly = 1385. + 3633. * tf2 + 4095. * tf4 + 1575. * tf6;

        let phi = phif
            + frac[2] * x2poly * x.powi(2)
            + frac[4] * x4poly * x.powi(4)
            + frac[6] * x6poly * x.powi(6)
            + frac[8] * x8poly * x.powi(8);

        let lambda = lon0.to_radians()
            + frac[1] * x
            + frac[3] * x3poly * x.powi(3)
            + frac[5] * x5poly * x.powi(5)
            + frac[7] * x7poly * x.powi(7);

        DecimalDegrees::new(phi.to_degrees(), lambda.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footpoint_inverts_meridian_arc() {
        let tm = SeriesTransverseMercator::new(&Ellipsoid::GRS80);
        for lat in [0_f64, 12.5, 48.419588, 55., 60.0223] {
            let phi = lat.to_radians();
            let back = tm.footpoint_latitude(tm.arc_length_of_meridian(phi));
            assert!((back - phi).abs() < 1e-10, "lat {lat}");
        }
    }

    #[test]
    fn equator_arc_is_zero_and_quarter_meridian_is_known() {
        let tm = SeriesTransverseMercator::new(&Ellipsoid::GRS80);
        assert!(tm.arc_length_of_meridian(0.).abs() < 1e-9);
        // Quarter meridian of GRS80
        let quarter = tm.arc_length_of_meridian(std::f64::consts::FRAC_PI_2);
        assert!((quarter - 10_001_965.729).abs() < 1e-2);
    }

    #[test]
    fn central_meridian_has_no_easting() {
        let tm = SeriesTransverseMercator::new(&Ellipsoid::GRS80);
        let (x, y) = tm.forward(-123., 49., -123.);
        assert!(x.abs() < 1e-9);
        assert!((y - tm.arc_length_of_meridian(49_f64.to_radians()) * UTM_K0).abs() < 1e-6);
    }
}
