//! Transverse Mercator by Krüger's series in the third flattening, to 6th
//! order (C. F. F. Karney, *Transverse Mercator with an accuracy of a few
//! nanometers*, J. Geodesy 85(8), 2011). Accurate to a few nanometres
//! anywhere within 3900 km of the central meridian.

use num::Complex;

use crate::{
    constants::UTM_K0,
    coords::latlon::DecimalDegrees,
    ellipsoid::Ellipsoid,
    utility::{dms, polyval, GeoMath},
    ThisOrThat,
};

use super::Projection;

// ================================
// Transverse Mercator Constants
// ================================

const B1_COEFF: [f64; 5] = [
    // b1*(n+1), polynomial in n2 of order 3
    1., 4., 64., 256., 256.,
];  // count = 5

#[allow(clippy::unreadable_literal)]
const ALP_COEFF: [f64; 27] = [
    // alp[1]/n^1, polynomial in n of order 5
    31564., -66675., 34440., 47250., -100800., 75600., 151200.,
    // alp[2]/n^2, polynomial in n of order 4
    -1983433., 863232., 748608., -1161216., 524160., 1935360.,
    // alp[3]/n^3, polynomial in n of order 3
    670412., 406647., -533952., 184464., 725760.,
    // alp[4]/n^4, polynomial in n of order 2
    6601661., -7732800., 2230245., 7257600.,
    // alp[5]/n^5, polynomial in n of order 1
    -13675556., 3438171., 7983360.,
    // alp[6]/n^6, polynomial in n of order 0
    212378941., 319334400.,
];  // count = 27

#[allow(clippy::unreadable_literal)]
const BET_COEFF: [f64; 27] = [
    // bet[1]/n^1, polynomial in n of order 5
    384796., -382725., -6720., 932400., -1612800., 1209600., 2419200.,
    // bet[2]/n^2, polynomial in n of order 4
    -1118711., 1695744., -1174656., 258048., 80640., 3870720.,
    // bet[3]/n^3, polynomial in n of order 3
    22276., -16929., -15984., 12852., 362880.,
    // bet[4]/n^4, polynomial in n of order 2
    -830251., -158400., 197865., 7257600.,
    // bet[5]/n^5, polynomial in n of order 1
    -435388., 453717., 15966720.,
    // bet[6]/n^6, polynomial in n of order 0
    20648693., 638668800.,
];  // count = 27

const MAXPOW: usize = 6;

#[derive(Clone, Debug)]
pub(crate) struct TransverseMercator {
    k0: f64,
    es: f64,
    /// Rectifying radius, circumference of the meridian / 2π
    a1: f64,
    alp: [f64; MAXPOW + 1],
    bet: [f64; MAXPOW + 1],
}

impl TransverseMercator {
    pub fn utm(ellipsoid: &Ellipsoid) -> TransverseMercator {
        let n = ellipsoid.n();
        let f = ellipsoid.f();
        let es = (f < 0.).ternary(-1., 1.) * ellipsoid.e2().abs().sqrt();

        let m = MAXPOW / 2;
        let b1 = polyval(&B1_COEFF[0..=m], n.powi(2)) / (B1_COEFF[m + 1] * (1. + n));
        let a1 = b1 * ellipsoid.a();

        let mut alp = [0_f64; MAXPOW + 1];
        let mut bet = [0_f64; MAXPOW + 1];

        let mut o = 0;
        let mut d = n;
        for l in 1..=MAXPOW {
            let m = MAXPOW - l;
            alp[l] = d * polyval(&ALP_COEFF[o..=o + m], n) / ALP_COEFF[o + m + 1];
            bet[l] = d * polyval(&BET_COEFF[o..=o + m], n) / BET_COEFF[o + m + 1];
            o += m + 2;
            d *= n;
        }

        Self {
            k0: UTM_K0,
            es,
            a1,
            alp,
            bet,
        }
    }

    /// ζ + Σ c_j sin(2jζ) over j = 1..=MAXPOW
    fn krueger_sum(zeta: Complex<f64>, coeffs: &[f64; MAXPOW + 1], sign: f64) -> Complex<f64> {
        coeffs
            .iter()
            .enumerate()
            .skip(1)
            .fold(zeta, |acc, (j, c)| acc + (zeta * (2. * j as f64)).sin() * (sign * c))
    }
}

impl Projection for TransverseMercator {
    fn forward(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let lam = (lon - lon0).to_radians();
        let taup = lat.to_radians().tan().taupf(self.es);

        // Gauss-Schreiber ratio of the conformal sphere
        let xip = taup.atan2(lam.cos());
        let etap = (lam.sin() / taup.hypot(lam.cos())).asinh();

        let zeta = Self::krueger_sum(Complex::new(xip, etap), &self.alp, 1.);
        let scale = self.a1 * self.k0;

        (zeta.im * scale, zeta.re * scale)
    }

    fn reverse(&self, lon0: f64, x: f64, y: f64) -> DecimalDegrees {
        let scale = self.a1 * self.k0;
        let zetap = Self::krueger_sum(Complex::new(y / scale, x / scale), &self.bet, -1.);

        let xip = zetap.re;
        let etap = zetap.im;
        let s = etap.sinh();
        let c = 0_f64.max(xip.cos());
        let r = s.hypot(c);

        let (lat, lon) = if r.is_zero() {
            (f64::from(dms::QD).copysign(xip), 0.)
        } else {
            let lon = s.atan2(c).to_degrees();
            let tau = (xip.sin() / r).tauf(self.es);
            (tau.atan().to_degrees(), lon)
        };

        DecimalDegrees::new(lat, lon + lon0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_coefficients_are_small_and_decreasing() {
        let tm = TransverseMercator::utm(&Ellipsoid::GRS80);
        for j in 1..MAXPOW {
            assert!(tm.alp[j].abs() > tm.alp[j + 1].abs());
            assert!(tm.bet[j].abs() > tm.bet[j + 1].abs());
        }
        // Leading terms of α₁ and β₁ in the third flattening
        let n = Ellipsoid::GRS80.n();
        assert!((tm.alp[1] - (n / 2. - 2. * n.powi(2) / 3. + 5. * n.powi(3) / 16.)).abs() < 1e-10);
        assert!((tm.bet[1] - (n / 2. - 2. * n.powi(2) / 3. + 37. * n.powi(3) / 96.)).abs() < 1e-10);
    }

    #[test]
    fn rectifying_radius() {
        let tm = TransverseMercator::utm(&Ellipsoid::GRS80);
        // quarter meridian = a1 * π/2
        let quarter = tm.a1 * std::f64::consts::FRAC_PI_2;
        assert!((quarter - 10_001_965.729).abs() < 1e-2);
    }

    #[test]
    fn pole_maps_to_quarter_meridian() {
        let tm = TransverseMercator::utm(&Ellipsoid::GRS80);
        let (x, y) = tm.forward(-123., 90., -120.);
        assert!(x.abs() < 1e-6);
        assert!((y - tm.a1 * tm.k0 * std::f64::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
