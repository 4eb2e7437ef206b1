use crate::ThisOrThat;

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Minutes per degree
    pub const DM: i32 = 60;
    /// Seconds per minute
    pub const MS: i32 = 60;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Seconds per degree
    pub const DS: i32 = DM * MS;
}

/// Evaluate a polynomial. Coefficients are ordered from the highest power
/// down to the constant term.
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

/// Round `value` to `places` decimal places, halves away from zero.
///
/// ```
/// use gwells_coords::utility::round_to;
///
/// assert_eq!(round_to(35.63999999995576, 2), 35.64);
/// assert_eq!(round_to(-49.415549999999996, 5), -49.41555);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

/// Non-finite numbers (NaN, ±inf) collapse to `0`. Form fields that are
/// empty or half-typed come through as NaN and must not poison a conversion.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::debug!(value, "non-finite coordinate component treated as zero");
        0.
    }
}

/// Parse a single form field. Empty or non-numeric text is `0`.
pub(crate) fn parse_field(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .map_or(0., finite_or_zero)
}

/// Sign of a degree component, with `sign(0) == +1`.
pub(crate) fn degree_sign(degrees: i32) -> f64 {
    (degrees < 0).ternary(-1., 1.)
}

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    fn eatanhe(&self, es: Self) -> Self;
    fn taupf(&self, es: Self) -> Self;
    fn tauf(&self, es: Self) -> Self;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    fn eatanhe(&self, es: f64) -> f64 {
        if es.is_sign_positive() {
            es * (es * *self).atanh()
        } else {
            -es * (es * *self).atan()
        }
    }

    /// tan(chi) from tan(phi), chi being the conformal latitude
    fn taupf(&self, es: f64) -> f64 {
        let tau1 = 1.0_f64.hypot(*self);
        let sig = (*self / tau1).eatanhe(es).sinh();

        1.0_f64.hypot(sig) * *self - sig * tau1
    }

    /// Inverse of [`GeoMath::taupf`] by Newton's method
    #[allow(clippy::similar_names)]
    fn tauf(&self, es: f64) -> f64 {
        let numit = 5;
        let tol = f64::EPSILON.sqrt() / 10.0;
        let taumax = 2.0 / f64::EPSILON.sqrt();

        let e2m = 1.0 - es.powi(2);
        let mut tau = if self.abs() > 70.0 {
            self * 1_f64.eatanhe(es).exp()
        } else {
            self / e2m
        };

        if tau.abs() >= taumax || tau.is_nan() {
            return tau;
        }

        let stol = tol * self.abs().max(1.0);
        for _ in 0..numit {
            let taupa = tau.taupf(es);
            let dtau = (self - taupa) * (1.0 + e2m * tau.powi(2))
                / (e2m * 1.0_f64.hypot(tau) * 1.0_f64.hypot(taupa));
            tau += dtau;
            if dtau.abs() < stol {
                break;
            }
        }
        tau
    }
}
