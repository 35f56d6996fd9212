//! Response curves: shaping a normalized input into a utility score.
//!
//! Every curve maps an input (nominally in `[0, 1]`) to an output in `[0, 1]`.
//! The six shapes are a closed set, modelled as the [`ResponseCurve`] enum with
//! one parameter struct per variant.
//!
//! # Sanitization
//!
//! Several shapes can leave the unit interval (logit, polynomial, offsets) or
//! blow up numerically (zero crossover, zero standard deviation). All variants
//! therefore route their raw result through [`sanitize`]:
//!
//! - infinite or NaN → `0.0`
//! - below zero → `0.0`
//! - above one → `1.0`
//!
//! so `compute(x)` is always a finite value in `[0, 1]`.

mod factory;
mod linear;
mod logistic;
mod logit;
mod normal;
mod polynomial;
mod sine;

pub use factory::{CurveConstructor, CurveRegistry};
pub use linear::LinearCurve;
pub use logistic::LogisticCurve;
pub use logit::{LOGIT_EPSILON, LogitCurve};
pub use normal::{NormalCurve, bell_curve};
pub use polynomial::PolynomialCurve;
pub use sine::SineCurve;

pub use crate::params::CurveParams;

use crate::math::clamp_unit;

/// Forces a raw curve result into `[0, 1]`, mapping non-finite values to zero.
#[inline]
pub fn sanitize(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    clamp_unit(value)
}

/// Name of a response curve shape, as used by data-driven configuration.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CurveKind {
    Linear,
    Polynomial,
    Logistic,
    Logit,
    Normal,
    Sine,
}

impl CurveKind {
    pub const COUNT: usize = 6;

    /// All kinds, in declaration order.
    pub const fn all() -> [CurveKind; Self::COUNT] {
        [
            CurveKind::Linear,
            CurveKind::Polynomial,
            CurveKind::Logistic,
            CurveKind::Logit,
            CurveKind::Normal,
            CurveKind::Sine,
        ]
    }
}

/// A response curve of any supported shape.
///
/// With the `serde` feature the enum is tagged by variant name, so RON data
/// reads `Polynomial((exponent: 0.5))`. Fields left out take the curve
/// defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseCurve {
    Linear(LinearCurve),
    Polynomial(PolynomialCurve),
    Logistic(LogisticCurve),
    Logit(LogitCurve),
    Normal(NormalCurve),
    Sine(SineCurve),
}

impl Default for ResponseCurve {
    fn default() -> Self {
        ResponseCurve::Linear(LinearCurve::default())
    }
}

impl ResponseCurve {
    /// Computes the curve output for `x`, sanitized into `[0, 1]`.
    pub fn compute(&self, x: f64) -> f64 {
        sanitize(self.evaluate(x))
    }

    /// Evaluates the variant's formula without sanitization.
    ///
    /// Useful when plotting a curve during tuning; scoring always goes through
    /// [`compute`](Self::compute).
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            ResponseCurve::Linear(curve) => curve.evaluate(x),
            ResponseCurve::Polynomial(curve) => curve.evaluate(x),
            ResponseCurve::Logistic(curve) => curve.evaluate(x),
            ResponseCurve::Logit(curve) => curve.evaluate(x),
            ResponseCurve::Normal(curve) => curve.evaluate(x),
            ResponseCurve::Sine(curve) => curve.evaluate(x),
        }
    }

    pub const fn kind(&self) -> CurveKind {
        match self {
            ResponseCurve::Linear(_) => CurveKind::Linear,
            ResponseCurve::Polynomial(_) => CurveKind::Polynomial,
            ResponseCurve::Logistic(_) => CurveKind::Logistic,
            ResponseCurve::Logit(_) => CurveKind::Logit,
            ResponseCurve::Normal(_) => CurveKind::Normal,
            ResponseCurve::Sine(_) => CurveKind::Sine,
        }
    }
}

impl From<LinearCurve> for ResponseCurve {
    fn from(curve: LinearCurve) -> Self {
        ResponseCurve::Linear(curve)
    }
}

impl From<PolynomialCurve> for ResponseCurve {
    fn from(curve: PolynomialCurve) -> Self {
        ResponseCurve::Polynomial(curve)
    }
}

impl From<LogisticCurve> for ResponseCurve {
    fn from(curve: LogisticCurve) -> Self {
        ResponseCurve::Logistic(curve)
    }
}

impl From<LogitCurve> for ResponseCurve {
    fn from(curve: LogitCurve) -> Self {
        ResponseCurve::Logit(curve)
    }
}

impl From<NormalCurve> for ResponseCurve {
    fn from(curve: NormalCurve) -> Self {
        ResponseCurve::Normal(curve)
    }
}

impl From<SineCurve> for ResponseCurve {
    fn from(curve: SineCurve) -> Self {
        ResponseCurve::Sine(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn sample_curves() -> Vec<ResponseCurve> {
        vec![
            LinearCurve::default().into(),
            LinearCurve::new(3.0).with_y_offset(-0.5).into(),
            PolynomialCurve::default().into(),
            PolynomialCurve::new(0.5).with_x_offset(0.5).into(),
            PolynomialCurve::new(-2.0).into(),
            LogisticCurve::default().into(),
            LogisticCurve::from_slope_crossover(10.0, 0.3).into(),
            LogisticCurve::from_slope_crossover(1.0, 0.0).into(),
            LogitCurve::default().into(),
            LogitCurve::new(2.0).with_y_offset(0.3).into(),
            NormalCurve::default().into(),
            NormalCurve::new(0.5, 0.0).into(),
            NormalCurve::new(0.5, 0.05).with_normalize(false).into(),
            SineCurve::default().into(),
            SineCurve::high_low().with_y_offset(0.4).into(),
        ]
    }

    #[test]
    fn test_sanitize_rules() {
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(f64::INFINITY), 0.0);
        assert_eq!(sanitize(f64::NEG_INFINITY), 0.0);
        assert_eq!(sanitize(-0.1), 0.0);
        assert_eq!(sanitize(1.1), 1.0);
        assert_eq!(sanitize(0.42), 0.42);
    }

    #[test]
    fn test_linear_zero_slope_computes_zero() {
        let curve = ResponseCurve::from(LinearCurve::new(0.0));
        assert_eq!(curve.compute(0.0), 0.0);
        assert_eq!(curve.compute(1.0), 0.0);
    }

    #[test]
    fn test_linear_unit_slope_endpoints() {
        let curve = ResponseCurve::from(LinearCurve::new(1.0));
        assert_eq!(curve.compute(0.0), 0.0);
        assert_eq!(curve.compute(1.0), 1.0);
    }

    #[test]
    fn test_normal_peak_normalization() {
        let curve = ResponseCurve::from(NormalCurve::new(1.0, 1.0).with_y_scale(1.0));
        assert_eq!(curve.compute(1.0), 1.0);
    }

    #[test]
    fn test_normal_narrow_peak_far_value() {
        let curve = ResponseCurve::from(NormalCurve::new(1.0, 0.1));
        assert!(curve.compute(0.0).abs() < 1e-7);
    }

    #[test]
    fn test_logit_edges_are_clamped_by_sanitize() {
        let curve = ResponseCurve::from(LogitCurve::default());
        assert_eq!(curve.compute(0.0), 0.0);
        assert_eq!(curve.compute(1.0), 1.0);
    }

    #[test]
    fn test_blown_up_curves_compute_zero() {
        let logistic = ResponseCurve::from(LogisticCurve::from_slope_crossover(1.0, 0.0));
        let normal = ResponseCurve::from(NormalCurve::new(0.5, 0.0));
        assert_eq!(logistic.compute(0.5), 0.0);
        assert_eq!(normal.compute(0.2), 0.0);
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(ResponseCurve::default().kind(), CurveKind::Linear);
        assert_eq!(
            ResponseCurve::from(SineCurve::low_high()).kind(),
            CurveKind::Sine
        );
        assert_eq!(
            ResponseCurve::from(NormalCurve::default()).kind(),
            CurveKind::Normal
        );
    }

    #[test]
    fn test_kind_string_forms() {
        for kind in CurveKind::all() {
            assert_eq!(CurveKind::from_str(kind.as_ref()).unwrap(), kind);
        }
        assert_eq!(CurveKind::Logistic.to_string(), "logistic");
        assert_eq!(CurveKind::from_str("NORMAL").unwrap(), CurveKind::Normal);
        assert!(CurveKind::from_str("cubic").is_err());
    }

    proptest! {
        #[test]
        fn compute_is_bounded_for_finite_inputs(x in any::<f64>()) {
            prop_assume!(x.is_finite());
            for curve in sample_curves() {
                let y = curve.compute(x);
                prop_assert!(y.is_finite());
                prop_assert!((0.0..=1.0).contains(&y), "{curve:?} gave {y} at {x}");
            }
        }

        #[test]
        fn compute_is_bounded_for_arbitrary_parameters(
            kind in 0usize..CurveKind::COUNT,
            a in -100.0f64..100.0,
            b in -100.0f64..100.0,
            x in -10.0f64..10.0,
        ) {
            let curve: ResponseCurve = match kind {
                0 => LinearCurve::new(a).with_x_offset(b).into(),
                1 => PolynomialCurve::new(a).with_x_offset(b).into(),
                2 => LogisticCurve::from_slope_crossover(a, b).into(),
                3 => LogitCurve::new(a).with_x_offset(b).into(),
                4 => NormalCurve::new(a, b).into(),
                _ => SineCurve::new(a, b).into(),
            };
            let y = curve.compute(x);
            prop_assert!((0.0..=1.0).contains(&y), "{curve:?} gave {y} at {x}");
        }
    }
}
