//! Inverse-logistic (logit) response.
//!
//! The logit runs from -inf to +inf on (0, 1). Its input is pinned to
//! `[LOGIT_EPSILON, 1 - LOGIT_EPSILON]` and its output divided by 5 so the
//! useful part of the curve lands inside the unit interval.

use crate::math::clamp;

/// Distance kept from the logit singularities at 0 and 1.
pub const LOGIT_EPSILON: f64 = 0.0000001;

/// `y = y_scale * ln(x0 / (1 - x0)) / 5 + 0.5 + y_offset`
/// with `x0 = clamp(x * y_scale - x_offset, eps, 1 - eps)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogitCurve {
    pub y_scale: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl Default for LogitCurve {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl LogitCurve {
    #[must_use]
    pub const fn new(y_scale: f64) -> Self {
        Self {
            y_scale,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }

    #[must_use]
    pub const fn with_x_offset(mut self, x_offset: f64) -> Self {
        self.x_offset = x_offset;
        self
    }

    #[must_use]
    pub const fn with_y_offset(mut self, y_offset: f64) -> Self {
        self.y_offset = y_offset;
        self
    }

    /// Evaluates the raw formula, before sanitization.
    pub fn evaluate(&self, x: f64) -> f64 {
        let x0 = clamp(
            x * self.y_scale - self.x_offset,
            LOGIT_EPSILON,
            1.0 - LOGIT_EPSILON,
        );
        self.y_scale * (x0 / (1.0 - x0)).ln() / 5.0 + 0.5 + self.y_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_is_half() {
        let curve = LogitCurve::default();
        assert!((curve.evaluate(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_edges_stay_finite() {
        let curve = LogitCurve::default();
        let low = curve.evaluate(0.0);
        let high = curve.evaluate(1.0);

        assert!(low.is_finite());
        assert!(high.is_finite());
        // ln(1e-7) / 5 is about -3.2, far below zero before sanitization
        assert!(low < 0.0);
        assert!(high > 1.0);
    }

    #[test]
    fn test_monotonic_rise() {
        let curve = LogitCurve::default();
        assert!(curve.evaluate(0.3) < curve.evaluate(0.6));
    }
}
