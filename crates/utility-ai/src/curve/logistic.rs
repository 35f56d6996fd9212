//! Generalised logistic (sigmoid) response.
//!
//! The curve is usually described by where it crosses from low to high
//! (`crossover`) and how steep that transition is (`slope`). Both are folded
//! into `x_scale`/`x_offset` when the curve is built, so evaluation only sees
//! the raw form.

/// `y = y_scale / (1 + exp(-(x_scale * x - x_offset))) + y_offset`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogisticCurve {
    pub x_scale: f64,
    pub x_offset: f64,
    pub y_scale: f64,
    pub y_offset: f64,
}

impl Default for LogisticCurve {
    fn default() -> Self {
        Self::from_slope_crossover(Self::DEFAULT_SLOPE, Self::DEFAULT_CROSSOVER)
    }
}

impl LogisticCurve {
    pub const DEFAULT_SLOPE: f64 = 0.5;
    pub const DEFAULT_CROSSOVER: f64 = 0.5;

    /// Builds the curve directly from its raw scale and offset.
    #[must_use]
    pub const fn new(x_scale: f64, x_offset: f64) -> Self {
        Self {
            x_scale,
            x_offset,
            y_scale: 1.0,
            y_offset: 0.0,
        }
    }

    /// Builds the curve from a steepness and a crossover point.
    ///
    /// `x_scale = slope / crossover` and `x_offset = crossover * slope / crossover`.
    /// A zero crossover produces non-finite parameters; the resulting output is
    /// sanitized like any other numeric blow-up.
    #[must_use]
    pub fn from_slope_crossover(slope: f64, crossover: f64) -> Self {
        let scaling = 1.0 / crossover;
        Self::new(slope * scaling, crossover * slope * scaling)
    }

    #[must_use]
    pub const fn with_y_scale(mut self, y_scale: f64) -> Self {
        self.y_scale = y_scale;
        self
    }

    #[must_use]
    pub const fn with_y_offset(mut self, y_offset: f64) -> Self {
        self.y_offset = y_offset;
        self
    }

    /// Evaluates the raw formula, before sanitization.
    pub fn evaluate(&self, x: f64) -> f64 {
        let x0 = self.x_scale * x - self.x_offset;
        self.y_scale / (1.0 + (-x0).exp()) + self.y_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_crossover_conversion() {
        let curve = LogisticCurve::from_slope_crossover(10.0, 0.5);
        assert_eq!(curve.x_scale, 20.0);
        assert_eq!(curve.x_offset, 10.0);
    }

    #[test]
    fn test_default_parameters() {
        let curve = LogisticCurve::default();
        assert_eq!(curve.x_scale, 1.0);
        assert_eq!(curve.x_offset, 0.5);
        assert_eq!(curve.y_scale, 1.0);
    }

    #[test]
    fn test_crossover_is_midpoint() {
        let curve = LogisticCurve::from_slope_crossover(10.0, 0.5);
        assert!((curve.evaluate(0.5) - 0.5).abs() < 1e-12);
        assert!(curve.evaluate(0.1) < 0.05);
        assert!(curve.evaluate(0.9) > 0.95);
    }

    #[test]
    fn test_zero_crossover_is_not_finite() {
        let curve = LogisticCurve::from_slope_crossover(1.0, 0.0);
        assert!(!curve.evaluate(0.5).is_finite());
    }
}
