//! Power response: quadratic by default.

/// `y = y_scale * (x - x_offset)^exponent + y_offset`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolynomialCurve {
    pub exponent: f64,
    pub y_scale: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl Default for PolynomialCurve {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl PolynomialCurve {
    #[must_use]
    pub const fn new(exponent: f64) -> Self {
        Self {
            exponent,
            y_scale: 1.0,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }

    #[must_use]
    pub const fn with_y_scale(mut self, y_scale: f64) -> Self {
        self.y_scale = y_scale;
        self
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
    ///
    /// Negative bases with fractional exponents yield NaN here.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.y_scale * (x - self.x_offset).powf(self.exponent) + self.y_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quadratic() {
        let curve = PolynomialCurve::default();
        assert_eq!(curve.evaluate(0.5), 0.25);
        assert_eq!(curve.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_with_scale() {
        let curve = PolynomialCurve::new(3.0).with_y_scale(0.5);
        assert!((curve.evaluate(0.5) - 0.0625).abs() < 1e-12);
    }

    #[test]
    fn test_fractional_exponent_of_negative_base_is_nan() {
        let curve = PolynomialCurve::new(0.5).with_x_offset(1.0);
        assert!(curve.evaluate(0.0).is_nan());
    }
}
