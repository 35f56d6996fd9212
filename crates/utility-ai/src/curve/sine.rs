//! Cosine-based wave response.

use std::f64::consts::TAU;

/// `y = 0.5 * amplitude * -cos(2π * (x - x_offset) * frequency_scale) + 0.5 + y_offset`
///
/// With the default parameters the curve completes one full low-high-low cycle
/// over `[0, 1]`. Halving the frequency gives a single smooth rise.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SineCurve {
    pub amplitude: f64,
    pub frequency_scale: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl Default for SineCurve {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl SineCurve {
    #[must_use]
    pub const fn new(amplitude: f64, frequency_scale: f64) -> Self {
        Self {
            amplitude,
            frequency_scale,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }

    /// Smooth rise from 0 at `x = 0` to 1 at `x = 1`.
    #[must_use]
    pub const fn low_high() -> Self {
        Self::new(1.0, 0.5)
    }

    /// Smooth fall from 1 at `x = 0` to 0 at `x = 1`.
    #[must_use]
    pub const fn high_low() -> Self {
        Self::new(1.0, 0.5).with_x_offset(1.0)
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
        let x0 = x - self.x_offset;
        0.5 * self.amplitude * -(TAU * x0 * self.frequency_scale).cos() + 0.5 + self.y_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_low_high_rises() {
        let curve = SineCurve::low_high();
        assert!(curve.evaluate(0.0).abs() < EPS);
        assert!((curve.evaluate(0.5) - 0.5).abs() < EPS);
        assert!((curve.evaluate(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_high_low_falls() {
        let curve = SineCurve::high_low();
        assert!((curve.evaluate(0.0) - 1.0).abs() < EPS);
        assert!(curve.evaluate(1.0).abs() < EPS);
    }

    #[test]
    fn test_presets_are_independent_values() {
        let mut a = SineCurve::low_high();
        a.amplitude = 0.2;
        let b = SineCurve::low_high();

        assert_eq!(a.amplitude, 0.2);
        assert_eq!(b.amplitude, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_default_full_cycle() {
        let curve = SineCurve::default();
        assert!(curve.evaluate(0.0).abs() < EPS);
        assert!((curve.evaluate(0.5) - 1.0).abs() < EPS);
        assert!(curve.evaluate(1.0).abs() < EPS);
    }
}
