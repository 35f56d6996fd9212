//! Gaussian bell response.

use std::f64::consts::TAU;

/// Probability density of the normal distribution at `x`.
pub fn bell_curve(x: f64, mean: f64, std_dev: f64) -> f64 {
    (1.0 / (std_dev * TAU.sqrt())) * (-((x - mean).powi(2) / (2.0 * std_dev.powi(2)))).exp()
}

/// `y = scale * bell(x - x_offset, mean, std_dev) - y_offset`
///
/// When `normalize` is set, `scale` is `y_scale / bell(0, 0, std_dev)`, so the
/// peak at `x = mean + x_offset` equals `y_scale` before the offset. Otherwise
/// `scale` is `y_scale` and the raw density is used.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalCurve {
    pub mean: f64,
    pub std_dev: f64,
    pub y_scale: f64,
    pub normalize: bool,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl Default for NormalCurve {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl NormalCurve {
    /// Creates a peak-normalized bell centered on `mean`.
    #[must_use]
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self {
            mean,
            std_dev,
            y_scale: 1.0,
            normalize: true,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }

    #[must_use]
    pub const fn with_y_scale(mut self, y_scale: f64) -> Self {
        self.y_scale = y_scale;
        self
    }

    /// Switches between the peak-normalized bell and the raw density.
    #[must_use]
    pub const fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
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

    /// Multiplier applied to the density, peak division included.
    pub fn effective_scale(&self) -> f64 {
        if self.normalize {
            let peak = bell_curve(0.0, 0.0, self.std_dev);
            1.0 / peak * self.y_scale
        } else {
            self.y_scale
        }
    }

    /// Evaluates the raw formula, before sanitization.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.effective_scale() * bell_curve(x - self.x_offset, self.mean, self.std_dev)
            - self.y_offset
    }
}
