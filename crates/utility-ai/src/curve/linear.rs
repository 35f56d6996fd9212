//! Straight-line response.

/// `y = slope * (x - x_offset) + y_offset`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinearCurve {
    pub slope: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl Default for LinearCurve {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl LinearCurve {
    /// Creates a line through the origin with the given slope.
    #[must_use]
    pub const fn new(slope: f64) -> Self {
        Self {
            slope,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }

    /// Falling line from 1 at `x = 0` to 0 at `x = 1`.
    #[must_use]
    pub const fn inverse() -> Self {
        Self {
            slope: -1.0,
            x_offset: 1.0,
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
        self.slope * (x - self.x_offset) + self.y_offset
    }
}
