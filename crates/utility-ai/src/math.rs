//! Clamping and range normalization.

/// Restricts `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: inverted or NaN bounds simply
/// fail both comparisons, and a NaN `value` passes through unchanged.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Restricts `value` to the unit interval `[0, 1]`.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Clamps `value` into `[min, max]` and rescales it linearly onto `[0, 1]`.
///
/// The caller guarantees `max > min`. An empty range divides by zero;
/// [`Consideration`](crate::Consideration) rejects such domains when it is
/// built, so scoring never reaches that case.
#[inline]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(max > min, "normalize requires max > min, got [{min}, {max}]");
    let value = clamp(value, min, max);
    (value - min) / (max - min)
}
