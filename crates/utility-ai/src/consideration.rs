//! Considerations: one situational input shaped by one response curve.
//!
//! A consideration declares the raw domain `[min_value, max_value]` of its
//! input. Scoring pulls the raw value from an [`InputSource`], normalizes it
//! into `[0, 1]` and runs it through the curve.

use crate::curve::ResponseCurve;
use crate::error::{Result, UtilityError};
use crate::input::InputSource;
use crate::math::normalize;
use crate::params::{ConsiderationParams, ParamValue};
use crate::score::Score;
use crate::SCORING_TARGET;

/// A named input paired with a response curve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Consideration {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    curve: ResponseCurve,
    #[cfg_attr(feature = "serde", serde(default = "default_min"))]
    min_value: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_max"))]
    max_value: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    params: ConsiderationParams,
}

#[cfg(feature = "serde")]
fn default_min() -> f64 {
    0.0
}

#[cfg(feature = "serde")]
fn default_max() -> f64 {
    1.0
}

impl Consideration {
    /// Creates a consideration with a validated domain.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::InvalidDomain`] unless both bounds are finite and
    /// `max_value > min_value`.
    pub fn new(
        name: impl Into<String>,
        curve: impl Into<ResponseCurve>,
        min_value: f64,
        max_value: f64,
    ) -> Result<Self> {
        let name = name.into();
        validate_domain(&name, min_value, max_value)?;
        Ok(Self {
            name,
            curve: curve.into(),
            min_value,
            max_value,
            params: ConsiderationParams::new(),
        })
    }

    /// Identity curve over the unit domain.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            curve: ResponseCurve::default(),
            min_value: 0.0,
            max_value: 1.0,
            params: ConsiderationParams::new(),
        }
    }

    pub fn builder(name: impl Into<String>) -> ConsiderationBuilder {
        ConsiderationBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn curve(&self) -> &ResponseCurve {
        &self.curve
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Extra parameters forwarded to the input source.
    pub fn params(&self) -> &ConsiderationParams {
        &self.params
    }

    /// Re-checks the domain. Needed for values that bypassed the constructors,
    /// such as deserialized configuration.
    pub fn validate(&self) -> Result<()> {
        validate_domain(&self.name, self.min_value, self.max_value)
    }

    /// Scores this consideration in `ctx`.
    ///
    /// # Errors
    ///
    /// Input source failures come back as [`UtilityError::Input`] carrying this
    /// consideration's name.
    pub fn score<C, S>(&self, source: &S, ctx: &C) -> Result<Score>
    where
        C: ?Sized,
        S: InputSource<C> + ?Sized,
    {
        let input_raw_value = source.input_value(self, ctx).map_err(|source| {
            tracing::debug!(
                target: SCORING_TARGET,
                consideration = %self.name,
                error = %source,
                "input source failed"
            );
            UtilityError::Input {
                consideration: self.name.clone(),
                source,
            }
        })?;

        let input_value = normalize(input_raw_value, self.min_value, self.max_value);
        let final_score = self.curve.compute(input_value);

        Ok(Score {
            input_raw_value,
            input_value,
            final_score,
        })
    }
}

fn validate_domain(name: &str, min: f64, max: f64) -> Result<()> {
    if min.is_finite() && max.is_finite() && max > min {
        return Ok(());
    }
    Err(UtilityError::InvalidDomain {
        consideration: name.to_string(),
        min,
        max,
    })
}

/// Step-by-step construction of a [`Consideration`].
#[derive(Clone, Debug)]
#[must_use]
pub struct ConsiderationBuilder {
    name: String,
    curve: ResponseCurve,
    min_value: f64,
    max_value: f64,
    params: ConsiderationParams,
}

impl ConsiderationBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            curve: ResponseCurve::default(),
            min_value: 0.0,
            max_value: 1.0,
            params: ConsiderationParams::new(),
        }
    }

    pub fn curve(mut self, curve: impl Into<ResponseCurve>) -> Self {
        self.curve = curve.into();
        self
    }

    pub fn domain(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value);
        self
    }

    pub fn params(mut self, params: ConsiderationParams) -> Self {
        self.params = params;
        self
    }

    /// # Errors
    ///
    /// Returns [`UtilityError::InvalidDomain`] for an empty, inverted or
    /// non-finite domain.
    pub fn build(self) -> Result<Consideration> {
        validate_domain(&self.name, self.min_value, self.max_value)?;
        Ok(Consideration {
            name: self.name,
            curve: self.curve,
            min_value: self.min_value,
            max_value: self.max_value,
            params: self.params,
        })
    }
}
