//! Data-driven curve construction.
//!
//! Configuration loaders describe curves as a kind key (`"logistic"`) plus a
//! map of named parameters. This module turns that description into a
//! [`ResponseCurve`] without committing the core to any file format.
//!
//! Parameters left out take the variant's defaults. Unknown parameter names
//! and non-numeric values are rejected so typos in designer data surface as
//! configuration errors instead of silently using a default.

use std::collections::HashMap;
use std::str::FromStr;

use super::{
    CurveKind, LinearCurve, LogisticCurve, LogitCurve, NormalCurve, PolynomialCurve,
    ResponseCurve, SineCurve,
};
use crate::error::{Result, UtilityError};
use crate::params::{CurveParams, ParamValue};

/// Builds a curve from named parameters.
pub type CurveConstructor = fn(&CurveParams) -> Result<ResponseCurve>;

const LINEAR_PARAMS: &[&str] = &["slope", "x_offset", "y_offset"];
const POLYNOMIAL_PARAMS: &[&str] = &["exponent", "y_scale", "x_offset", "y_offset"];
const LOGISTIC_PARAMS: &[&str] = &[
    "slope",
    "crossover",
    "x_scale",
    "x_offset",
    "y_scale",
    "y_offset",
];
const LOGIT_PARAMS: &[&str] = &["y_scale", "x_offset", "y_offset"];
const NORMAL_PARAMS: &[&str] = &[
    "mean",
    "std_dev",
    "y_scale",
    "normalize",
    "x_offset",
    "y_offset",
];
const SINE_PARAMS: &[&str] = &["amplitude", "frequency_scale", "x_offset", "y_offset"];

/// Typed access to a parameter map on behalf of one curve kind.
struct ParamReader<'a> {
    kind: CurveKind,
    params: &'a CurveParams,
}

impl<'a> ParamReader<'a> {
    fn new(kind: CurveKind, params: &'a CurveParams, allowed: &[&str]) -> Result<Self> {
        if let Some(unknown) = params.names().find(|name| !allowed.contains(name)) {
            return Err(UtilityError::InvalidCurveParameter {
                kind,
                parameter: unknown.to_string(),
                reason: "unknown parameter",
            });
        }
        Ok(Self { kind, params })
    }

    fn has(&self, name: &str) -> bool {
        self.params.contains(name)
    }

    fn float(&self, name: &str, default: f64) -> Result<f64> {
        match self.params.get(name) {
            None => Ok(default),
            Some(value) => value.as_f64().ok_or_else(|| self.invalid(name, "expected a number")),
        }
    }

    fn flag(&self, name: &str, default: bool) -> Result<bool> {
        match self.params.get(name) {
            None => Ok(default),
            Some(ParamValue::Bool(value)) => Ok(*value),
            Some(_) => Err(self.invalid(name, "expected a boolean")),
        }
    }

    fn invalid(&self, name: &str, reason: &'static str) -> UtilityError {
        UtilityError::InvalidCurveParameter {
            kind: self.kind,
            parameter: name.to_string(),
            reason,
        }
    }
}

fn build_linear(params: &CurveParams) -> Result<ResponseCurve> {
    let r = ParamReader::new(CurveKind::Linear, params, LINEAR_PARAMS)?;
    let default = LinearCurve::default();
    Ok(LinearCurve::new(r.float("slope", default.slope)?)
        .with_x_offset(r.float("x_offset", default.x_offset)?)
        .with_y_offset(r.float("y_offset", default.y_offset)?)
        .into())
}

fn build_polynomial(params: &CurveParams) -> Result<ResponseCurve> {
    let r = ParamReader::new(CurveKind::Polynomial, params, POLYNOMIAL_PARAMS)?;
    let default = PolynomialCurve::default();
    Ok(PolynomialCurve::new(r.float("exponent", default.exponent)?)
        .with_y_scale(r.float("y_scale", default.y_scale)?)
        .with_x_offset(r.float("x_offset", default.x_offset)?)
        .with_y_offset(r.float("y_offset", default.y_offset)?)
        .into())
}

/// Logistic curves come in two forms: `slope`/`crossover` (converted at
/// construction) or raw `x_scale`/`x_offset`. The forms cannot be mixed.
fn build_logistic(params: &CurveParams) -> Result<ResponseCurve> {
    let r = ParamReader::new(CurveKind::Logistic, params, LOGISTIC_PARAMS)?;

    let slope_form = r.has("slope") || r.has("crossover");
    let raw_param = ["x_scale", "x_offset"].into_iter().find(|name| r.has(name));

    let curve = match (slope_form, raw_param) {
        (true, Some(name)) => {
            return Err(r.invalid(name, "cannot be combined with slope/crossover"));
        }
        (false, Some(_)) => LogisticCurve::new(r.float("x_scale", 1.0)?, r.float("x_offset", 0.0)?),
        (_, None) => LogisticCurve::from_slope_crossover(
            r.float("slope", LogisticCurve::DEFAULT_SLOPE)?,
            r.float("crossover", LogisticCurve::DEFAULT_CROSSOVER)?,
        ),
    };

    Ok(curve
        .with_y_scale(r.float("y_scale", 1.0)?)
        .with_y_offset(r.float("y_offset", 0.0)?)
        .into())
}

fn build_logit(params: &CurveParams) -> Result<ResponseCurve> {
    let r = ParamReader::new(CurveKind::Logit, params, LOGIT_PARAMS)?;
    let default = LogitCurve::default();
    Ok(LogitCurve::new(r.float("y_scale", default.y_scale)?)
        .with_x_offset(r.float("x_offset", default.x_offset)?)
        .with_y_offset(r.float("y_offset", default.y_offset)?)
        .into())
}

fn build_normal(params: &CurveParams) -> Result<ResponseCurve> {
    let r = ParamReader::new(CurveKind::Normal, params, NORMAL_PARAMS)?;
    let default = NormalCurve::default();
    Ok(NormalCurve::new(
        r.float("mean", default.mean)?,
        r.float("std_dev", default.std_dev)?,
    )
    .with_y_scale(r.float("y_scale", default.y_scale)?)
    .with_normalize(r.flag("normalize", default.normalize)?)
    .with_x_offset(r.float("x_offset", default.x_offset)?)
    .with_y_offset(r.float("y_offset", default.y_offset)?)
    .into())
}

fn build_sine(params: &CurveParams) -> Result<ResponseCurve> {
    let r = ParamReader::new(CurveKind::Sine, params, SINE_PARAMS)?;
    let default = SineCurve::default();
    Ok(SineCurve::new(
        r.float("amplitude", default.amplitude)?,
        r.float("frequency_scale", default.frequency_scale)?,
    )
    .with_x_offset(r.float("x_offset", default.x_offset)?)
    .with_y_offset(r.float("y_offset", default.y_offset)?)
    .into())
}

impl CurveKind {
    /// Constructor used by the factory for this kind.
    pub fn constructor(&self) -> CurveConstructor {
        match self {
            CurveKind::Linear => build_linear,
            CurveKind::Polynomial => build_polynomial,
            CurveKind::Logistic => build_logistic,
            CurveKind::Logit => build_logit,
            CurveKind::Normal => build_normal,
            CurveKind::Sine => build_sine,
        }
    }

    /// Names of the parameters this kind accepts.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            CurveKind::Linear => LINEAR_PARAMS,
            CurveKind::Polynomial => POLYNOMIAL_PARAMS,
            CurveKind::Logistic => LOGISTIC_PARAMS,
            CurveKind::Logit => LOGIT_PARAMS,
            CurveKind::Normal => NORMAL_PARAMS,
            CurveKind::Sine => SINE_PARAMS,
        }
    }
}

impl ResponseCurve {
    /// Builds a curve of the given kind from named parameters.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::InvalidCurveParameter`] for unknown names,
    /// values of the wrong type, or mixed logistic forms.
    pub fn from_params(kind: CurveKind, params: &CurveParams) -> Result<Self> {
        (kind.constructor())(params)
    }

    /// Builds a curve from a kind key such as `"logistic"` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::UnknownCurveKind`] if the key names no curve, or
    /// any error of [`from_params`](Self::from_params).
    pub fn from_kind_str(key: &str, params: &CurveParams) -> Result<Self> {
        let kind =
            CurveKind::from_str(key).map_err(|_| UtilityError::UnknownCurveKind(key.to_string()))?;
        Self::from_params(kind, params)
    }
}

/// Mapping from curve key to constructor.
///
/// [`CurveRegistry::builtin`] knows the six standard keys
/// (`linear|polynomial|logistic|logit|normal|sine`). Applications can register
/// extra keys for presets or aliases; keys are matched case-insensitively.
#[derive(Clone, Debug)]
pub struct CurveRegistry {
    constructors: HashMap<String, CurveConstructor>,
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CurveRegistry {
    /// Creates a registry with no keys.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Creates a registry with the six standard curve keys.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for kind in CurveKind::all() {
            registry.register(kind.to_string(), kind.constructor());
        }
        registry
    }

    /// Registers a constructor, returning the one it replaced.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        constructor: CurveConstructor,
    ) -> Option<CurveConstructor> {
        let key = key.into().to_ascii_lowercase();
        self.constructors.insert(key, constructor)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.constructors.contains_key(&key.to_ascii_lowercase())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Builds the curve registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::UnknownCurveKind`] for unregistered keys, or the
    /// constructor's own error.
    pub fn create(&self, key: &str, params: &CurveParams) -> Result<ResponseCurve> {
        let constructor = self
            .constructors
            .get(&key.to_ascii_lowercase())
            .ok_or_else(|| UtilityError::UnknownCurveKind(key.to_string()))?;
        constructor(params)
    }
}
