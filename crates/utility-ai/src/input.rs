//! The input source contract.
//!
//! Considerations do not know where their raw values come from. Each scoring
//! call receives an [`InputSource`] and an opaque context `C` (a snapshot of
//! world and agent state chosen by the caller). The source is asked for one raw
//! value per consideration; the consideration itself is the descriptor, so the
//! source can dispatch on its name and extra parameters.

use std::collections::HashMap;

use thiserror::Error;

use crate::consideration::Consideration;

/// Error produced by an input source.
pub type InputError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Supplies raw values for considerations.
///
/// Implementations should be safe for concurrent reads if behaviors are
/// scored from several threads at once; the core adds no locking.
pub trait InputSource<C: ?Sized> {
    /// Returns the raw value for `consideration` in `ctx`.
    ///
    /// # Errors
    ///
    /// Any failure is wrapped into
    /// [`UtilityError::Input`](crate::UtilityError::Input) with the
    /// consideration name and propagated unchanged to the caller.
    fn input_value(&self, consideration: &Consideration, ctx: &C) -> Result<f64, InputError>;
}

impl<C, F> InputSource<C> for F
where
    C: ?Sized,
    F: Fn(&Consideration, &C) -> Result<f64, InputError>,
{
    #[inline]
    fn input_value(&self, consideration: &Consideration, ctx: &C) -> Result<f64, InputError> {
        self(consideration, ctx)
    }
}

/// No value is registered for the requested consideration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no input value registered for '{name}'")]
pub struct MissingInput {
    pub name: String,
}

/// Fixed table of raw values keyed by consideration name.
///
/// Ignores the context entirely. Handy for tests, replays and tooling that
/// previews a behavior's score for hand-picked inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticInputs {
    values: HashMap<String, f64>,
}

impl StaticInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for StaticInputs {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        let mut inputs = StaticInputs::new();
        for (name, value) in iter {
            inputs.set(name, value);
        }
        inputs
    }
}

impl<C: ?Sized> InputSource<C> for StaticInputs {
    fn input_value(&self, consideration: &Consideration, _ctx: &C) -> Result<f64, InputError> {
        self.get(consideration.name()).ok_or_else(|| {
            Box::new(MissingInput {
                name: consideration.name().to_string(),
            }) as InputError
        })
    }
}
