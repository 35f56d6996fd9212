//! Error taxonomy for curve construction, configuration and scoring.
//!
//! Errors fall into two classes (see [`ErrorKind`]):
//!
//! - **Configuration**: the behavior, consideration or curve was set up in a way
//!   that makes scoring undefined. Raised immediately, never replaced by a
//!   default score.
//! - **InputSource**: the external input source could not produce a raw value.
//!   Propagated untouched; retry and fallback belong to the caller.
//!
//! Numeric edge cases inside curve formulas are not errors. Curves sanitize
//! them to the nearest bound instead.

use thiserror::Error;

use crate::curve::CurveKind;
use crate::input::InputError;

pub type Result<T> = std::result::Result<T, UtilityError>;

/// Class of a [`UtilityError`], used to pick a handling strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid setup. Fix the configuration, do not retry.
    Configuration,

    /// The input source failed. May succeed later with a different context.
    InputSource,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::InputSource => "input_source",
        }
    }
}

#[derive(Debug, Error)]
pub enum UtilityError {
    #[error("behavior '{behavior}' has no considerations to score")]
    EmptyBehavior { behavior: String },

    #[error("consideration '{consideration}' has an invalid domain [{min}, {max}]: max must be greater than min")]
    InvalidDomain {
        consideration: String,
        min: f64,
        max: f64,
    },

    #[error("behavior '{behavior}' already has a consideration named '{consideration}'")]
    DuplicateConsideration {
        behavior: String,
        consideration: String,
    },

    #[error("unknown response curve kind '{0}'")]
    UnknownCurveKind(String),

    #[error("invalid parameter '{parameter}' for {kind} curve: {reason}")]
    InvalidCurveParameter {
        kind: CurveKind,
        parameter: String,
        reason: &'static str,
    },

    #[error("input source failed for consideration '{consideration}'")]
    Input {
        consideration: String,
        #[source]
        source: InputError,
    },
}

impl UtilityError {
    /// Returns the taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        use UtilityError::*;
        match self {
            EmptyBehavior { .. }
            | InvalidDomain { .. }
            | DuplicateConsideration { .. }
            | UnknownCurveKind(_)
            | InvalidCurveParameter { .. } => ErrorKind::Configuration,
            Input { .. } => ErrorKind::InputSource,
        }
    }

    /// Returns true for setup mistakes (as opposed to input source failures).
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Stable identifier for this error variant.
    pub fn error_code(&self) -> &'static str {
        use UtilityError::*;
        match self {
            EmptyBehavior { .. } => "UTILITY_EMPTY_BEHAVIOR",
            InvalidDomain { .. } => "UTILITY_INVALID_DOMAIN",
            DuplicateConsideration { .. } => "UTILITY_DUPLICATE_CONSIDERATION",
            UnknownCurveKind(_) => "UTILITY_UNKNOWN_CURVE_KIND",
            InvalidCurveParameter { .. } => "UTILITY_INVALID_CURVE_PARAMETER",
            Input { .. } => "UTILITY_INPUT_SOURCE",
        }
    }
}
