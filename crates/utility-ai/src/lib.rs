//! Infinite Axis Utility scoring.
//!
//! An agent picks among candidate behaviors by scoring each one from several
//! independent situational inputs. This crate is the scoring pipeline only:
//!
//! - **Response curves** shape a normalized input into a `[0, 1]` score.
//! - **Considerations** pull one raw input, normalize it over a declared domain
//!   and run it through a curve.
//! - **Behaviors** multiply their considerations' scores, seeded at a weight,
//!   with compensation so that many factors do not dilute the result.
//!
//! Scoring is synchronous and stateless. Where raw values come from is up to
//! the caller's [`InputSource`]; which behavior wins and what it does is up to
//! whatever consumes the [`BehaviorScore`]s.
//!
//! # Architecture
//!
//! - [`math`]: clamping and range normalization
//! - [`curve`]: [`ResponseCurve`] and its six shapes, plus the data-driven
//!   [`CurveRegistry`]
//! - [`Consideration`], [`Behavior`], [`BehaviorSet`]
//! - [`Score`], [`BehaviorScore`]: results
//! - [`UtilityError`]: configuration and input source failures
//!
//! # Example
//!
//! ```
//! use utility_ai::{Behavior, Consideration, LinearCurve, StaticInputs};
//!
//! let attack: Behavior = Behavior::new("attack")
//!     .with_consideration(Consideration::new("aggression", LinearCurve::default(), 0.0, 1.0)?)?
//!     .with_consideration(Consideration::new("health", LinearCurve::default(), 0.0, 100.0)?)?;
//!
//! let inputs = StaticInputs::new()
//!     .with("aggression", 0.8)
//!     .with("health", 50.0);
//!
//! let score = attack.score(&inputs, &())?;
//! assert!(score.final_score() > 0.8 * 0.5);
//! # Ok::<(), utility_ai::UtilityError>(())
//! ```
//!
//! # Logging
//!
//! Scoring emits `tracing` events on the `utility_ai::scoring` target: one
//! `TRACE` event per consideration and one `DEBUG` event per behavior. No
//! subscriber is installed by the library.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for curves, parameters, considerations,
//!   behaviors and scores.

pub mod behavior;
pub mod consideration;
pub mod curve;
pub mod error;
pub mod input;
pub mod math;
pub mod params;
pub mod score;
pub mod set;

pub use behavior::Behavior;
pub use consideration::{Consideration, ConsiderationBuilder};
pub use curve::{
    CurveConstructor, CurveKind, CurveRegistry, LinearCurve, LogisticCurve, LogitCurve,
    NormalCurve, PolynomialCurve, ResponseCurve, SineCurve,
};
pub use error::{ErrorKind, Result, UtilityError};
pub use input::{InputError, InputSource, MissingInput, StaticInputs};
pub use params::{ConsiderationParams, CurveParams, ParamMap, ParamValue};
pub use score::{BehaviorScore, Score};
pub use set::BehaviorSet;

/// `tracing` target of all scoring events.
pub const SCORING_TARGET: &str = "utility_ai::scoring";
