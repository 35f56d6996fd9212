//! Behaviors: weighted, compensated products of considerations.
//!
//! A behavior is one candidate action. Its utility is
//!
//! ```text
//! weight × Π adjust(score_i)
//! adjust(v) = v + v·c − v²·c,   c = 1 − 1/N
//! ```
//!
//! where `N` is the number of considerations. Multiplying many factors below
//! one drags the product toward zero even when every factor is high; the
//! adjustment lifts mid-range factors more as `N` grows and leaves `0` and `1`
//! fixed. A single consideration gets `c = 0`, so its curved score is used as
//! is.
//!
//! Scoring reads the behavior only. Considerations are appended during setup.

use crate::consideration::Consideration;
use crate::error::{Result, UtilityError};
use crate::input::InputSource;
use crate::score::BehaviorScore;
use crate::SCORING_TARGET;

/// A candidate action scored from its considerations.
///
/// `A` is whatever the caller uses to refer to the action this behavior would
/// trigger. The core never inspects it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Behavior<A = ()> {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    considerations: Vec<Consideration>,
    #[cfg_attr(feature = "serde", serde(default = "default_weight"))]
    weight: f64,
    action: Option<A>,
}

#[cfg(feature = "serde")]
fn default_weight() -> f64 {
    1.0
}

impl<A> Behavior<A> {
    /// Creates a behavior with weight `1.0`, no considerations and no action.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            considerations: Vec::new(),
            weight: 1.0,
            action: None,
        }
    }

    /// Appends a consideration.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::DuplicateConsideration`] when a consideration
    /// with the same name is already present.
    pub fn add_consideration(&mut self, consideration: Consideration) -> Result<&mut Self> {
        if self.consideration(consideration.name()).is_some() {
            return Err(UtilityError::DuplicateConsideration {
                behavior: self.name.clone(),
                consideration: consideration.name().to_string(),
            });
        }
        self.considerations.push(consideration);
        Ok(self)
    }

    /// Appends a consideration (builder pattern).
    pub fn with_consideration(mut self, consideration: Consideration) -> Result<Self> {
        self.add_consideration(consideration)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    #[must_use]
    pub fn with_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Attaches an action, returning the previous one.
    pub fn set_action(&mut self, action: A) -> Option<A> {
        self.action.replace(action)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn considerations(&self) -> &[Consideration] {
        &self.considerations
    }

    pub fn consideration(&self, name: &str) -> Option<&Consideration> {
        self.considerations.iter().find(|c| c.name() == name)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// The compensation factor `1 - 1/N`.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::EmptyBehavior`] when there are no considerations.
    pub fn compensation_factor(&self) -> Result<f64> {
        if self.considerations.is_empty() {
            return Err(UtilityError::EmptyBehavior {
                behavior: self.name.clone(),
            });
        }
        Ok(1.0 - 1.0 / self.considerations.len() as f64)
    }

    /// Checks what the builder methods enforce, for behaviors that were
    /// deserialized or otherwise assembled without them.
    pub fn validate(&self) -> Result<()> {
        self.compensation_factor()?;
        for (index, consideration) in self.considerations.iter().enumerate() {
            consideration.validate()?;
            let name = consideration.name();
            if self.considerations[..index].iter().any(|c| c.name() == name) {
                return Err(UtilityError::DuplicateConsideration {
                    behavior: self.name.clone(),
                    consideration: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Scores every consideration in order and combines them.
    ///
    /// The returned [`BehaviorScore`] holds each consideration's compensated
    /// score under its name.
    ///
    /// # Errors
    ///
    /// - [`UtilityError::EmptyBehavior`] if the behavior has no considerations.
    /// - [`UtilityError::Input`] if the input source fails; scoring stops at
    ///   the failing consideration.
    pub fn score<C, S>(&self, source: &S, ctx: &C) -> Result<BehaviorScore>
    where
        C: ?Sized,
        S: InputSource<C> + ?Sized,
    {
        let compensation = self.compensation_factor()?;
        let mut result = BehaviorScore::new(self.weight, self.considerations.len());

        for consideration in &self.considerations {
            let score = consideration.score(source, ctx)?;
            let adjusted = score.compensated(compensation);

            tracing::trace!(
                target: SCORING_TARGET,
                behavior = %self.name,
                consideration = consideration.name(),
                raw = score.input_raw_value,
                normalized = score.input_value,
                curved = score.final_score,
                compensated = adjusted.final_score,
                "consideration scored"
            );

            result.push(consideration.name(), adjusted);
        }

        tracing::debug!(
            target: SCORING_TARGET,
            behavior = %self.name,
            weight = self.weight,
            considerations = self.considerations.len(),
            score = result.final_score(),
            "behavior scored"
        );

        Ok(result)
    }
}
