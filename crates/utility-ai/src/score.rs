//! Score records produced by a scoring pass.

/// Result of scoring one consideration.
///
/// `final_score` is the curve output when produced by
/// [`Consideration::score`](crate::Consideration::score), and the compensated
/// value once a [`Behavior`](crate::Behavior) has folded it into its total.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Raw value as returned by the input source.
    pub input_raw_value: f64,
    /// Raw value clamped and rescaled into `[0, 1]`.
    pub input_value: f64,
    pub final_score: f64,
}

impl Score {
    /// Applies the multi-factor compensation `v + v*c - v*v*c`.
    ///
    /// With `c = 1 - 1/N` this lifts each factor so that multiplying `N` of
    /// them does not drag the product toward zero.
    #[must_use]
    pub fn compensated(self, compensation_factor: f64) -> Self {
        let v = self.final_score;
        Self {
            final_score: v + v * compensation_factor - v * v * compensation_factor,
            ..self
        }
    }
}

/// Result of scoring a whole behavior.
///
/// Entries keep the order in which the behavior's considerations were
/// evaluated.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorScore {
    initial_weight: f64,
    scores: Vec<(String, Score)>,
    final_score: f64,
}

impl BehaviorScore {
    pub(crate) fn new(initial_weight: f64, capacity: usize) -> Self {
        Self {
            initial_weight,
            scores: Vec::with_capacity(capacity),
            final_score: initial_weight,
        }
    }

    /// Records a compensated score and multiplies it into the total.
    pub(crate) fn push(&mut self, name: &str, score: Score) {
        self.final_score *= score.final_score;
        self.scores.push((name.to_string(), score));
    }

    /// The behavior weight the product started from.
    pub fn initial_weight(&self) -> f64 {
        self.initial_weight
    }

    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    /// Score of the consideration called `name`.
    pub fn score_for(&self, name: &str) -> Option<&Score> {
        self.scores
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, score)| score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Score)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(final_score: f64) -> Score {
        Score {
            input_raw_value: final_score,
            input_value: final_score,
            final_score,
        }
    }

    #[test]
    fn test_compensation_is_identity_for_single_factor() {
        assert_eq!(score(0.8).compensated(0.0), score(0.8));
    }

    #[test]
    fn test_compensation_keeps_inputs() {
        let adjusted = Score {
            input_raw_value: 40.0,
            input_value: 0.4,
            final_score: 0.5,
        }
        .compensated(0.5);

        assert_eq!(adjusted.input_raw_value, 40.0);
        assert_eq!(adjusted.input_value, 0.4);
        assert_eq!(adjusted.final_score, 0.625);
    }

    #[test]
    fn test_compensation_fixes_endpoints() {
        assert_eq!(score(0.0).compensated(0.75).final_score, 0.0);
        assert_eq!(score(1.0).compensated(0.75).final_score, 1.0);
    }

    #[test]
    fn test_behavior_score_accumulates_in_order() {
        let mut result = BehaviorScore::new(2.0, 2);
        result.push("b", score(0.5));
        result.push("a", score(0.25));

        assert_eq!(result.initial_weight(), 2.0);
        assert_eq!(result.final_score(), 0.25);
        assert_eq!(result.len(), 2);

        let names: Vec<_> = result.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(result.score_for("a").map(|s| s.final_score), Some(0.25));
        assert!(result.score_for("c").is_none());
    }
}
