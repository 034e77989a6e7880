use crate::args::Operation;
use crate::model::{INVALID_MARKER, ScoreReport, SpeedgolfScore};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Score(Option<SpeedgolfScore>),
    Comparison(Option<Ordering>),
}

#[derive(Serialize)]
struct ComparisonReport {
    left: ScoreReport,
    right: ScoreReport,
    result: Option<&'static str>,
}

#[must_use]
pub fn evaluate(operation: &Operation) -> Outcome {
    match operation {
        Operation::Show(score) | Operation::Duration(score) => Outcome::Score(Some(*score)),
        Operation::Add(scores) => match scores.split_first() {
            Some((first, rest)) => Outcome::Score(first.add_to_many(rest)),
            None => Outcome::Score(None),
        },
        Operation::VsPar { par, score } => Outcome::Score(par.subtract_from(score)),
        Operation::Compare(left, right) => Outcome::Comparison(left.partial_cmp(right)),
    }
}

const fn ordering_word(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Greater => "greater",
        Ordering::Less => "less",
        Ordering::Equal => "equal",
    }
}

impl Outcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            Self::Score(score) => matches!(score, Some(s) if s.is_valid()),
            Self::Comparison(ordering) => ordering.is_some(),
        }
    }

    #[must_use]
    pub fn render_text(&self) -> String {
        match self {
            Self::Score(score) => score.map_or_else(|| INVALID_MARKER.to_string(), |s| s.to_string()),
            Self::Comparison(ordering) => ordering
                .map_or(INVALID_MARKER, ordering_word)
                .to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serde_json cannot serialize the report.
    pub fn render_json(&self, operation: &Operation) -> serde_json::Result<String> {
        match (self, operation) {
            (Self::Comparison(ordering), Operation::Compare(left, right)) => {
                serde_json::to_string_pretty(&ComparisonReport {
                    left: ScoreReport::from(left),
                    right: ScoreReport::from(right),
                    result: ordering.map(ordering_word),
                })
            }
            (Self::Score(score), _) => serde_json::to_string_pretty(&ScoreReport::from(*score)),
            (Self::Comparison(ordering), _) => {
                serde_json::to_string_pretty(&ordering.map(ordering_word))
            }
        }
    }
}
