use crate::model::score::SpeedgolfScore;
use serde::{Deserialize, Serialize};

/// Flat view of a score for JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreReport {
    pub display: String,
    pub valid: bool,
    pub stroke_minutes: Option<i32>,
    pub seconds: Option<i32>,
    pub under_par: Option<bool>,
}

impl From<&SpeedgolfScore> for ScoreReport {
    fn from(score: &SpeedgolfScore) -> Self {
        Self {
            display: score.to_string(),
            valid: score.is_valid(),
            stroke_minutes: score.stroke_minutes(),
            seconds: score.seconds(),
            under_par: score.is_under_par(),
        }
    }
}

impl From<Option<SpeedgolfScore>> for ScoreReport {
    fn from(score: Option<SpeedgolfScore>) -> Self {
        Self::from(&score.unwrap_or_else(SpeedgolfScore::invalid))
    }
}
