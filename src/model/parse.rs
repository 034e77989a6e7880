use crate::error::ScoreError;
use crate::model::score::{EVEN_MARKER, SpeedgolfScore};
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;
use std::sync::OnceLock;

fn score_pattern() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^-?[0-9]{1,3}:[0-5][0-9]$")
            .expect("Invalid regex pattern - this is a programming error")
    })
}

impl SpeedgolfScore {
    /// Parses `[-][mm]m:ss`, giving an invalid score when the text does not match.
    ///
    /// A leading `-` stays on the stroke-minutes text and is also applied to
    /// the seconds, so `"-3:45"` holds `(-3, -45)` and `"-0:20"` holds
    /// `(0, -20)`. `is_under_par` is the authoritative sign for this path.
    #[must_use]
    pub fn from_string(text: &str) -> Self {
        text.parse().unwrap_or_else(|e| {
            log::debug!("string score is invalid: {e}");
            Self::invalid()
        })
    }
}

impl FromStr for SpeedgolfScore {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == EVEN_MARKER {
            return Ok(Self::zero());
        }
        if !score_pattern().is_match(s) {
            return Err(ScoreError::Malformed(s.to_string()));
        }
        let (minutes_text, seconds_text) = s
            .split_once(':')
            .ok_or_else(|| ScoreError::Malformed(s.to_string()))?;
        let stroke_minutes: i32 = minutes_text.parse()?;
        let seconds: i32 = seconds_text.parse()?;
        if s.starts_with('-') {
            Ok(Self::from_parts(stroke_minutes, -seconds, true))
        } else {
            Ok(Self::from_parts(stroke_minutes, seconds, false))
        }
    }
}

impl TryFrom<&str> for SpeedgolfScore {
    type Error = ScoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for SpeedgolfScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpeedgolfScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
