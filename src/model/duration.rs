use crate::error::ScoreError;
use crate::model::score::SpeedgolfScore;
use chrono::{DateTime, TimeZone};

const MILLIS_PER_SECOND: i64 = 1000;
const SECONDS_PER_MINUTE: i64 = 60;

impl SpeedgolfScore {
    /// Elapsed time between two instants as a duration score.
    ///
    /// Partial seconds are dropped. The result is never under par.
    ///
    /// # Errors
    ///
    /// Returns `UnorderedInstants` unless `start` is strictly before `finish`,
    /// and `OutOfRange` if the stroke-minutes do not fit in an `i32`.
    pub fn try_from_instants<Tz1, Tz2>(
        start: &DateTime<Tz1>,
        finish: &DateTime<Tz2>,
    ) -> Result<Self, ScoreError>
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        if start >= finish {
            return Err(ScoreError::UnorderedInstants);
        }
        let elapsed = finish.clone().signed_duration_since(start.clone());
        let total_seconds = elapsed.num_milliseconds() / MILLIS_PER_SECOND;
        let stroke_minutes = i32::try_from(total_seconds / SECONDS_PER_MINUTE)
            .map_err(|_| ScoreError::OutOfRange)?;
        let seconds =
            i32::try_from(total_seconds % SECONDS_PER_MINUTE).map_err(|_| ScoreError::OutOfRange)?;
        Ok(Self::from_parts(stroke_minutes, seconds, false))
    }

    /// Lenient form of [`SpeedgolfScore::try_from_instants`]: out-of-order
    /// instants give an invalid score rather than an error.
    #[must_use]
    pub fn from_instants<Tz1, Tz2>(start: &DateTime<Tz1>, finish: &DateTime<Tz2>) -> Self
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        Self::try_from_instants(start, finish).unwrap_or_else(|e| {
            log::debug!("duration score is invalid: {e}");
            Self::invalid()
        })
    }

    /// # Errors
    ///
    /// Returns `UnparseableInstant` if either string is not an RFC 3339
    /// timestamp, otherwise the errors of [`SpeedgolfScore::try_from_instants`].
    pub fn try_from_rfc3339_instants(start: &str, finish: &str) -> Result<Self, ScoreError> {
        let start = DateTime::parse_from_rfc3339(start.trim())?;
        let finish = DateTime::parse_from_rfc3339(finish.trim())?;
        Self::try_from_instants(&start, &finish)
    }

    #[must_use]
    pub fn from_rfc3339_instants(start: &str, finish: &str) -> Self {
        Self::try_from_rfc3339_instants(start, finish).unwrap_or_else(|e| {
            log::debug!("duration score from {start:?} to {finish:?} is invalid: {e}");
            Self::invalid()
        })
    }
}
