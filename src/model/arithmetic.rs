use crate::model::score::SpeedgolfScore;

const SECONDS_PER_MINUTE: i64 = 60;

impl SpeedgolfScore {
    /// Sum of two scores, carrying whole minutes out of the seconds.
    ///
    /// The carry truncates toward zero, and the leftover seconds keep the
    /// sign of the seconds sum, so `3:58 + 0:05` is `4:03` and
    /// `0:00 + -4:32` stays `-4:32`. The result is rebuilt through
    /// [`SpeedgolfScore::new`].
    #[must_use]
    pub fn add(&self, other: &Self) -> Option<Self> {
        let (lhs_minutes, lhs_seconds) = self.fields()?;
        let (rhs_minutes, rhs_seconds) = other.fields()?;
        let sec_sum = i64::from(lhs_seconds) + i64::from(rhs_seconds);
        let min_sum = i64::from(lhs_minutes) + i64::from(rhs_minutes);
        // (60m + s) / 60 truncates toward zero, the same as flooring a
        // non-negative m + s/60 and ceiling a negative one.
        let stroke_minutes = (min_sum * SECONDS_PER_MINUTE + sec_sum) / SECONDS_PER_MINUTE;
        let seconds = sec_sum % SECONDS_PER_MINUTE;
        Some(Self::new(
            i32::try_from(stroke_minutes).ok()?,
            i32::try_from(seconds).ok()?,
        ))
    }

    /// Folds [`SpeedgolfScore::add`] over `others`, starting from `self`.
    ///
    /// Returns `None` without summing anything if `self` or any element is invalid.
    #[must_use]
    pub fn add_to_many(&self, others: &[Self]) -> Option<Self> {
        if !self.is_valid() || others.iter().any(|s| !s.is_valid()) {
            return None;
        }
        let start = self.fields().map(|(m, s)| Self::new(m, s))?;
        others.iter().try_fold(start, |sum, next| sum.add(next))
    }

    /// Computes `minuend - self`.
    ///
    /// Both operands must be valid and at or over par; subtraction only ever
    /// compares a non-negative par against a non-negative score or duration.
    /// Seconds that come out negative while minutes do not borrow a minute,
    /// and the reverse case adds one back.
    #[must_use]
    pub fn subtract_from(&self, minuend: &Self) -> Option<Self> {
        if self.is_under_par()? || minuend.is_under_par()? {
            return None;
        }
        let (sub_minutes, sub_seconds) = self.fields()?;
        let (min_minutes, min_seconds) = minuend.fields()?;
        let sec_diff = min_seconds.checked_sub(sub_seconds)?;
        let min_diff = min_minutes.checked_sub(sub_minutes)?;

        if min_diff >= 0 && sec_diff >= 0 {
            log::trace!("subtract {self} from {minuend}: both fields ahead");
            return Some(Self::new(min_diff, sec_diff));
        }
        if min_diff <= 0 && sec_diff <= 0 {
            log::trace!("subtract {self} from {minuend}: both fields behind");
            return Some(Self::new(min_diff, sec_diff));
        }
        if min_diff >= 0 {
            log::trace!("subtract {self} from {minuend}: borrow a minute");
            let borrowed = min_seconds.checked_add(60)?.checked_sub(sub_seconds)?;
            return Some(Self::new(min_diff, borrowed));
        }
        log::trace!("subtract {self} from {minuend}: carry a minute");
        Some(Self::new(min_diff + 1, sec_diff))
    }

    /// Stroke count added to an elapsed time: 70 strokes in `64:10` is `134:10`.
    #[must_use]
    pub fn from_strokes_and_time(strokes: u32, time: &Self) -> Option<Self> {
        if time.is_under_par()? {
            return None;
        }
        let strokes = i32::try_from(strokes).ok()?;
        time.add(&Self::new(strokes, 0))
    }
}
