use std::cmp::Ordering;
use std::fmt;

pub const INVALID_MARKER: &str = "Invalid Speedgolf Score";
pub const EVEN_MARKER: &str = "Even";

/// A speedgolf score: stroke-minutes plus remainder seconds, written `[-][m]m:ss`.
///
/// The same type holds absolute scores and time pars (which may be under par)
/// and durations between two instants (never negative). Validity is fixed at
/// construction; every query on an invalid score answers `None`.
///
/// Scores are compared field by field on `(stroke_minutes, seconds)`. That is
/// only a true time ordering when both operands are normalized, i.e. the sign
/// is carried by both fields and `seconds` lies in `0..60` by magnitude.
#[derive(Debug, Clone, Copy)]
pub struct SpeedgolfScore {
    stroke_minutes: i32,
    seconds: i32,
    valid: bool,
    under_par: bool,
}

impl SpeedgolfScore {
    /// Builds a score from its two fields.
    ///
    /// A negative value in either field marks the whole score negative: each
    /// field takes its sign from the *other* argument, so `(-3, 45)` and
    /// `(3, -45)` both become `(-3, -45)`. Seconds are not normalized here;
    /// only [`SpeedgolfScore::add`] carries seconds into minutes.
    #[must_use]
    pub fn new(stroke_minutes: i32, seconds: i32) -> Self {
        let signed_minutes = if seconds >= 0 {
            stroke_minutes
        } else {
            negative_magnitude(stroke_minutes)
        };
        let signed_seconds = if stroke_minutes >= 0 {
            seconds
        } else {
            negative_magnitude(seconds)
        };
        Self {
            stroke_minutes: signed_minutes,
            seconds: signed_seconds,
            valid: true,
            under_par: signed_minutes < 0 || signed_seconds < 0,
        }
    }

    /// A score that failed construction. Every operation on it yields `None`.
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            stroke_minutes: 0,
            seconds: 0,
            valid: false,
            under_par: false,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self {
            stroke_minutes: 0,
            seconds: 0,
            valid: true,
            under_par: false,
        }
    }

    /// Raw constructor for paths that derive fields and sign on their own.
    pub(crate) const fn from_parts(stroke_minutes: i32, seconds: i32, under_par: bool) -> Self {
        Self {
            stroke_minutes,
            seconds,
            valid: true,
            under_par,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub const fn is_under_par(&self) -> Option<bool> {
        if self.valid { Some(self.under_par) } else { None }
    }

    #[must_use]
    pub const fn stroke_minutes(&self) -> Option<i32> {
        if self.valid {
            Some(self.stroke_minutes)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn seconds(&self) -> Option<i32> {
        if self.valid { Some(self.seconds) } else { None }
    }

    /// Both fields at once, or `None` when invalid.
    #[must_use]
    pub const fn fields(&self) -> Option<(i32, i32)> {
        if self.valid {
            Some((self.stroke_minutes, self.seconds))
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_greater_than(&self, other: &Self) -> Option<bool> {
        self.partial_cmp(other).map(Ordering::is_gt)
    }

    #[must_use]
    pub fn is_less_than(&self, other: &Self) -> Option<bool> {
        self.partial_cmp(other).map(Ordering::is_lt)
    }

    #[must_use]
    pub fn is_equal_to(&self, other: &Self) -> Option<bool> {
        self.partial_cmp(other).map(Ordering::is_eq)
    }
}

// -|n| without the overflow `abs` has at i32::MIN.
const fn negative_magnitude(n: i32) -> i32 {
    if n <= 0 { n } else { -n }
}

impl Default for SpeedgolfScore {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for SpeedgolfScore {
    /// Field equality between two valid scores; an invalid score equals nothing.
    fn eq(&self, other: &Self) -> bool {
        self.valid
            && other.valid
            && self.stroke_minutes == other.stroke_minutes
            && self.seconds == other.seconds
    }
}

impl PartialOrd for SpeedgolfScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let lhs = self.fields()?;
        let rhs = other.fields()?;
        Some(lhs.cmp(&rhs))
    }
}

impl fmt::Display for SpeedgolfScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return f.write_str(INVALID_MARKER);
        }
        if self.stroke_minutes == 0 && self.seconds == 0 {
            return f.write_str(EVEN_MARKER);
        }
        if self.stroke_minutes >= 0 && self.seconds >= 0 {
            return write!(f, "{}:{:02}", self.stroke_minutes, self.seconds);
        }
        write!(
            f,
            "-{}:{:02}",
            self.stroke_minutes.unsigned_abs(),
            self.seconds.unsigned_abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_propagates_sign_across_fields() {
        let a = SpeedgolfScore::new(-3, 45);
        assert_eq!(a.fields(), Some((-3, -45)));
        assert_eq!(a.is_under_par(), Some(true));

        let b = SpeedgolfScore::new(3, -45);
        assert_eq!(b.fields(), Some((-3, -45)));
        assert_eq!(b.is_under_par(), Some(true));

        let c = SpeedgolfScore::new(0, -20);
        assert_eq!(c.fields(), Some((0, -20)));
        assert_eq!(c.is_under_par(), Some(true));

        let d = SpeedgolfScore::new(-2, -8);
        assert_eq!(d.fields(), Some((-2, -8)));
    }

    #[test]
    fn test_new_keeps_unnormalized_seconds() {
        let s = SpeedgolfScore::new(3, 75);
        assert_eq!(s.fields(), Some((3, 75)));
        assert_eq!(s.is_under_par(), Some(false));
    }

    #[test]
    fn test_new_extreme_values_are_valid() {
        for (m, s) in [(i32::MIN, 0), (0, i32::MIN), (i32::MAX, i32::MIN), (i32::MIN, i32::MAX)] {
            assert!(SpeedgolfScore::new(m, s).is_valid(), "({m}, {s})");
        }
        assert_eq!(SpeedgolfScore::new(i32::MAX, -1).stroke_minutes(), Some(-i32::MAX));
    }

    #[test]
    fn test_invalid_answers_none() {
        let bad = SpeedgolfScore::invalid();
        assert!(!bad.is_valid());
        assert_eq!(bad.is_under_par(), None);
        assert_eq!(bad.stroke_minutes(), None);
        assert_eq!(bad.seconds(), None);
        assert_eq!(bad.is_equal_to(&bad), None);
        assert_eq!(bad.is_greater_than(&SpeedgolfScore::zero()), None);
        assert_eq!(SpeedgolfScore::zero().is_less_than(&bad), None);
        assert_ne!(bad, bad);
    }

    #[test]
    fn test_display() {
        assert_eq!(SpeedgolfScore::new(3, 4).to_string(), "3:04");
        assert_eq!(SpeedgolfScore::new(134, 59).to_string(), "134:59");
        assert_eq!(SpeedgolfScore::new(-1, 7).to_string(), "-1:07");
        assert_eq!(SpeedgolfScore::new(0, -20).to_string(), "-0:20");
        assert_eq!(SpeedgolfScore::new(0, 0).to_string(), "Even");
        assert_eq!(SpeedgolfScore::invalid().to_string(), "Invalid Speedgolf Score");
    }

    #[test]
    fn test_lexicographic_order() {
        let a = SpeedgolfScore::new(7, 2);
        let b = SpeedgolfScore::new(7, 30);
        let c = SpeedgolfScore::new(8, 0);
        assert_eq!(a.is_less_than(&b), Some(true));
        assert_eq!(b.is_less_than(&c), Some(true));
        assert_eq!(c.is_greater_than(&a), Some(true));
        assert_eq!(a.is_equal_to(&SpeedgolfScore::new(7, 2)), Some(true));
        assert!(SpeedgolfScore::new(-1, -7) < SpeedgolfScore::new(0, -20));
    }
}
