use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Half-open stay interval `[start, end)`. The end date is the checkout day
/// and is not itself an occupied night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Enforces the `start < end` invariant (zero-night ranges are invalid).
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(EngineError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Number of occupied nights (checkout day excluded).
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Iterates the occupied nights, `start` through the day before `end`.
    pub fn iter_nights(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }

    /// Strict half-open overlap test. Two ranges sharing only a boundary day
    /// (same-day turnover) do not overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Friday and Saturday nights carry the weekend multiplier.
pub fn is_weekend_night(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Whole calendar days from `reference` to `check_in`. Negative once the
/// check-in has passed, zero on the day itself.
pub fn days_until(check_in: NaiveDate, reference: NaiveDate) -> i64 {
    check_in.signed_duration_since(reference).num_days()
}

/// Parses an ISO-8601 `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.into(),
    })
}
