use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StayStatus {
    Active,
    Cancelled,
}

/// A persisted reservation. Cancelled stays stay on record but no longer
/// block the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingStay {
    pub range: DateRange,
    pub status: StayStatus,
}

impl ExistingStay {
    pub fn active(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            range: DateRange::new(start, end),
            status: StayStatus::Active,
        }
    }

    pub fn cancelled(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            range: DateRange::new(start, end),
            status: StayStatus::Cancelled,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == StayStatus::Active
    }
}
