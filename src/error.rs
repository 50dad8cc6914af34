use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid date range: start {start} must be before end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Stay has zero nights")]
    EmptyRange,

    #[error("Date {date} is not bookable")]
    DateUnavailable { date: NaiveDate },

    #[error("Unknown cancellation policy: {value}")]
    UnknownPolicy { value: String },

    #[error("Invalid monetary amount: {amount}")]
    InvalidAmount { amount: Decimal },

    #[error("Listing not found: {id}")]
    ListingNotFound { id: String },

    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn invalid_range_display() {
        let err = EngineError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2025-01-20"));
        assert!(msg.contains("2025-01-15"));
    }

    #[test]
    fn date_unavailable_display() {
        let err = EngineError::DateUnavailable {
            date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
        };
        assert!(err.to_string().contains("2025-07-04"));
    }

    #[test]
    fn unknown_policy_display() {
        let err = EngineError::UnknownPolicy {
            value: "lenient".into(),
        };
        assert!(err.to_string().contains("lenient"));
    }

    #[test]
    fn invalid_amount_display() {
        let err = EngineError::InvalidAmount {
            amount: dec!(-50.00),
        };
        assert!(err.to_string().contains("-50.00"));
    }

    #[test]
    fn listing_not_found_display() {
        let err = EngineError::ListingNotFound { id: "42".into() };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{invalid").unwrap_err();
        let err: EngineError = json_err.into();
        assert!(matches!(err, EngineError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }
}
