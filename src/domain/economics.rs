use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar::DateRange;
use crate::error::EngineError;

/// Refund schedule a listing is sold under. Closed set: adding a policy is a
/// compile-time change, every refund branch must handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancellationPolicy {
    Flexible,
    Moderate,
    Strict,
}

impl FromStr for CancellationPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flexible" => Ok(Self::Flexible),
            "moderate" => Ok(Self::Moderate),
            "strict" => Ok(Self::Strict),
            _ => Err(EngineError::UnknownPolicy { value: s.into() }),
        }
    }
}

impl std::fmt::Display for CancellationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flexible => write!(f, "flexible"),
            Self::Moderate => write!(f, "moderate"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Host-authored pricing inputs for a listing. Read-only to the engine;
/// mutated only through the host's pricing-management flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingEconomics {
    /// Nominal nightly price, positive.
    pub base_price: Decimal,
    /// Non-negative, charged once per stay.
    pub cleaning_fee: Decimal,
    /// Applied to Friday/Saturday nights when greater than 1.
    pub weekend_multiplier: Decimal,
    pub minimum_stay_nights: u32,
    pub cancellation_policy: CancellationPolicy,
}

/// Single-date rule. When present it beats every other pricing rule for
/// its date; an unavailable flag makes the date unbookable outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateOverrideRule {
    pub date: NaiveDate,
    pub price: Option<Decimal>,
    pub minimum_stay_nights: Option<u32>,
    pub is_available: bool,
}

/// Date-span multiplier on the base price. Where several rules cover the
/// same date, the highest multiplier wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalRule {
    pub name: String,
    pub range: DateRange,
    pub multiplier: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses_canonical_names() {
        assert_eq!(
            "flexible".parse::<CancellationPolicy>().unwrap(),
            CancellationPolicy::Flexible
        );
        assert_eq!(
            "moderate".parse::<CancellationPolicy>().unwrap(),
            CancellationPolicy::Moderate
        );
        assert_eq!(
            "strict".parse::<CancellationPolicy>().unwrap(),
            CancellationPolicy::Strict
        );
    }

    #[test]
    fn policy_parse_is_case_insensitive() {
        assert_eq!(
            " Strict ".parse::<CancellationPolicy>().unwrap(),
            CancellationPolicy::Strict
        );
        assert_eq!(
            "FLEXIBLE".parse::<CancellationPolicy>().unwrap(),
            CancellationPolicy::Flexible
        );
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = "lenient".parse::<CancellationPolicy>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownPolicy { value } if value == "lenient"));
    }

    #[test]
    fn policy_display_round_trips() {
        for policy in [
            CancellationPolicy::Flexible,
            CancellationPolicy::Moderate,
            CancellationPolicy::Strict,
        ] {
            let parsed: CancellationPolicy = policy.to_string().parse().unwrap();
            assert_eq!(parsed, policy);
        }
    }

    #[test]
    fn policy_serializes_lowercase() {
        let json = serde_json::to_string(&CancellationPolicy::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
    }
}
