use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Monetary values carry two decimal places.
pub const MONEY_DP: u32 = 2;

/// Rounds a monetary value to two decimals, half-up.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Which pricing rule produced a night's rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    Override,
    Seasonal { name: String },
    Base,
}

/// Resolved price for a single night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePrice {
    pub date: NaiveDate,
    pub price: Decimal,
    pub minimum_stay_nights: u32,
    pub source: RateSource,
    pub weekend_multiplier_applied: bool,
}

/// Cost breakdown for a stay. `nightly_rate` is the listing's nominal base
/// price for display; the per-night detail lives in `schedule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub nightly_rate: Decimal,
    pub nights: usize,
    pub accommodation_total: Decimal,
    pub cleaning_fee: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
    pub schedule: Vec<DatePrice>,
}

impl std::fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} night{} at ${}/night base rate",
            self.nights,
            if self.nights == 1 { "" } else { "s" },
            self.nightly_rate
        )?;
        writeln!(f, "Accommodation: ${}", self.accommodation_total)?;
        writeln!(f, "Cleaning fee: ${}", self.cleaning_fee)?;
        writeln!(f, "Service fee: ${}", self.service_fee)?;
        write!(f, "Total: ${}", self.total)
    }
}
