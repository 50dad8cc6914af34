use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::availability::find_conflict;
use super::pricing::{effective_minimum_stay, price_for_stay_with_rate};
use super::refund::calculate_refund;
use crate::config::types::EngineConfig;
use crate::domain::calendar::{DateRange, days_until, parse_date};
use crate::domain::economics::{CancellationPolicy, ListingEconomics};
use crate::domain::pricing::PriceBreakdown;
use crate::domain::refund::RefundResult;
use crate::error::{EngineError, Result};
use crate::ports::listing_store::ListingStore;

/// Availability verdict for a candidate stay. When unavailable, the first
/// conflicting reservation's range is included so the caller can suggest
/// alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityOutcome {
    pub available: bool,
    pub conflicting_range: Option<DateRange>,
}

/// Cancellation input as persisted by the booking workflow. Dates are
/// ISO-8601 `YYYY-MM-DD`; `reference_date` defaults to today when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct RefundRequest {
    pub check_in_date: String,
    pub total_paid: Decimal,
    pub nightly_rate: Option<Decimal>,
    pub policy: String,
    pub reference_date: Option<String>,
}

/// Booking workflow facade over a [`ListingStore`]. All computation is
/// delegated to the pure engine functions; this layer only resolves
/// listings, parses boundary values and applies configuration.
pub struct BookingEngine<S: ListingStore> {
    store: S,
    config: EngineConfig,
}

impl<S: ListingStore> BookingEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Decides whether `[check_in, check_out)` can be booked. The result is
    /// advisory: the persistence layer must re-run the overlap check inside
    /// the booking transaction before inserting the stay.
    pub fn check_availability(
        &self,
        listing_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<AvailabilityOutcome> {
        let range = parse_range(check_in, check_out)?;
        self.economics(listing_id)?;
        let stays = self.store.stays(listing_id);
        let conflict = find_conflict(&stays, &range)?;
        tracing::debug!(
            listing_id,
            %range,
            available = conflict.is_none(),
            "availability checked"
        );
        Ok(AvailabilityOutcome {
            available: conflict.is_none(),
            conflicting_range: conflict.map(|stay| stay.range),
        })
    }

    /// Prices `[check_in, check_out)` for display and, on confirmation,
    /// persistence by the caller.
    pub fn calculate_price(
        &self,
        listing_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<PriceBreakdown> {
        let range = parse_range(check_in, check_out)?;
        let economics = self.economics(listing_id)?;
        let overrides = self.store.date_overrides(listing_id);
        let seasons = self.store.seasonal_rules(listing_id);
        let breakdown = price_for_stay_with_rate(
            &economics,
            &overrides,
            &seasons,
            &range,
            self.config.pricing.service_fee_rate,
        )?;
        tracing::debug!(listing_id, %range, total = %breakdown.total, "stay priced");
        Ok(breakdown)
    }

    /// Effective minimum stay for the range, the strictest rule across its
    /// nights. Callers enforce it before accepting a booking.
    pub fn minimum_stay(&self, listing_id: &str, check_in: &str, check_out: &str) -> Result<u32> {
        let range = parse_range(check_in, check_out)?;
        let economics = self.economics(listing_id)?;
        let overrides = self.store.date_overrides(listing_id);
        Ok(effective_minimum_stay(&economics, &overrides, &range))
    }

    /// Computes the refund for a cancellation using the booking's persisted
    /// total, nightly rate and policy.
    pub fn calculate_refund_for_booking(&self, request: &RefundRequest) -> Result<RefundResult> {
        let policy: CancellationPolicy = request.policy.parse()?;
        let check_in = parse_date(&request.check_in_date)?;
        let reference = match &request.reference_date {
            Some(value) => parse_date(value)?,
            None => Utc::now().date_naive(),
        };
        let days = days_until(check_in, reference);
        let result = calculate_refund(policy, request.total_paid, days, request.nightly_rate)?;
        tracing::debug!(
            %policy,
            days_until_checkin = days,
            refund = %result.refund_amount,
            "refund calculated"
        );
        Ok(result)
    }

    fn economics(&self, listing_id: &str) -> Result<ListingEconomics> {
        self.store
            .economics(listing_id)
            .ok_or_else(|| EngineError::ListingNotFound {
                id: listing_id.to_string(),
            })
    }
}

fn parse_range(check_in: &str, check_out: &str) -> Result<DateRange> {
    let start: NaiveDate = parse_date(check_in)?;
    let end: NaiveDate = parse_date(check_out)?;
    Ok(DateRange::new(start, end))
}
