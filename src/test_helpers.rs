use std::sync::Mutex;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::calendar::DateRange;
use crate::domain::economics::{
    CancellationPolicy, DateOverrideRule, ListingEconomics, SeasonalRule,
};
use crate::domain::stay::ExistingStay;
use crate::ports::listing_store::ListingStore;

type EconomicsFn = Box<dyn Fn(&str) -> Option<ListingEconomics> + Send + Sync>;
type StaysFn = Box<dyn Fn(&str) -> Vec<ExistingStay> + Send + Sync>;
type OverridesFn = Box<dyn Fn(&str) -> Vec<DateOverrideRule> + Send + Sync>;
type SeasonsFn = Box<dyn Fn(&str) -> Vec<SeasonalRule> + Send + Sync>;

pub struct MockListingStore {
    economics_fn: Mutex<EconomicsFn>,
    stays_fn: Mutex<StaysFn>,
    overrides_fn: Mutex<OverridesFn>,
    seasons_fn: Mutex<SeasonsFn>,
}

impl Default for MockListingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockListingStore {
    pub fn new() -> Self {
        Self {
            economics_fn: Mutex::new(Box::new(|_| Some(make_economics()))),
            stays_fn: Mutex::new(Box::new(|_| Vec::new())),
            overrides_fn: Mutex::new(Box::new(|_| Vec::new())),
            seasons_fn: Mutex::new(Box::new(|_| Vec::new())),
        }
    }

    #[must_use]
    pub fn with_economics(
        self,
        f: impl Fn(&str) -> Option<ListingEconomics> + Send + Sync + 'static,
    ) -> Self {
        *self.economics_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_stays(self, f: impl Fn(&str) -> Vec<ExistingStay> + Send + Sync + 'static) -> Self {
        *self.stays_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_overrides(
        self,
        f: impl Fn(&str) -> Vec<DateOverrideRule> + Send + Sync + 'static,
    ) -> Self {
        *self.overrides_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_seasons(
        self,
        f: impl Fn(&str) -> Vec<SeasonalRule> + Send + Sync + 'static,
    ) -> Self {
        *self.seasons_fn.lock().unwrap() = Box::new(f);
        self
    }
}

impl ListingStore for MockListingStore {
    fn economics(&self, listing_id: &str) -> Option<ListingEconomics> {
        (self.economics_fn.lock().unwrap())(listing_id)
    }

    fn stays(&self, listing_id: &str) -> Vec<ExistingStay> {
        (self.stays_fn.lock().unwrap())(listing_id)
    }

    fn date_overrides(&self, listing_id: &str) -> Vec<DateOverrideRule> {
        (self.overrides_fn.lock().unwrap())(listing_id)
    }

    fn seasonal_rules(&self, listing_id: &str) -> Vec<SeasonalRule> {
        (self.seasons_fn.lock().unwrap())(listing_id)
    }
}

// ---------------------------------------------------------------------------
// Fixture builders
// ---------------------------------------------------------------------------

/// Parses a test date literal.
pub fn d(value: &str) -> NaiveDate {
    value.parse().expect("test date literal")
}

/// Builds a range from two test date literals.
pub fn dr(start: &str, end: &str) -> DateRange {
    DateRange::new(d(start), d(end))
}

/// Listing at $150/night, $50 cleaning fee, no weekend bump, flexible.
pub fn make_economics() -> ListingEconomics {
    ListingEconomics {
        base_price: dec!(150),
        cleaning_fee: dec!(50),
        weekend_multiplier: dec!(1),
        minimum_stay_nights: 1,
        cancellation_policy: CancellationPolicy::Flexible,
    }
}

pub fn make_override(
    date: &str,
    price: Option<Decimal>,
    minimum_stay_nights: Option<u32>,
    is_available: bool,
) -> DateOverrideRule {
    DateOverrideRule {
        date: d(date),
        price,
        minimum_stay_nights,
        is_available,
    }
}

pub fn make_season(name: &str, start: &str, end: &str, multiplier: Decimal) -> SeasonalRule {
    SeasonalRule {
        name: name.into(),
        range: dr(start, end),
        multiplier,
    }
}
