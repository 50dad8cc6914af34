use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::calendar::{DateRange, is_weekend_night};
use crate::domain::economics::{DateOverrideRule, ListingEconomics, SeasonalRule};
use crate::domain::pricing::{DatePrice, PriceBreakdown, RateSource, round_money};
use crate::error::{EngineError, Result};

/// Platform fee rate applied to accommodation plus cleaning.
pub const SERVICE_FEE_RATE: Decimal = dec!(0.14);

/// Resolves the nightly price for a single date.
///
/// Precedence: explicit date override, then the seasonal rule with the
/// highest multiplier covering the date (the earliest rule wins a tie),
/// then the base price. The weekend multiplier stacks multiplicatively on
/// whatever seasonal price applied; an explicit override price is final and
/// takes no multipliers. The result is rounded to two decimals half-up.
pub fn price_for_date(
    economics: &ListingEconomics,
    overrides: &[DateOverrideRule],
    seasons: &[SeasonalRule],
    date: NaiveDate,
) -> Result<DatePrice> {
    let override_rule = overrides.iter().find(|o| o.date == date);

    if let Some(rule) = override_rule
        && !rule.is_available
    {
        return Err(EngineError::DateUnavailable { date });
    }

    let minimum_stay_nights = override_rule
        .and_then(|o| o.minimum_stay_nights)
        .unwrap_or(economics.minimum_stay_nights);

    if let Some(price) = override_rule.and_then(|o| o.price) {
        return Ok(DatePrice {
            date,
            price: round_money(price),
            minimum_stay_nights,
            source: RateSource::Override,
            weekend_multiplier_applied: false,
        });
    }

    let season = seasons
        .iter()
        .filter(|s| s.range.contains(date))
        .fold(None::<&SeasonalRule>, |best, s| match best {
            Some(current) if s.multiplier > current.multiplier => Some(s),
            None => Some(s),
            _ => best,
        });

    let mut price = match season {
        Some(s) => economics.base_price * s.multiplier,
        None => economics.base_price,
    };

    let weekend = is_weekend_night(date) && economics.weekend_multiplier > Decimal::ONE;
    if weekend {
        price *= economics.weekend_multiplier;
    }

    Ok(DatePrice {
        date,
        price: round_money(price),
        minimum_stay_nights,
        source: match season {
            Some(s) => RateSource::Seasonal {
                name: s.name.clone(),
            },
            None => RateSource::Base,
        },
        weekend_multiplier_applied: weekend,
    })
}

/// Effective minimum stay for a range: the strictest rule across its
/// nights (override minimum where present, else the listing default).
pub fn effective_minimum_stay(
    economics: &ListingEconomics,
    overrides: &[DateOverrideRule],
    range: &DateRange,
) -> u32 {
    range
        .iter_nights()
        .map(|date| {
            overrides
                .iter()
                .find(|o| o.date == date)
                .and_then(|o| o.minimum_stay_nights)
                .unwrap_or(economics.minimum_stay_nights)
        })
        .max()
        .unwrap_or(economics.minimum_stay_nights)
}

/// Prices a whole stay at the standard service fee rate.
pub fn price_for_stay(
    economics: &ListingEconomics,
    overrides: &[DateOverrideRule],
    seasons: &[SeasonalRule],
    range: &DateRange,
) -> Result<PriceBreakdown> {
    price_for_stay_with_rate(economics, overrides, seasons, range, SERVICE_FEE_RATE)
}

/// Prices a whole stay. Per-night prices are rounded before summation; the
/// service fee applies to accommodation plus cleaning.
pub fn price_for_stay_with_rate(
    economics: &ListingEconomics,
    overrides: &[DateOverrideRule],
    seasons: &[SeasonalRule],
    range: &DateRange,
    service_fee_rate: Decimal,
) -> Result<PriceBreakdown> {
    if range.start == range.end {
        return Err(EngineError::EmptyRange);
    }
    range.validate()?;

    let schedule = range
        .iter_nights()
        .map(|date| price_for_date(economics, overrides, seasons, date))
        .collect::<Result<Vec<DatePrice>>>()?;

    let accommodation_total: Decimal = schedule.iter().map(|night| night.price).sum();
    let cleaning_fee = economics.cleaning_fee;
    let service_fee = round_money((accommodation_total + cleaning_fee) * service_fee_rate);
    let total = round_money(accommodation_total + cleaning_fee + service_fee);

    Ok(PriceBreakdown {
        nightly_rate: economics.base_price,
        nights: schedule.len(),
        accommodation_total,
        cleaning_fee,
        service_fee,
        total,
        schedule,
    })
}
