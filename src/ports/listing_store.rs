use crate::domain::economics::{DateOverrideRule, ListingEconomics, SeasonalRule};
use crate::domain::stay::ExistingStay;

/// Data-access boundary. The engine reads host-authored pricing data and
/// committed stays through this port and never writes; availability results
/// must be re-validated transactionally by the persistence layer at commit
/// time, since a second booking can race between check and insert.
pub trait ListingStore: Send + Sync {
    /// Pricing record for a listing, `None` when the listing is unknown.
    fn economics(&self, listing_id: &str) -> Option<ListingEconomics>;

    /// Every persisted stay for a listing, cancelled ones included.
    fn stays(&self, listing_id: &str) -> Vec<ExistingStay>;

    fn date_overrides(&self, listing_id: &str) -> Vec<DateOverrideRule>;

    fn seasonal_rules(&self, listing_id: &str) -> Vec<SeasonalRule>;
}
