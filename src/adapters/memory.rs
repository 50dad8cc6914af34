use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::economics::{DateOverrideRule, ListingEconomics, SeasonalRule};
use crate::domain::stay::ExistingStay;
use crate::ports::listing_store::ListingStore;

#[derive(Debug, Clone)]
struct ListingRecord {
    economics: ListingEconomics,
    stays: Vec<ExistingStay>,
    overrides: Vec<DateOverrideRule>,
    seasons: Vec<SeasonalRule>,
}

/// In-memory `ListingStore` for tests, fixtures and demos. Not a durable
/// store: it cannot provide the transactional re-check a production
/// persistence layer must run at booking commit.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    listings: RwLock<HashMap<String, ListingRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_listing(&self, listing_id: &str, economics: ListingEconomics) {
        if let Ok(mut listings) = self.listings.write() {
            listings.insert(
                listing_id.to_string(),
                ListingRecord {
                    economics,
                    stays: Vec::new(),
                    overrides: Vec::new(),
                    seasons: Vec::new(),
                },
            );
        } else {
            tracing::error!("Listing store lock poisoned on insert('{listing_id}')");
        }
    }

    pub fn add_stay(&self, listing_id: &str, stay: ExistingStay) {
        self.with_record(listing_id, |record| record.stays.push(stay));
    }

    pub fn add_override(&self, listing_id: &str, rule: DateOverrideRule) {
        self.with_record(listing_id, |record| record.overrides.push(rule));
    }

    pub fn add_seasonal_rule(&self, listing_id: &str, rule: SeasonalRule) {
        self.with_record(listing_id, |record| record.seasons.push(rule));
    }

    fn with_record(&self, listing_id: &str, apply: impl FnOnce(&mut ListingRecord)) {
        if let Ok(mut listings) = self.listings.write() {
            match listings.get_mut(listing_id) {
                Some(record) => apply(record),
                None => tracing::warn!("Ignoring write for unknown listing '{listing_id}'"),
            }
        } else {
            tracing::error!("Listing store lock poisoned on write('{listing_id}')");
        }
    }

    fn read<T>(&self, listing_id: &str, extract: impl FnOnce(&ListingRecord) -> T) -> Option<T> {
        match self.listings.read() {
            Ok(listings) => listings.get(listing_id).map(extract),
            Err(_) => {
                tracing::error!("Listing store lock poisoned on read('{listing_id}')");
                None
            }
        }
    }
}

impl ListingStore for InMemoryStore {
    fn economics(&self, listing_id: &str) -> Option<ListingEconomics> {
        self.read(listing_id, |record| record.economics.clone())
    }

    fn stays(&self, listing_id: &str) -> Vec<ExistingStay> {
        self.read(listing_id, |record| record.stays.clone())
            .unwrap_or_default()
    }

    fn date_overrides(&self, listing_id: &str) -> Vec<DateOverrideRule> {
        self.read(listing_id, |record| record.overrides.clone())
            .unwrap_or_default()
    }

    fn seasonal_rules(&self, listing_id: &str) -> Vec<SeasonalRule> {
        self.read(listing_id, |record| record.seasons.clone())
            .unwrap_or_default()
    }
}
