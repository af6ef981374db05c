use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CURRENCY: &str = "CHF";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomCatalogEntry {
    pub max_guests: i64,
    pub nightly_rate: f64,
}

/// Room types keyed by their lower-case identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCatalog(BTreeMap<String, RoomCatalogEntry>);

impl RoomCatalog {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_room(mut self, room_type: &str, max_guests: i64, nightly_rate: f64) -> Self {
        self.0.insert(
            room_type.to_string(),
            RoomCatalogEntry {
                max_guests,
                nightly_rate,
            },
        );
        self
    }

    pub fn get(&self, room_type: &str) -> Option<&RoomCatalogEntry> {
        self.0.get(room_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RoomCatalogEntry)> {
        self.0.iter()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::new()
            .with_room("standard", 2, 110.0)
            .with_room("family", 4, 165.0)
            .with_room("suite", 2, 220.0)
    }
}

/// Season identifier to price multiplier (always >= 1.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonTable(BTreeMap<String, f64>);

impl SeasonTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_season(mut self, season: &str, multiplier: f64) -> Self {
        self.0.insert(season.to_string(), multiplier);
        self
    }

    pub fn multiplier(&self, season: &str) -> Option<f64> {
        self.0.get(season).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.0.iter()
    }
}

impl Default for SeasonTable {
    fn default() -> Self {
        Self::new().with_season("low", 1.0).with_season("high", 1.25)
    }
}

/// Static pricing configuration shared read-only by every request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    pub rooms: RoomCatalog,
    pub seasons: SeasonTable,
}
