//! Ranked query result.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::SafeZone;

/// A safe zone paired with its distance from a query origin.
///
/// Owns a copy of the zone; the distance is only meaningful for the query
/// that produced it and is never written back to the source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSafeZone {
    /// Copy of the ranked zone.
    #[serde(flatten)]
    pub zone: SafeZone,
    /// Great-circle distance from the query origin (km).
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

impl RankedSafeZone {
    /// Pairs `zone` with its distance from the query origin.
    pub fn new(zone: SafeZone, distance_km: f64) -> Self {
        Self { zone, distance_km }
    }

    /// Discards the distance and returns the zone.
    pub fn into_zone(self) -> SafeZone {
        self.zone
    }
}

impl Deref for RankedSafeZone {
    type Target = SafeZone;

    fn deref(&self) -> &SafeZone {
        &self.zone
    }
}
