//! Built-in zone filters.
//!
//! Filters run after the closed-zone rule, so they can narrow a query but
//! never bring a closed zone back.

use std::fmt::Debug;

use crate::models::{SafeZone, ZoneStatus, ZoneType};

/// A predicate applied to each candidate zone during resolution.
pub trait ZoneFilter: Send + Sync + Debug {
    /// Filter name (e.g., "exclude-full").
    fn name(&self) -> &'static str;

    /// Whether `zone`, at `distance_km` from the origin, stays a candidate.
    fn accept(&self, zone: &SafeZone, distance_km: f64) -> bool;
}

/// Drops zones at capacity (`status == Full`).
#[derive(Debug, Clone, Copy)]
pub struct ExcludeFull;

impl ZoneFilter for ExcludeFull {
    fn name(&self) -> &'static str {
        "exclude-full"
    }

    fn accept(&self, zone: &SafeZone, _distance_km: f64) -> bool {
        zone.status != ZoneStatus::Full
    }
}

/// Keeps zones offering a facility.
#[derive(Debug, Clone)]
pub struct RequireFacility(pub String);

impl ZoneFilter for RequireFacility {
    fn name(&self) -> &'static str {
        "require-facility"
    }

    fn accept(&self, zone: &SafeZone, _distance_km: f64) -> bool {
        zone.has_facility(&self.0)
    }
}

/// Keeps zones of one type.
#[derive(Debug, Clone, Copy)]
pub struct OfType(pub ZoneType);

impl ZoneFilter for OfType {
    fn name(&self) -> &'static str {
        "of-type"
    }

    fn accept(&self, zone: &SafeZone, _distance_km: f64) -> bool {
        zone.zone_type == self.0
    }
}

/// Keeps zones within a radius (inclusive, km).
#[derive(Debug, Clone, Copy)]
pub struct WithinRadius(pub f64);

impl ZoneFilter for WithinRadius {
    fn name(&self) -> &'static str {
        "within-radius"
    }

    fn accept(&self, _zone: &SafeZone, distance_km: f64) -> bool {
        distance_km <= self.0
    }
}
