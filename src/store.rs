//! In-memory safe zone store.
//!
//! Holds the session's zone records in insertion order. Queries either
//! borrow the records or, through [`SafeZoneStore::snapshot`], hand out an
//! owned copy that stays stable while the store is updated.

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{ResolverConfig, SEARCH_LIMIT};
use crate::error::StoreError;
use crate::models::{Coordinate, RankedSafeZone, SafeZone, ZoneStatus};
use crate::resolver;
use crate::validation::{validate_zones, ValidationError};

/// Insertion-ordered collection of safe zones keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct SafeZoneStore {
    zones: Vec<SafeZone>,
}

impl SafeZoneStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from validated records.
    pub fn from_zones(zones: Vec<SafeZone>) -> Result<Self, Vec<ValidationError>> {
        validate_zones(&zones)?;
        for zone in zones.iter().filter(|z| z.current_occupancy > z.capacity) {
            warn!(
                "Safe zone '{}' is over capacity ({}/{})",
                zone.id, zone.current_occupancy, zone.capacity
            );
        }
        debug!("Loaded {} safe zones", zones.len());
        Ok(Self { zones })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// All records, in insertion order.
    pub fn zones(&self) -> &[SafeZone] {
        &self.zones
    }

    /// Owned copy of all records.
    pub fn snapshot(&self) -> Vec<SafeZone> {
        self.zones.clone()
    }

    /// Finds a zone by ID.
    pub fn get(&self, id: &str) -> Option<&SafeZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut SafeZone, StoreError> {
        self.zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or_else(|| StoreError::ZoneNotFound { id: id.to_string() })
    }

    /// Replaces the record with the same ID in place, or appends it.
    ///
    /// Returns the previous record if one was replaced. A record with an
    /// empty ID or an invalid location is rejected and the store is left
    /// unchanged.
    pub fn upsert(&mut self, zone: SafeZone) -> Result<Option<SafeZone>, Vec<ValidationError>> {
        validate_zones(std::slice::from_ref(&zone))?;
        match self.zones.iter_mut().find(|z| z.id == zone.id) {
            Some(existing) => Ok(Some(std::mem::replace(existing, zone))),
            None => {
                debug!("Safe zone '{}' added", zone.id);
                self.zones.push(zone);
                Ok(None)
            }
        }
    }

    /// Updates the operating status of a zone.
    pub fn set_status(&mut self, id: &str, status: ZoneStatus) -> Result<(), StoreError> {
        let zone = self.get_mut(id)?;
        debug!("Safe zone '{}' status {:?} -> {:?}", id, zone.status, status);
        zone.status = status;
        Ok(())
    }

    /// Updates the current occupancy of a zone.
    pub fn set_occupancy(&mut self, id: &str, occupancy: u32) -> Result<(), StoreError> {
        let zone = self.get_mut(id)?;
        zone.current_occupancy = occupancy;
        if occupancy > zone.capacity {
            warn!(
                "Safe zone '{}' is over capacity ({}/{})",
                id, occupancy, zone.capacity
            );
        }
        Ok(())
    }

    /// Case-insensitive substring search over name, address, and facilities.
    ///
    /// A blank query matches nothing. Hits keep store order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&SafeZone> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.zones
            .iter()
            .filter(|z| {
                z.name.to_lowercase().contains(&query)
                    || z
                        .address
                        .as_deref()
                        .is_some_and(|a| a.to_lowercase().contains(&query))
                    || z.facilities.iter().any(|f| f.to_lowercase().contains(&query))
            })
            .take(limit)
            .collect()
    }

    /// [`search`](Self::search) with the default hit limit.
    pub fn search_default(&self, query: &str) -> Vec<&SafeZone> {
        self.search(query, SEARCH_LIMIT)
    }

    /// [`search`](Self::search) limited to `config.search_limit` hits.
    pub fn search_with(&self, query: &str, config: &ResolverConfig) -> Vec<&SafeZone> {
        self.search(query, config.search_limit)
    }

    /// Nearest non-closed zones to `origin`.
    pub fn nearest(&self, origin: Coordinate, count: usize) -> Vec<RankedSafeZone> {
        resolver::nearest(&self.zones, origin, count)
    }

    /// Reorders the records randomly.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.zones.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store() -> SafeZoneStore {
        SafeZoneStore::from_zones(vec![
            SafeZone::new("SZ1", Coordinate::new(12.9387, 77.6142))
                .with_name("Koramangala Indoor Stadium")
                .with_address("80 Feet Road, Koramangala")
                .with_facility("food")
                .with_facility("water"),
            SafeZone::new("SZ2", Coordinate::new(12.9613, 77.6142))
                .with_name("St. John's Medical Camp")
                .with_address("MG Road, near Trinity Metro")
                .with_facility("medical"),
            SafeZone::new("SZ3", Coordinate::new(12.9698, 77.7499))
                .with_name("Whitefield Community Hall")
                .with_status(ZoneStatus::Closed),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_zones_validates() {
        let errors = SafeZoneStore::from_zones(vec![
            SafeZone::new("SZ1", Coordinate::new(0.0, 0.0)),
            SafeZone::new("SZ1", Coordinate::new(0.0, 0.0)),
        ])
        .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_get() {
        let s = store();
        assert_eq!(s.len(), 3);
        assert_eq!(s.get("SZ2").map(|z| z.name.as_str()), Some("St. John's Medical Camp"));
        assert!(s.get("missing").is_none());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut s = store();
        let prev = s
            .upsert(SafeZone::new("SZ2", Coordinate::new(1.0, 1.0)).with_name("Moved"))
            .unwrap();
        assert_eq!(prev.map(|z| z.name), Some("St. John's Medical Camp".to_string()));
        assert_eq!(s.zones()[1].name, "Moved");
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_upsert_appends() {
        let mut s = store();
        assert!(s
            .upsert(SafeZone::new("SZ4", Coordinate::new(1.0, 1.0)))
            .unwrap()
            .is_none());
        assert_eq!(s.len(), 4);
        assert_eq!(s.zones()[3].id, "SZ4");
    }

    #[test]
    fn test_upsert_rejects_invalid_records() {
        let mut s = store();
        let before = s.snapshot();

        let errors = s
            .upsert(SafeZone::new("", Coordinate::new(1.0, 1.0)))
            .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyId);

        let errors = s
            .upsert(SafeZone::new("SZ2", Coordinate::new(95.0, 1.0)))
            .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCoordinate);

        assert!(s
            .upsert(SafeZone::new("SZ9", Coordinate::new(f64::NAN, 1.0)))
            .is_err());

        assert_eq!(s.zones(), before.as_slice());
    }

    #[test]
    fn test_set_status_and_occupancy() {
        let mut s = store();
        s.set_status("SZ1", ZoneStatus::Full).unwrap();
        s.set_occupancy("SZ1", 42).unwrap();
        let z = s.get("SZ1").unwrap();
        assert_eq!(z.status, ZoneStatus::Full);
        assert_eq!(z.current_occupancy, 42);

        assert_eq!(
            s.set_status("nope", ZoneStatus::Open),
            Err(StoreError::ZoneNotFound { id: "nope".into() })
        );
        assert!(s.set_occupancy("nope", 1).is_err());
    }

    #[test]
    fn test_search() {
        let s = store();
        let ids = |hits: Vec<&SafeZone>| hits.into_iter().map(|z| z.id.clone()).collect::<Vec<_>>();

        assert_eq!(ids(s.search_default("MEDICAL")), vec!["SZ2"]);
        assert_eq!(ids(s.search_default("koramangala")), vec!["SZ1"]);
        assert_eq!(ids(s.search_default("water")), vec!["SZ1"]);
        assert_eq!(ids(s.search_default("a")), vec!["SZ1", "SZ2", "SZ3"]);
        assert_eq!(ids(s.search("a", 2)), vec!["SZ1", "SZ2"]);
        assert!(s.search_default("   ").is_empty());
    }

    #[test]
    fn test_search_with_configured_limit() {
        let s = SafeZoneStore::from_zones(crate::fixtures::seed_zones()).unwrap();
        let config = ResolverConfig::from_toml_str("[resolver]\nsearch_limit = 1").unwrap();

        assert_eq!(s.search_default("water").len(), 4);
        let hits = s.search_with("water", &config);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "safezone-1");
        assert_eq!(s.search_with("water", &ResolverConfig::default()).len(), 4);
    }

    #[test]
    fn test_nearest_skips_closed() {
        let ranked = store().nearest(Coordinate::new(12.9698, 77.7499), 3);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.id != "SZ3"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut s = store();
        let snap = s.snapshot();
        s.set_status("SZ1", ZoneStatus::Closed).unwrap();
        assert_eq!(snap[0].status, ZoneStatus::Open);
    }

    #[test]
    fn test_shuffle_is_deterministic_for_seed() {
        let mut a = store();
        let mut b = store();
        a.shuffle(&mut StdRng::seed_from_u64(7));
        b.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.zones(), b.zones());
        assert_eq!(a.len(), 3);
    }
}
