//! Configurable resolver.
//!
//! Wraps [`nearest`](super::nearest) with a [`ResolverConfig`] and a chain
//! of [`ZoneFilter`]s. All filters must accept a zone for it to be ranked.

use std::sync::Arc;

use log::warn;

use super::filters::{ExcludeFull, OfType, RequireFacility, WithinRadius, ZoneFilter};
use super::rank_by;
use crate::config::ResolverConfig;
use crate::error::{ConfigError, GeoError};
use crate::models::{Coordinate, RankedSafeZone, SafeZone, ZoneType};

/// A reusable nearest-zone query.
///
/// # Example
/// ```
/// use u_safezone::models::{Coordinate, SafeZone, ZoneType};
/// use u_safezone::resolver::NearestResolver;
///
/// let zones = vec![
///     SafeZone::new("shelter", Coordinate::new(12.97, 77.59)),
///     SafeZone::new("camp", Coordinate::new(12.96, 77.61))
///         .with_type(ZoneType::Medical)
///         .with_facility("medical"),
/// ];
/// let resolver = NearestResolver::new()
///     .with_count(1)
///     .require_facility("medical");
///
/// let ranked = resolver.resolve(&zones, Coordinate::new(12.9716, 77.5946));
/// assert_eq!(ranked[0].id, "camp");
/// ```
#[derive(Clone, Default)]
pub struct NearestResolver {
    config: ResolverConfig,
    filters: Vec<Arc<dyn ZoneFilter>>,
}

impl NearestResolver {
    /// Creates a resolver returning the 3 nearest open or full zones.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver from loaded configuration.
    ///
    /// Fails with [`ConfigError::Invalid`] if the radius is negative or not
    /// finite.
    pub fn from_config(config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            filters: Vec::new(),
        })
    }

    /// Sets the number of zones to return.
    pub fn with_count(mut self, count: usize) -> Self {
        self.config.default_count = count;
        self
    }

    /// Drops zones whose status is `Full`.
    pub fn exclude_full(mut self, exclude: bool) -> Self {
        self.config.exclude_full = exclude;
        self
    }

    /// Drops zones farther than `radius_km`.
    ///
    /// A negative or non-finite radius is ignored and the previous radius
    /// kept.
    pub fn within_km(mut self, radius_km: f64) -> Self {
        if !radius_km.is_finite() || radius_km < 0.0 {
            warn!("Ignoring invalid search radius {radius_km} km");
            return self;
        }
        self.config.max_distance_km = Some(radius_km);
        self
    }

    /// Keeps only zones offering `facility`.
    pub fn require_facility(self, facility: impl Into<String>) -> Self {
        self.with_filter(RequireFacility(facility.into()))
    }

    /// Keeps only zones of `zone_type`.
    pub fn with_zone_type(self, zone_type: ZoneType) -> Self {
        self.with_filter(OfType(zone_type))
    }

    /// Adds a custom filter.
    pub fn with_filter<F: ZoneFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Ranks `zones` around `origin`.
    ///
    /// Closed zones are always excluded; configured filters apply on top.
    pub fn resolve(&self, zones: &[SafeZone], origin: Coordinate) -> Vec<RankedSafeZone> {
        self.resolve_n(zones, origin, self.config.default_count)
    }

    /// Like [`resolve`](Self::resolve), but rejects an invalid origin.
    pub fn resolve_checked(
        &self,
        zones: &[SafeZone],
        origin: Coordinate,
    ) -> Result<Vec<RankedSafeZone>, GeoError> {
        origin.validate()?;
        Ok(self.resolve(zones, origin))
    }

    /// The single nearest zone passing all filters.
    pub fn closest(&self, zones: &[SafeZone], origin: Coordinate) -> Option<RankedSafeZone> {
        self.resolve_n(zones, origin, 1).into_iter().next()
    }

    fn resolve_n(&self, zones: &[SafeZone], origin: Coordinate, count: usize) -> Vec<RankedSafeZone> {
        let exclude_full = self.config.exclude_full.then_some(ExcludeFull);
        let radius = self.config.max_distance_km.map(WithinRadius);

        rank_by(zones, origin, count, |zone, d| {
            exclude_full.map_or(true, |f| f.accept(zone, d))
                && radius.map_or(true, |f| f.accept(zone, d))
                && self.filters.iter().all(|f| f.accept(zone, d))
        })
    }
}

impl std::fmt::Debug for NearestResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NearestResolver")
            .field("config", &self.config)
            .field(
                "filters",
                &self.filters.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
