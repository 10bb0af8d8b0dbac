//! Nearest safe zone resolution.
//!
//! Ranks safe zones by great-circle distance from a query origin. Closed
//! zones are never returned.
//!
//! # Usage
//!
//! ```
//! use u_safezone::models::{Coordinate, SafeZone, ZoneStatus};
//! use u_safezone::resolver::nearest;
//!
//! let zones = vec![
//!     SafeZone::new("A", Coordinate::new(12.9387, 77.6142)),
//!     SafeZone::new("B", Coordinate::new(12.9613, 77.6142)),
//!     SafeZone::new("C", Coordinate::new(12.9698, 77.7499)).with_status(ZoneStatus::Closed),
//! ];
//! let ranked = nearest(&zones, Coordinate::new(12.9716, 77.5946), 2);
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked.iter().all(|r| r.id != "C"));
//! ```
//!
//! For filters beyond the closed-zone rule (facility, type, radius) use
//! [`NearestResolver`].

mod engine;
pub mod filters;

pub use engine::NearestResolver;
pub use filters::ZoneFilter;

use log::trace;

use crate::geo::distance_km;
use crate::models::{Coordinate, RankedSafeZone, SafeZone};

pub use crate::config::DEFAULT_COUNT;

/// Returns up to `count` non-closed zones ordered by distance from `origin`.
///
/// # Algorithm
/// 1. Drop closed zones.
/// 2. Compute the Haversine distance to each remaining zone.
/// 3. Stable sort ascending; equidistant zones keep their input order.
/// 4. Take the first `count`.
///
/// Never fails. `count == 0` or an empty slice yields an empty result, and
/// a `count` larger than the number of open zones returns all of them.
///
/// # Complexity
/// O(n log n) for n zones; only the returned zones are cloned.
pub fn nearest(zones: &[SafeZone], origin: Coordinate, count: usize) -> Vec<RankedSafeZone> {
    rank_by(zones, origin, count, |_, _| true)
}

/// Shared ranking pass. `keep` sees each non-closed zone with its distance.
pub(crate) fn rank_by<F>(
    zones: &[SafeZone],
    origin: Coordinate,
    count: usize,
    mut keep: F,
) -> Vec<RankedSafeZone>
where
    F: FnMut(&SafeZone, f64) -> bool,
{
    if count == 0 || zones.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, f64)> = zones
        .iter()
        .enumerate()
        .filter(|(_, zone)| !zone.is_closed())
        .map(|(i, zone)| (i, distance_km(origin, zone.location)))
        .filter(|&(i, d)| keep(&zones[i], d))
        .collect();

    // `sort_by` is stable: ties stay in input order.
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    candidates.truncate(count);

    trace!(
        "Ranked {} of {} zones around ({}, {})",
        candidates.len(),
        zones.len(),
        origin.latitude,
        origin.longitude
    );

    candidates
        .into_iter()
        .map(|(i, d)| RankedSafeZone::new(zones[i].clone(), d))
        .collect()
}
