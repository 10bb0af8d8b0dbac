//! Aggregate indicators over a safe zone collection.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Open / Full / Closed | Zone counts by status |
//! | Total Capacity | Sum of capacity over all zones |
//! | Total Occupancy | Sum of current occupancy over all zones |
//! | Available Capacity | Sum of remaining places over open zones |
//! | Utilization | Total occupancy / total capacity |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{SafeZone, ZoneStatus, ZoneType};

/// Safe zone indicators for an overview panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    /// Number of zones.
    pub total: usize,
    /// Zones accepting people.
    pub open: usize,
    /// Zones at capacity.
    pub full: usize,
    /// Zones not operating.
    pub closed: usize,
    /// Sum of capacity over all zones.
    pub total_capacity: u64,
    /// Sum of current occupancy over all zones.
    pub total_occupancy: u64,
    /// Remaining places across open zones.
    pub available_capacity: u64,
    /// Occupancy over capacity (0.0 when no capacity). May exceed 1.0.
    pub utilization: f64,
    /// Zone count per type.
    pub by_type: BTreeMap<ZoneType, usize>,
}

impl ZoneSummary {
    /// Computes indicators for `zones`.
    pub fn calculate(zones: &[SafeZone]) -> Self {
        let mut summary = Self {
            total: zones.len(),
            open: 0,
            full: 0,
            closed: 0,
            total_capacity: 0,
            total_occupancy: 0,
            available_capacity: 0,
            utilization: 0.0,
            by_type: BTreeMap::new(),
        };

        for zone in zones {
            match zone.status {
                ZoneStatus::Open => {
                    summary.open += 1;
                    summary.available_capacity += u64::from(zone.available_capacity());
                }
                ZoneStatus::Full => summary.full += 1,
                ZoneStatus::Closed => summary.closed += 1,
            }
            summary.total_capacity += u64::from(zone.capacity);
            summary.total_occupancy += u64::from(zone.current_occupancy);
            *summary.by_type.entry(zone.zone_type).or_insert(0) += 1;
        }

        if summary.total_capacity > 0 {
            summary.utilization = summary.total_occupancy as f64 / summary.total_capacity as f64;
        }

        summary
    }

    /// Whether at least one zone is open.
    pub fn has_open_zone(&self) -> bool {
        self.open > 0
    }
}
