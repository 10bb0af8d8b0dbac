//! Safe zone model.
//!
//! A safe zone is a designated shelter, medical camp, food point, or
//! multi-purpose relief center that civilians can be directed to during
//! an incident. Records are owned by the integrating code (usually a
//! [`SafeZoneStore`](crate::store::SafeZoneStore)) and are never mutated
//! by the resolver.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Coordinate;

/// A safe zone record.
///
/// Serializes in the dashboard's JSON layout: camelCase keys, the zone type
/// under `type`, and `address`/`landmark` nested inside `location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SafeZoneRecord", into = "SafeZoneRecord")]
pub struct SafeZone {
    /// Unique zone identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position of the zone entrance.
    pub location: Coordinate,
    /// Street address.
    pub address: Option<String>,
    /// Nearby landmark for orientation.
    pub landmark: Option<String>,
    /// Number of people the zone can hold.
    pub capacity: u32,
    /// Number of people currently present. May exceed `capacity`.
    pub current_occupancy: u32,
    /// Operating status.
    pub status: ZoneStatus,
    /// Zone classification.
    pub zone_type: ZoneType,
    /// Facility tags (e.g. "food", "water", "medical").
    pub facilities: BTreeSet<String>,
    /// Contact person on site.
    pub contact_person: Option<String>,
    /// Contact phone number.
    pub contact_phone: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SafeZoneRecord {
    id: String,
    #[serde(default)]
    name: String,
    location: LocationRecord,
    capacity: u32,
    current_occupancy: u32,
    status: ZoneStatus,
    #[serde(rename = "type")]
    zone_type: ZoneType,
    #[serde(default)]
    facilities: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact_phone: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct LocationRecord {
    latitude: f64,
    longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    landmark: Option<String>,
}

impl From<SafeZoneRecord> for SafeZone {
    fn from(r: SafeZoneRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            location: Coordinate::new(r.location.latitude, r.location.longitude),
            address: r.location.address,
            landmark: r.location.landmark,
            capacity: r.capacity,
            current_occupancy: r.current_occupancy,
            status: r.status,
            zone_type: r.zone_type,
            facilities: r.facilities,
            contact_person: r.contact_person,
            contact_phone: r.contact_phone,
        }
    }
}

impl From<SafeZone> for SafeZoneRecord {
    fn from(z: SafeZone) -> Self {
        Self {
            id: z.id,
            name: z.name,
            location: LocationRecord {
                latitude: z.location.latitude,
                longitude: z.location.longitude,
                address: z.address,
                landmark: z.landmark,
            },
            capacity: z.capacity,
            current_occupancy: z.current_occupancy,
            status: z.status,
            zone_type: z.zone_type,
            facilities: z.facilities,
            contact_person: z.contact_person,
            contact_phone: z.contact_phone,
        }
    }
}

/// Operating status of a safe zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    /// Accepting people.
    Open,
    /// Operating but at capacity.
    Full,
    /// Not operating. Never returned by the resolver.
    Closed,
}

/// Safe zone classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneType {
    /// Overnight shelter (stadium, community hall).
    Shelter,
    /// Medical camp or field clinic.
    Medical,
    /// Food and water distribution point.
    Food,
    /// Combined relief center.
    MultiPurpose,
}

impl ZoneStatus {
    /// All variants, in declaration order.
    pub const ALL: [ZoneStatus; 3] = [ZoneStatus::Open, ZoneStatus::Full, ZoneStatus::Closed];
}

impl ZoneType {
    /// All variants, in declaration order.
    pub const ALL: [ZoneType; 4] = [
        ZoneType::Shelter,
        ZoneType::Medical,
        ZoneType::Food,
        ZoneType::MultiPurpose,
    ];
}

impl SafeZone {
    /// Creates an open shelter at `location` with zero capacity.
    pub fn new(id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            location,
            address: None,
            landmark: None,
            capacity: 0,
            current_occupancy: 0,
            status: ZoneStatus::Open,
            zone_type: ZoneType::Shelter,
            facilities: BTreeSet::new(),
            contact_person: None,
            contact_phone: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the landmark.
    pub fn with_landmark(mut self, landmark: impl Into<String>) -> Self {
        self.landmark = Some(landmark.into());
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the current occupancy.
    pub fn with_occupancy(mut self, occupancy: u32) -> Self {
        self.current_occupancy = occupancy;
        self
    }

    /// Sets the operating status.
    pub fn with_status(mut self, status: ZoneStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the zone type.
    pub fn with_type(mut self, zone_type: ZoneType) -> Self {
        self.zone_type = zone_type;
        self
    }

    /// Adds a facility tag.
    pub fn with_facility(mut self, facility: impl Into<String>) -> Self {
        self.facilities.insert(facility.into());
        self
    }

    /// Adds several facility tags.
    pub fn with_facilities<I, S>(mut self, facilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facilities.extend(facilities.into_iter().map(Into::into));
        self
    }

    /// Sets contact person and phone.
    pub fn with_contact(mut self, person: impl Into<String>, phone: impl Into<String>) -> Self {
        self.contact_person = Some(person.into());
        self.contact_phone = Some(phone.into());
        self
    }

    /// Whether the zone is closed.
    pub fn is_closed(&self) -> bool {
        self.status == ZoneStatus::Closed
    }

    /// Whether the zone offers a facility (exact tag match).
    pub fn has_facility(&self, facility: &str) -> bool {
        self.facilities.contains(facility)
    }

    /// Occupancy as a fraction of capacity.
    ///
    /// Returns 0.0 for zero-capacity zones; may exceed 1.0 when overfull.
    pub fn occupancy_rate(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.current_occupancy as f64 / self.capacity as f64
        }
    }

    /// Remaining places (0 when at or over capacity).
    pub fn available_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.current_occupancy)
    }
}
