//! Safe zone domain models.
//!
//! # Domain Mappings
//!
//! | u-safezone | Disaster response | Public health | Logistics |
//! |------------|-------------------|---------------|-----------|
//! | SafeZone | Shelter / relief camp | Field hospital | Depot |
//! | Coordinate | Entrance position | Site position | Dock position |
//! | RankedSafeZone | Evacuation suggestion | Referral option | Nearest depot |

mod coordinate;
mod ranked;
mod safe_zone;

pub use coordinate::Coordinate;
pub use ranked::RankedSafeZone;
pub use safe_zone::{SafeZone, ZoneStatus, ZoneType};
