//! Safe zone resolution for emergency dashboards.
//!
//! Ranks shelters, medical camps, and relief centers by great-circle
//! distance from a person's position so they can be directed to the nearest
//! usable site during an incident.
//!
//! # Modules
//!
//! - **`geo`**: Haversine distance (`distance_km`, `checked_distance_km`)
//! - **`models`**: Domain types — `Coordinate`, `SafeZone`, `ZoneStatus`,
//!   `ZoneType`, `RankedSafeZone`
//! - **`resolver`**: Nearest-zone queries (`nearest`, `NearestResolver`, filters)
//! - **`store`**: In-memory `SafeZoneStore` with lookup, search, and snapshots
//! - **`fixtures`**: Curated Bangalore sites and a seeded zone generator
//! - **`validation`**: Input integrity checks (duplicate IDs, bad coordinates)
//! - **`summary`**: Aggregate status and capacity indicators
//! - **`config`**: TOML-backed `ResolverConfig`
//!
//! # Example
//!
//! ```
//! use u_safezone::fixtures::{seed_zones, BANGALORE_CENTER};
//! use u_safezone::resolver::nearest;
//!
//! let ranked = nearest(&seed_zones(), BANGALORE_CENTER, 2);
//! assert_eq!(ranked[0].id, "safezone-2");
//! ```
//!
//! # Logging
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod geo;
pub mod models;
pub mod resolver;
pub mod store;
pub mod summary;
pub mod validation;

pub use error::{ConfigError, GeoError, StoreError};
