//! Error types.
//!
//! Distance and ranking are total functions; errors only arise from the
//! checked entry points, store mutations, and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by checked geometric operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a
    /// non-finite component.
    #[error("Invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// Errors raised when mutating a [`SafeZoneStore`](crate::store::SafeZoneStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No zone with this ID is loaded.
    #[error("Safe zone not found: {id}")]
    ZoneNotFound { id: String },
}

/// Errors raised while loading a [`ResolverConfig`](crate::config::ResolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Config Read Error: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or has mistyped keys.
    #[error("Config Parse Error: {reason}")]
    Parse { reason: String },

    /// A key holds an out-of-range value.
    #[error("Config Validation Error: {reason}")]
    Invalid { reason: String },
}
