//! Resolver configuration.
//!
//! Loaded from a TOML document with a `[resolver]` table. Every key is
//! optional and falls back to its default:
//!
//! ```toml
//! [resolver]
//! default_count = 3
//! exclude_full = false
//! max_distance_km = 25.0
//! search_limit = 10
//! ```

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of zones returned when the caller does not ask for a count.
pub const DEFAULT_COUNT: usize = 3;

/// Maximum number of search hits returned by the store.
pub const SEARCH_LIMIT: usize = 10;

/// Tunables for [`NearestResolver`](crate::resolver::NearestResolver) and
/// [`SafeZoneStore::search`](crate::store::SafeZoneStore::search).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Number of zones to return.
    #[serde(default = "default_count")]
    pub default_count: usize,
    /// Also drop zones whose status is `Full`.
    #[serde(default)]
    pub exclude_full: bool,
    /// Drop zones farther than this radius (km). `None` = unbounded.
    #[serde(default)]
    pub max_distance_km: Option<f64>,
    /// Maximum number of hits from [`SafeZoneStore::search_with`](crate::store::SafeZoneStore::search_with).
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    resolver: ResolverConfig,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_search_limit() -> usize {
    SEARCH_LIMIT
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COUNT,
            exclude_full: false,
            max_distance_km: None,
            search_limit: SEARCH_LIMIT,
        }
    }
}

impl ResolverConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        file.resolver.validate()?;
        debug!("Parsed resolver config: {:?}", file.resolver);
        Ok(file.resolver)
    }

    /// Reads and parses a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded resolver config from {}", path.display());
        Ok(config)
    }

    /// Rejects a negative or non-finite radius.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(radius) = self.max_distance_km {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ConfigError::Invalid {
                    reason: format!("max_distance_km must be a non-negative number, got {radius}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ResolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.default_count, 3);
        assert_eq!(config.search_limit, 10);
    }

    #[test]
    fn test_partial_table() {
        let config = ResolverConfig::from_toml_str(
            r#"
            [resolver]
            exclude_full = true
            max_distance_km = 12.5
            "#,
        )
        .unwrap();
        assert!(config.exclude_full);
        assert_eq!(config.max_distance_km, Some(12.5));
        assert_eq!(config.default_count, DEFAULT_COUNT);
    }

    #[test]
    fn test_parse_error() {
        let err = ResolverConfig::from_toml_str("[resolver]\ndefault_count = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_negative_radius_rejected() {
        let err = ResolverConfig::from_toml_str("[resolver]\nmax_distance_km = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = ResolverConfig::from_path("/nonexistent/u-safezone.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("u-safezone-{}.toml", std::process::id()));
        std::fs::write(&path, "[resolver]\ndefault_count = 5\n").unwrap();
        let config = ResolverConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.default_count, 5);
    }
}
