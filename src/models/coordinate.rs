//! Geographic coordinate model.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo;

/// A WGS84 point in decimal degrees.
///
/// Construction through [`Coordinate::new`] performs no range checks;
/// use [`Coordinate::try_new`] when the input comes from an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, valid range [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without validation.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let coord = Self::new(latitude, longitude);
        coord.validate()?;
        Ok(coord)
    }

    /// Whether both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns `Err(InvalidCoordinate)` unless [`is_valid`](Self::is_valid).
    pub fn validate(&self) -> Result<(), GeoError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        geo::distance_km(*self, *other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_bounds() {
        assert!(Coordinate::try_new(90.0, 180.0).is_ok());
        assert!(Coordinate::try_new(-90.0, -180.0).is_ok());
        assert!(Coordinate::try_new(12.9716, 77.5946).is_ok());
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        let err = Coordinate::try_new(91.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            GeoError::InvalidCoordinate {
                latitude: 91.0,
                longitude: 0.0
            }
        );
        assert!(Coordinate::try_new(0.0, -180.5).is_err());
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_does_not_validate() {
        let c = Coordinate::new(200.0, 400.0);
        assert!(!c.is_valid());
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_from_tuple() {
        let c: Coordinate = (12.9, 77.5).into();
        assert_eq!(c, Coordinate::new(12.9, 77.5));
    }
}
