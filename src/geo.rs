//! Great-circle distance.
//!
//! Haversine formula on a spherical Earth. Accurate to about 0.5% against
//! the WGS84 ellipsoid, which is well below the precision needed to rank
//! nearby shelters.
//!
//! # Reference
//! Sinnott (1984), "Virtues of the Haversine", Sky and Telescope 68(2)

use crate::error::GeoError;
use crate::models::Coordinate;

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometres.
///
/// Symmetric, zero for identical points, never negative. No range checks
/// are performed: out-of-range degrees still produce a number.
///
/// # Example
/// ```
/// use u_safezone::geo::distance_km;
/// use u_safezone::models::Coordinate;
///
/// let p = Coordinate::new(12.9716, 77.5946);
/// assert_eq!(distance_km(p, p), 0.0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = ((d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Like [`distance_km`], but rejects invalid coordinates.
pub fn checked_distance_km(a: Coordinate, b: Coordinate) -> Result<f64, GeoError> {
    a.validate()?;
    b.validate()?;
    Ok(distance_km(a, b))
}
