//! Safe zone fixtures for demos and tests.
//!
//! [`seed_zones`] returns the hand-curated Bangalore relief sites.
//! [`generate_zones`] adds synthetic sites around the city; it draws from a
//! caller-supplied RNG so a seeded generator reproduces the same data.

use rand::Rng;

use crate::models::{Coordinate, SafeZone, ZoneStatus, ZoneType};

/// Bangalore city center.
pub const BANGALORE_CENTER: Coordinate = Coordinate::new(12.9716, 77.5946);

/// Facility tags drawn by [`generate_zones`].
pub const GENERATED_FACILITIES: [&str; 4] = ["food", "water", "medical", "bathrooms"];

/// The four curated relief sites.
pub fn seed_zones() -> Vec<SafeZone> {
    vec![
        SafeZone::new("safezone-1", Coordinate::new(12.9387, 77.6142))
            .with_name("Koramangala Indoor Stadium")
            .with_address("80 Feet Road, Koramangala")
            .with_landmark("Near Forum Mall")
            .with_capacity(1000)
            .with_occupancy(350)
            .with_facilities(["food", "water", "medical", "sleeping", "bathrooms"])
            .with_contact("Sanjay Patil", "+91 9876543222")
            .with_status(ZoneStatus::Open)
            .with_type(ZoneType::Shelter),
        SafeZone::new("safezone-2", Coordinate::new(12.9613, 77.6142))
            .with_name("St. John's Medical Camp")
            .with_address("MG Road, near Trinity Metro")
            .with_landmark("Trinity Circle")
            .with_capacity(500)
            .with_occupancy(120)
            .with_facilities(["medical", "water", "bathrooms"])
            .with_contact("Dr. Nisha Reddy", "+91 9876543223")
            .with_status(ZoneStatus::Open)
            .with_type(ZoneType::Medical),
        SafeZone::new("safezone-3", Coordinate::new(12.9698, 77.7499))
            .with_name("Whitefield Community Hall")
            .with_address("Whitefield Main Road")
            .with_landmark("Near Whitefield Bus Station")
            .with_capacity(800)
            .with_occupancy(600)
            .with_facilities(["food", "water", "sleeping", "bathrooms"])
            .with_contact("Anand Krishnan", "+91 9876543224")
            .with_status(ZoneStatus::Open)
            .with_type(ZoneType::Shelter),
        SafeZone::new("safezone-4", Coordinate::new(12.8399, 77.6770))
            .with_name("Electronic City Relief Center")
            .with_address("Electronic City Phase 1")
            .with_landmark("Near Wipro Gate")
            .with_capacity(1200)
            .with_occupancy(1200)
            .with_facilities(["food", "water", "medical", "sleeping", "bathrooms"])
            .with_contact("Varsha Menon", "+91 9876543225")
            .with_status(ZoneStatus::Full)
            .with_type(ZoneType::MultiPurpose),
    ]
}

/// Generates `count` synthetic zones numbered from `first_index`.
///
/// Each zone lies in the box lat [12.9, 13.0), lng [77.5, 77.6), has
/// capacity 500..1500 and occupancy 0..500, keeps each tag of
/// [`GENERATED_FACILITIES`] with probability 1/2, and gets a uniformly
/// drawn status and type.
///
/// Numbering stops at `usize::MAX`, so fewer than `count` zones are
/// returned when the range would run past it.
pub fn generate_zones<R: Rng>(rng: &mut R, first_index: usize, count: usize) -> Vec<SafeZone> {
    (first_index..first_index.saturating_add(count))
        .map(|i| {
            let location = Coordinate::new(
                12.9 + rng.random::<f64>() * 0.1,
                77.5 + rng.random::<f64>() * 0.1,
            );
            let facilities: Vec<&str> = GENERATED_FACILITIES
                .iter()
                .copied()
                .filter(|_| rng.random_bool(0.5))
                .collect();
            let status = ZoneStatus::ALL[rng.random_range(0..ZoneStatus::ALL.len())];
            let zone_type = ZoneType::ALL[rng.random_range(0..ZoneType::ALL.len())];

            SafeZone::new(format!("safezone-{i}"), location)
                .with_name(format!("Safe Zone {i}"))
                .with_address(format!("{} Safe Street, Bangalore", i.saturating_mul(7)))
                .with_landmark(format!("Landmark SZ{i}"))
                .with_capacity(500 + rng.random_range(0..1000))
                .with_occupancy(rng.random_range(0..500))
                .with_facilities(facilities)
                .with_contact(format!("Contact SZ{i}"), format!("+91 9000000{i}"))
                .with_status(status)
                .with_type(zone_type)
        })
        .collect()
}

/// Curated sites followed by synthetic zones 6 through 10.
pub fn dashboard_zones<R: Rng>(rng: &mut R) -> Vec<SafeZone> {
    let mut zones = seed_zones();
    zones.extend(generate_zones(rng, 6, 5));
    zones
}

/// A point jittered around `center`: each axis moves by
/// `(u - 0.5) * 0.1 * radius_km` degrees for `u` uniform in [0, 1).
pub fn near<R: Rng>(center: Coordinate, radius_km: f64, rng: &mut R) -> Coordinate {
    Coordinate::new(
        center.latitude + (rng.random::<f64>() - 0.5) * 0.1 * radius_km,
        center.longitude + (rng.random::<f64>() - 0.5) * 0.1 * radius_km,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_zones;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seed_zones() {
        let zones = seed_zones();
        assert_eq!(zones.len(), 4);
        assert!(validate_zones(&zones).is_ok());
        assert_eq!(zones[3].status, ZoneStatus::Full);
        assert_eq!(zones[3].zone_type, ZoneType::MultiPurpose);
        assert_eq!(zones[1].location, Coordinate::new(12.9613, 77.6142));
        assert!(zones[0].has_facility("sleeping"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate_zones(&mut StdRng::seed_from_u64(42), 6, 5);
        let b = generate_zones(&mut StdRng::seed_from_u64(42), 6, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_ranges() {
        let zones = generate_zones(&mut StdRng::seed_from_u64(1), 6, 200);
        assert_eq!(zones.len(), 200);
        assert_eq!(zones[0].id, "safezone-6");
        assert_eq!(zones[199].id, "safezone-205");
        for z in &zones {
            assert!((12.9..13.0).contains(&z.location.latitude));
            assert!((77.5..77.6).contains(&z.location.longitude));
            assert!((500..1500).contains(&z.capacity));
            assert!(z.current_occupancy < 500);
            assert!(z.facilities.iter().all(|f| GENERATED_FACILITIES.contains(&f.as_str())));
        }
        assert!(validate_zones(&zones).is_ok());
    }

    #[test]
    fn test_generate_near_index_limit() {
        let zones = generate_zones(&mut StdRng::seed_from_u64(5), usize::MAX - 1, 5);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].id, format!("safezone-{}", usize::MAX - 1));
        assert!(generate_zones(&mut StdRng::seed_from_u64(5), usize::MAX, 3).is_empty());
    }

    #[test]
    fn test_dashboard_zones() {
        let zones = dashboard_zones(&mut StdRng::seed_from_u64(3));
        assert_eq!(zones.len(), 9);
        assert!(validate_zones(&zones).is_ok());
        assert_eq!(zones[4].id, "safezone-6");
        assert_eq!(zones[8].id, "safezone-10");
    }

    #[test]
    fn test_near_stays_within_box() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let p = near(BANGALORE_CENTER, 4.0, &mut rng);
            assert!((p.latitude - BANGALORE_CENTER.latitude).abs() <= 0.2);
            assert!((p.longitude - BANGALORE_CENTER.longitude).abs() <= 0.2);
        }
    }
}
