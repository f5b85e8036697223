//! Nearest-station search over the fixed catalog.
//!
//! This is the numerically sensitive part of the crate: a haversine
//! great-circle distance and a linear scan that picks the closest catalog
//! station out of the names a live feed is currently reporting.

use crate::stations::catalog::StationCatalog;
use crate::LatLon;
use haversine::{distance, Location as HaversineLocation, Units};

/// Great-circle distance between two coordinates, in kilometers.
///
/// Haversine with the Earth radius fixed at 6371 km. Symmetric within
/// floating-point tolerance and exactly zero for identical points.
/// Coordinates are not validated: out-of-range values produce a
/// mathematically well-defined (if meaningless) distance, and NaN input
/// propagates to a NaN distance rather than a panic.
///
/// ```
/// use hkweather::{distance_km, LatLon};
///
/// let headquarters = LatLon(22.302, 114.174);
/// let kings_park = LatLon(22.309, 114.172);
/// assert!(distance_km(headquarters, kings_park) < 1.0);
/// ```
pub fn distance_km(a: LatLon, b: LatLon) -> f64 {
    distance(
        HaversineLocation {
            latitude: a.0,
            longitude: a.1,
        },
        HaversineLocation {
            latitude: b.0,
            longitude: b.1,
        },
        Units::Kilometers,
    )
}

/// Picks the catalog station closest to `target` out of `candidates`.
///
/// Linear scan in candidate order. Names missing from the catalog are
/// skipped without error, and the running minimum is tracked with a strict
/// less-than comparison, so of two equidistant candidates the one appearing
/// earlier wins. That tie-break is a contract, not an accident: co-located
/// stations exist in the Hong Kong table.
///
/// Returns `None` when no candidate resolves against the catalog (an empty
/// list included). Callers must treat `None` as "no nearby station could be
/// determined", not as a silent default.
///
/// ```
/// use hkweather::{find_nearest, LatLon, StationCatalog};
///
/// let catalog = StationCatalog::hong_kong();
/// let sha_tin_centre = LatLon(22.39, 114.19);
/// let nearest = find_nearest(sha_tin_centre, ["香港天文台", "沙田"], &catalog);
/// assert_eq!(nearest, Some("沙田"));
/// ```
pub fn find_nearest<'a>(
    target: LatLon,
    candidates: impl IntoIterator<Item = &'a str>,
    catalog: &StationCatalog,
) -> Option<&'a str> {
    let mut nearest = None;
    let mut min_distance_km = f64::INFINITY;
    for name in candidates {
        let Some(coords) = catalog.coordinates(name) else {
            continue;
        };
        let d = distance_km(target, coords);
        if d < min_distance_km {
            min_distance_km = d;
            nearest = Some(name);
        }
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn toy_catalog() -> StationCatalog {
        StationCatalog::from_entries([
            ("alpha".to_string(), LatLon(22.302, 114.174)),
            ("alpha-twin".to_string(), LatLon(22.302, 114.174)),
            ("beta".to_string(), LatLon(22.309, 114.172)),
            ("gamma".to_string(), LatLon(22.502, 114.145)),
        ])
    }

    #[test]
    fn distance_is_zero_for_identical_points() {
        let p = LatLon(22.302, 114.174);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn distance_matches_known_station_pair() {
        // Observatory headquarters to King's Park, roughly 0.8 km apart.
        let d = distance_km(LatLon(22.302, 114.174), LatLon(22.309, 114.172));
        assert!((d - 0.78).abs() < 0.05, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = LatLon(22.302, 114.174);
        let b = LatLon(22.449, 114.177);
        assert_relative_eq!(distance_km(a, b), distance_km(b, a), max_relative = 1e-9);
    }

    #[test]
    fn distance_is_finite_and_non_negative_for_extreme_inputs() {
        let pairs = [
            (LatLon(22.3, 114.2), LatLon(-33.9, 151.2)),
            (LatLon(90.0, 0.0), LatLon(-90.0, 0.0)),
            (LatLon(0.0, -180.0), LatLon(0.0, 180.0)),
        ];
        for (a, b) in pairs {
            let d = distance_km(a, b);
            assert!(d >= 0.0 && d.is_finite(), "{a:?} {b:?} -> {d}");
        }
    }

    #[test]
    fn nearest_of_two_candidates_is_the_closer_one() {
        let catalog = toy_catalog();
        let next_to_beta = LatLon(22.310, 114.172);
        assert_eq!(
            find_nearest(next_to_beta, ["alpha", "beta"], &catalog),
            Some("beta")
        );
        assert_eq!(
            find_nearest(next_to_beta, ["beta", "alpha"], &catalog),
            Some("beta")
        );
    }

    #[test]
    fn empty_candidate_list_resolves_to_none() {
        let no_candidates: [&str; 0] = [];
        assert_eq!(
            find_nearest(LatLon(22.3, 114.2), no_candidates, &toy_catalog()),
            None
        );
    }

    #[test]
    fn unknown_names_are_skipped() {
        let catalog = toy_catalog();
        let target = LatLon(22.3, 114.17);
        assert_eq!(
            find_nearest(target, ["nonexistent", "也不存在"], &catalog),
            None
        );
        assert_eq!(
            find_nearest(target, ["nonexistent", "gamma"], &catalog),
            Some("gamma")
        );
    }

    #[test]
    fn single_valid_candidate_wins_regardless_of_distance() {
        let far_away = LatLon(51.5, -0.13);
        assert_eq!(
            find_nearest(far_away, ["gamma"], &toy_catalog()),
            Some("gamma")
        );
    }

    #[test]
    fn co_located_stations_tie_break_on_candidate_order() {
        let catalog = toy_catalog();
        let target = LatLon(22.30, 114.18);
        assert_eq!(
            find_nearest(target, ["alpha", "alpha-twin"], &catalog),
            Some("alpha")
        );
        assert_eq!(
            find_nearest(target, ["alpha-twin", "alpha"], &catalog),
            Some("alpha-twin")
        );
    }

    #[test]
    fn duplicate_candidates_do_not_change_the_result() {
        let catalog = toy_catalog();
        let target = LatLon(22.31, 114.17);
        assert_eq!(
            find_nearest(target, ["beta", "beta", "alpha"], &catalog),
            Some("beta")
        );
    }

    #[test]
    fn target_on_a_station_resolves_at_distance_zero() {
        let catalog = StationCatalog::hong_kong();
        let kings_park = LatLon(22.309, 114.172);
        assert_eq!(
            find_nearest(kings_park, ["香港天文台", "京士柏"], &catalog),
            Some("京士柏")
        );
        let resolved = catalog.coordinates("京士柏").unwrap();
        assert_eq!(distance_km(kings_park, resolved), 0.0);
    }

    #[test]
    fn nan_target_resolves_to_none() {
        // NaN distances never beat the running minimum, so nothing is picked.
        let catalog = toy_catalog();
        assert_eq!(
            find_nearest(LatLon(f64::NAN, 114.2), ["alpha", "beta"], &catalog),
            None
        );
    }
}
