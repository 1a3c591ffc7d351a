//! Intersection of great circles via plane normals.
//!
//! A great circle through two points is the plane spanned by their ECEF
//! position vectors and the earth's center. Two such planes cross along an
//! axis whose two ends are the antipodal intersection candidates.

use crate::error::{GeometryError, Result};
use crate::geodesy::{distance, GeoPoint};
use crate::math::Vector3;

/// Spherical coordinates of a Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoord {
    /// Angle from the +X axis in the XY plane, radians `(-pi, pi]`.
    pub azimuth: f64,
    /// Angle from the +Z axis, radians `[0, pi]`.
    pub colatitude: f64,
    /// Vector length.
    pub radius: f64,
}

/// Normal of the great-circle plane through `p1` and `p2` (`ecef(p1) x ecef(p2)`).
#[must_use]
pub fn plane_normal(p1: GeoPoint, p2: GeoPoint) -> Vector3 {
    p1.to_ecef().cross(&p2.to_ecef())
}

/// Converts a Cartesian vector to spherical coordinates.
///
/// A zero vector has an undefined colatitude (NaN).
#[must_use]
pub fn cartesian_to_spherical(v: &Vector3) -> SphericalCoord {
    let radius = v.norm();
    SphericalCoord {
        azimuth: v.y.atan2(v.x),
        colatitude: (v.z / radius).acos(),
        radius,
    }
}

/// Surface point in the direction of `s`. The radius is ignored.
#[must_use]
pub fn vertex_from_spherical(s: &SphericalCoord) -> GeoPoint {
    GeoPoint::new(s.azimuth.to_degrees(), 90.0 - s.colatitude.to_degrees())
}

/// Intersection of the great circles through `(p1, p2)` and `(p3, p4)`.
///
/// Of the two antipodal candidates the one nearer to `p1` is returned; a
/// candidate lying exactly on `p1` wins outright. Parallel planes (identical
/// great circles or a zero-length edge) yield a NaN point.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn intersect(p1: GeoPoint, p2: GeoPoint, p3: GeoPoint, p4: GeoPoint) -> GeoPoint {
    let plane1 = plane_normal(p1, p2);
    let plane2 = plane_normal(p3, p4);

    let first = vertex_from_spherical(&cartesian_to_spherical(&plane1.cross(&plane2)));
    let second = vertex_from_spherical(&cartesian_to_spherical(&plane2.cross(&plane1)));

    let d1 = distance(first, p1);
    let d2 = distance(second, p1);

    if d1 == 0.0 {
        first
    } else if d2 == 0.0 || d1 > d2 {
        second
    } else {
        first
    }
}

/// Like [`intersect`], but reports degenerate input instead of returning NaN.
///
/// # Errors
///
/// - `GeometryError::ParallelPlanes` if the two great circles coincide or an edge has zero length
/// - `GeometryError::NonFinite` if the intersection could not be represented
pub fn checked_intersect(p1: GeoPoint, p2: GeoPoint, p3: GeoPoint, p4: GeoPoint) -> Result<GeoPoint> {
    let axis = plane_normal(p1, p2).cross(&plane_normal(p3, p4));
    if axis.norm() == 0.0 {
        return Err(GeometryError::ParallelPlanes.into());
    }

    let point = intersect(p1, p2, p3, p4);
    if !point.is_finite() {
        return Err(GeometryError::NonFinite("great-circle intersection").into());
    }
    Ok(point)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::GeosphereError;

    fn p(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat)
    }

    #[test]
    fn equator_normal_points_to_pole() {
        let n = plane_normal(p(0.0, 0.0), p(90.0, 0.0));
        assert_abs_diff_eq!(n.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(n.y, 0.0, epsilon = 1e-3);
        assert!(n.z > 0.0);
    }

    #[test]
    fn normal_is_perpendicular_to_both_points() {
        let a = p(9.0, 47.5);
        let b = p(13.0, 49.2);
        let n = plane_normal(a, b).normalize();
        assert_abs_diff_eq!(n.dot(&a.to_ecef().normalize()), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n.dot(&b.to_ecef().normalize()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn spherical_of_axes() {
        let z = cartesian_to_spherical(&Vector3::new(0.0, 0.0, 2.0));
        assert_abs_diff_eq!(z.colatitude, 0.0);
        assert_abs_diff_eq!(z.radius, 2.0);

        let y = cartesian_to_spherical(&Vector3::new(0.0, 3.0, 0.0));
        assert_abs_diff_eq!(y.azimuth, FRAC_PI_2);
        assert_abs_diff_eq!(y.colatitude, FRAC_PI_2);
    }

    #[test]
    fn vertex_from_spherical_maps_colatitude() {
        let v = vertex_from_spherical(&SphericalCoord {
            azimuth: PI / 4.0,
            colatitude: PI / 3.0,
            radius: 1.0,
        });
        assert_abs_diff_eq!(v.lon, 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.lat, 30.0, epsilon = 1e-12);
    }

    #[test]
    fn spherical_round_trip_of_geo_point() {
        let g = p(-73.98, 40.75);
        let back = vertex_from_spherical(&cartesian_to_spherical(&g.to_ecef()));
        assert_abs_diff_eq!(back.lon, g.lon, epsilon = 1e-9);
        assert_abs_diff_eq!(back.lat, g.lat, epsilon = 1e-9);
    }

    #[test]
    fn meridian_crosses_equator() {
        let hit = intersect(p(0.0, -10.0), p(0.0, 10.0), p(-10.0, 0.0), p(10.0, 0.0));
        assert_abs_diff_eq!(hit.lon, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn picks_candidate_nearest_first_point() {
        // The equator chord spans lon -10..10, but the meridian at 100 meets it
        // at (100, 0) and (-80, 0); the first is nearer to p1.
        let hit = intersect(p(100.0, -10.0), p(100.0, 10.0), p(-10.0, 0.0), p(10.0, 0.0));
        assert_abs_diff_eq!(hit.lon, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn second_candidate_on_first_point_wins() {
        let p1 = p(0.0, 0.0);
        let hit = intersect(p1, p(0.0, 10.0), p(-10.0, 0.0), p(10.0, 0.0));
        assert_abs_diff_eq!(hit.lon, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.lat, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(distance(hit, p1), 0.0);
    }

    #[test]
    fn first_candidate_on_first_point_wins() {
        let p1 = p(0.0, 0.0);
        let hit = intersect(p1, p(0.0, 10.0), p(10.0, 0.0), p(-10.0, 0.0));
        assert_abs_diff_eq!(hit.lon, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.lat, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(distance(hit, p1), 0.0);
    }

    #[test]
    fn coincident_circles_are_degenerate() {
        let a = p(0.0, 0.0);
        let b = p(10.0, 0.0);
        assert!(!intersect(a, b, a, b).is_finite());
        let err = checked_intersect(a, b, a, b).unwrap_err();
        assert!(matches!(
            err,
            GeosphereError::Geometry(GeometryError::ParallelPlanes)
        ));
    }

    #[test]
    fn zero_length_edge_is_degenerate() {
        let a = p(1.0, 1.0);
        assert!(checked_intersect(p(0.0, 0.0), p(5.0, 5.0), a, a).is_err());
    }

    #[test]
    fn checked_matches_unchecked() {
        let (p1, p2, p3, p4) = (p(8.0, 46.0), p(8.5, 47.0), p(7.5, 46.5), p(9.0, 46.5));
        let hit = checked_intersect(p1, p2, p3, p4).unwrap();
        assert_eq!(hit, intersect(p1, p2, p3, p4));
        assert!(hit.lon > 8.0 && hit.lon < 8.5);
    }
}
