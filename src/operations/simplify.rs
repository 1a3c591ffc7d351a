use tracing::debug;

use crate::geodesy::{bearing, delta_angle, distance, GeoPoint};

/// Polylines this short are returned unchanged.
const MIN_SIMPLIFY_LEN: usize = 6;

/// Thins out a polyline while keeping its shape within a tolerance.
///
/// Walks forward from an anchor (initially the first point). For each
/// candidate chord from the anchor to a later point, the cross-track
/// deviation of every point in between is estimated as
/// `sin(delta bearing) * distance` from the anchor. Once a deviation exceeds
/// the tolerance, the point before the candidate is kept and becomes the new
/// anchor. First and last points are always kept.
#[derive(Debug)]
pub struct SimplifyPolyline {
    points: Vec<GeoPoint>,
    tolerance_m: f64,
}

impl SimplifyPolyline {
    /// Creates a new simplification with the allowed deviation in meters.
    #[must_use]
    pub fn new(points: Vec<GeoPoint>, tolerance_m: f64) -> Self {
        Self { points, tolerance_m }
    }

    /// Executes the simplification.
    #[must_use]
    pub fn execute(&self) -> Vec<GeoPoint> {
        let points = &self.points;
        let n = points.len();
        if n < MIN_SIMPLIFY_LEN {
            return points.clone();
        }

        let mut kept = vec![points[0]];
        let mut anchor = 0;
        let mut candidate = 2;
        while candidate < n {
            if self.chord_deviates(anchor, candidate) {
                anchor = candidate - 1;
                kept.push(points[anchor]);
                candidate = anchor + 2;
            } else {
                candidate += 1;
            }
        }
        kept.push(points[n - 1]);

        debug!(input = n, output = kept.len(), "simplified polyline");
        kept
    }

    /// Whether any point strictly between `anchor` and `candidate` strays too far from their chord.
    fn chord_deviates(&self, anchor: usize, candidate: usize) -> bool {
        let origin = self.points[anchor];
        let chord = bearing(origin, self.points[candidate]);
        self.points[anchor + 1..candidate].iter().any(|&p| {
            let offset = delta_angle(chord, bearing(origin, p)).to_radians().sin() * distance(origin, p);
            offset > self.tolerance_m
        })
    }
}

/// Simplifies `points` with the given tolerance in meters.
#[must_use]
pub fn simplify(points: &[GeoPoint], tolerance_m: f64) -> Vec<GeoPoint> {
    SimplifyPolyline::new(points.to_vec(), tolerance_m).execute()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat)
    }

    fn zigzag() -> Vec<GeoPoint> {
        vec![
            p(8.0, 47.0),
            p(8.01, 47.0),
            p(8.02, 47.000_01),
            p(8.03, 47.0),
            p(8.04, 47.05),
            p(8.05, 47.1),
            p(8.06, 47.1),
            p(8.07, 47.1),
        ]
    }

    #[test]
    fn short_polylines_are_unchanged() {
        let pts = vec![p(0.0, 0.0), p(1.0, 5.0), p(2.0, -3.0), p(3.0, 8.0), p(4.0, 0.0)];
        assert_eq!(simplify(&pts, 1.0), pts);
        assert_eq!(simplify(&pts[..2], 1.0), pts[..2].to_vec());
        assert!(simplify(&[], 1.0).is_empty());
    }

    #[test]
    fn straight_line_collapses_to_endpoints() {
        let pts: Vec<GeoPoint> = (0..8).map(|i| p(8.0 + 0.01 * f64::from(i), 47.0)).collect();
        assert_eq!(simplify(&pts, 5.0), vec![pts[0], pts[7]]);
    }

    #[test]
    fn keeps_corners_and_drops_small_kinks() {
        let simplified = simplify(&zigzag(), 5.0);
        assert_eq!(
            simplified,
            vec![p(8.0, 47.0), p(8.03, 47.0), p(8.05, 47.1), p(8.07, 47.1)]
        );
    }

    #[test]
    fn huge_tolerance_keeps_only_endpoints() {
        let simplified = simplify(&zigzag(), 100_000.0);
        assert_eq!(simplified, vec![p(8.0, 47.0), p(8.07, 47.1)]);
    }

    #[test]
    fn endpoints_always_kept() {
        let pts = zigzag();
        let simplified = simplify(&pts, 0.0);
        assert_eq!(simplified.first(), pts.first());
        assert_eq!(simplified.last(), pts.last());
        assert!(simplified.len() <= pts.len());
    }
}
