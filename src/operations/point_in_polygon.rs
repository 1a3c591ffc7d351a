#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::great_circle::checked_intersect;
use crate::geodesy::{bearing, distance, radial_coordinates, GeoPoint, Polygon};

/// Allowed deviation from 180° when testing whether two bearings are opposite.
pub const COLLINEARITY_TOLERANCE_DEG: f64 = 10.0;

/// Extra length added to the cast ray beyond the farthest vertex, in meters.
pub const DEFAULT_CAST_MARGIN_M: f64 = 0.1;

/// Parameters controlling the spherical ray-casting test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainmentParams {
    /// Half-width of the window around 180° in which two bearings count as opposite.
    pub collinearity_tolerance_deg: f64,
    /// Distance the ray reaches past the farthest vertex.
    pub cast_margin_m: f64,
}

impl Default for ContainmentParams {
    fn default() -> Self {
        Self {
            collinearity_tolerance_deg: COLLINEARITY_TOLERANCE_DEG,
            cast_margin_m: DEFAULT_CAST_MARGIN_M,
        }
    }
}

impl ContainmentParams {
    /// Whether a bearing difference lies strictly inside the window around 180°.
    ///
    /// The spread is rounded to whole degrees first, ties toward positive infinity.
    fn is_opposite(&self, spread: f64) -> bool {
        let spread = (spread + 0.5).floor().abs();
        spread > 180.0 - self.collinearity_tolerance_deg
            && spread < 180.0 + self.collinearity_tolerance_deg
    }
}

/// Tests whether a point lies inside a polygon with great-circle edges.
///
/// # Algorithm
///
/// 1. Reject points outside the polygon's lon/lat bounding rectangle.
/// 2. Cast a geodesic ray from the point through the widest angular gap
///    between the vertex bearings, long enough to leave the polygon.
/// 3. Intersect the ray's great circle with every edge's great circle and
///    keep hits that lie on both arcs: seen from the hit, the two ray ends
///    and the two edge ends must each point in opposite directions.
/// 4. An odd number of hits means inside.
///
/// A point equal to a vertex counts as inside, unless that vertex lies on
/// the bounding rectangle (step 1 rejects it first).
#[derive(Debug)]
pub struct PointInPolygon<'a> {
    polygon: &'a Polygon,
    point: GeoPoint,
    params: ContainmentParams,
}

impl<'a> PointInPolygon<'a> {
    /// Creates a new containment test with default parameters.
    #[must_use]
    pub fn new(polygon: &'a Polygon, point: GeoPoint) -> Self {
        Self {
            polygon,
            point,
            params: ContainmentParams::default(),
        }
    }

    /// Overrides the containment parameters.
    #[must_use]
    pub fn with_params(mut self, params: ContainmentParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the test.
    #[must_use]
    pub fn execute(&self) -> bool {
        let ring = self.polygon.vertices();
        let point = self.point;

        if !self.polygon.bounding_rectangle().strictly_contains(point) {
            trace!(?point, "outside bounding rectangle");
            return false;
        }

        let heading = cast_heading(point, ring);
        let reach = ring
            .iter()
            .map(|&v| distance(point, v))
            .fold(0.0, f64::max)
            + self.params.cast_margin_m;
        let far = radial_coordinates(point, heading, reach);
        debug!(?point, heading, reach, ?far, "casting ray");

        let mut crossings = 0usize;
        for edge in ring.windows(2) {
            let (start, end) = (edge[0], edge[1]);
            if start == point {
                trace!(?point, "point is a vertex");
                return true;
            }

            let hit = match checked_intersect(far, point, start, end) {
                Ok(hit) => hit,
                Err(err) => {
                    trace!(?start, ?end, %err, "skipping edge");
                    continue;
                }
            };

            let on_ray = self.params.is_opposite(bearing(hit, point) - bearing(hit, far));
            let on_edge = self.params.is_opposite(bearing(hit, start) - bearing(hit, end));
            if on_ray && on_edge {
                trace!(?start, ?end, ?hit, "crossing");
                crossings += 1;
            }
        }

        debug!(crossings, "ray cast finished");
        crossings % 2 == 1
    }
}

/// Tests `point` against `polygon` with default parameters.
#[must_use]
pub fn point_in_polygon(polygon: &Polygon, point: GeoPoint) -> bool {
    PointInPolygon::new(polygon, point).execute()
}

/// Heading through the middle of the widest gap between consecutive vertex bearings.
///
/// The ring's closing vertex is ignored. Gaps are taken between neighbours
/// in ascending order only; the wrap-around gap is not considered.
fn cast_heading(point: GeoPoint, ring: &[GeoPoint]) -> f64 {
    let open = &ring[..ring.len().saturating_sub(1)];
    let mut bearings: Vec<f64> = open.iter().map(|&v| bearing(point, v)).collect();
    bearings.sort_by(f64::total_cmp);

    let widest = bearings
        .windows(2)
        .map(|pair| (pair[0], (pair[1] - pair[0]).abs()))
        .fold(None, |best: Option<(f64, f64)>, (from, gap)| match best {
            Some((_, best_gap)) if best_gap >= gap => best,
            _ => Some((from, gap)),
        });

    widest.map_or(0.0, |(from, gap)| from + gap / 2.0)
}
