use super::{bounding_rectangle, BoundingRectangle, GeoPoint};
use crate::error::{PolygonError, Result};

/// Minimum number of distinct vertices of a valid ring.
const MIN_DISTINCT_VERTICES: usize = 3;

/// A closed ring of geographic vertices whose edges are great-circle arcs.
///
/// The first and last vertex are equal. Winding order is not significant.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    ring: Vec<GeoPoint>,
}

impl Polygon {
    /// Creates a polygon from an already closed ring.
    ///
    /// # Errors
    ///
    /// - `PolygonError::RingNotClosed` if the last vertex differs from the first
    /// - `PolygonError::TooFewVertices` if the ring has fewer than 3 distinct vertices
    pub fn new(ring: Vec<GeoPoint>) -> Result<Self> {
        if ring.first() != ring.last() {
            return Err(PolygonError::RingNotClosed.into());
        }

        let open = &ring[..ring.len().saturating_sub(1)];
        let distinct = count_distinct(open, MIN_DISTINCT_VERTICES);
        if distinct < MIN_DISTINCT_VERTICES {
            return Err(PolygonError::TooFewVertices { distinct }.into());
        }

        Ok(Self { ring })
    }

    /// Creates a polygon, appending the closing vertex when it is missing.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::TooFewVertices` if fewer than 3 distinct vertices are given.
    pub fn close(mut points: Vec<GeoPoint>) -> Result<Self> {
        if let Some(&first) = points.first() {
            if points.last() != Some(&first) {
                points.push(first);
            }
        }
        Self::new(points)
    }

    /// The closed ring, closing vertex included.
    #[must_use]
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.ring
    }

    /// Number of edges of the ring.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.ring.len() - 1
    }

    /// Lon/lat bounding rectangle of the ring.
    #[must_use]
    pub fn bounding_rectangle(&self) -> BoundingRectangle {
        bounding_rectangle(&self.ring)
    }

    /// Whether `point` lies inside the polygon, with default containment parameters.
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        crate::operations::PointInPolygon::new(self, point).execute()
    }
}

/// Counts distinct points, stopping once `limit` is reached.
fn count_distinct(points: &[GeoPoint], limit: usize) -> usize {
    let mut seen: Vec<GeoPoint> = Vec::with_capacity(limit);
    for p in points {
        if !seen.contains(p) {
            seen.push(*p);
            if seen.len() == limit {
                break;
            }
        }
    }
    seen.len()
}
