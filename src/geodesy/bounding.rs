#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// An axis-aligned rectangle in longitude/latitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingRectangle {
    /// South-west corner `(min lon, min lat)`.
    pub min: GeoPoint,
    /// North-east corner `(max lon, max lat)`.
    pub max: GeoPoint,
}

impl BoundingRectangle {
    /// Whether `point` lies strictly inside, boundary excluded.
    #[must_use]
    pub fn strictly_contains(&self, point: GeoPoint) -> bool {
        self.min.lon < point.lon
            && self.max.lon > point.lon
            && self.min.lat < point.lat
            && self.max.lat > point.lat
    }
}

/// Smallest lon/lat rectangle enclosing `points`.
///
/// An empty slice yields the degenerate rectangle at `(0, 0)`.
/// No antimeridian handling is done.
#[must_use]
pub fn bounding_rectangle(points: &[GeoPoint]) -> BoundingRectangle {
    if points.is_empty() {
        return BoundingRectangle::default();
    }

    points.iter().fold(
        BoundingRectangle {
            min: GeoPoint::new(180.0, 90.0),
            max: GeoPoint::new(-180.0, -90.0),
        },
        |acc, p| BoundingRectangle {
            min: GeoPoint::new(acc.min.lon.min(p.lon), acc.min.lat.min(p.lat)),
            max: GeoPoint::new(acc.max.lon.max(p.lon), acc.max.lat.max(p.lat)),
        },
    )
}
