//! Containment tests on planar (projected) coordinates, e.g. EPSG:3857 meters.

use super::Point2;

/// An axis-aligned rectangle given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarRect {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl PlanarRect {
    /// Creates a rectangle from its min and max corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }
}

/// Which side of the line `p2 -> p3` the point `p1` lies on (sign of a cross term).
#[must_use]
pub fn sign(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Whether `point` lies within `rect`, boundary included.
#[must_use]
pub fn point_in_rectangle(rect: &PlanarRect, point: &Point2) -> bool {
    !(rect.min.x > point.x || rect.max.x < point.x || rect.min.y > point.y || rect.max.y < point.y)
}

/// Whether `point` lies within `triangle`, boundary included.
#[must_use]
pub fn point_in_triangle(triangle: &[Point2; 3], point: &Point2) -> bool {
    let d1 = sign(point, &triangle[0], &triangle[1]);
    let d2 = sign(point, &triangle[1], &triangle[2]);
    let d3 = sign(point, &triangle[2], &triangle[0]);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Whether two rectangles overlap. Touching edges count as overlap.
#[must_use]
pub fn rectangles_intersect(a: &PlanarRect, b: &PlanarRect) -> bool {
    !(a.min.x > b.max.x || a.max.x < b.min.x || a.min.y > b.max.y || a.max.y < b.min.y)
}
