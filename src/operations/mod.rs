pub mod great_circle;
mod point_in_polygon;
mod simplify;

pub use great_circle::{checked_intersect, intersect};
pub use point_in_polygon::{
    point_in_polygon, ContainmentParams, PointInPolygon, COLLINEARITY_TOLERANCE_DEG,
    DEFAULT_CAST_MARGIN_M,
};
pub use simplify::{simplify, SimplifyPolyline};
