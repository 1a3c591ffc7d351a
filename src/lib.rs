//! Spherical geodesy on WGS84 coordinates: great-circle distance and bearing,
//! radial projection, point-in-polygon with geodesic edges and polyline
//! simplification, on top of `nalgebra` vector algebra.

pub mod error;
pub mod geodesy;
pub mod math;
pub mod operations;

pub use error::{GeosphereError, Result};
pub use geodesy::{
    bearing, bearing360, bounding_rectangle, delta_angle, distance, radial_coordinates,
    BoundingRectangle, GeoPoint, Polygon, EARTH_RADIUS_M, NAUTICAL_MILE_M,
};
pub use operations::{point_in_polygon, simplify, ContainmentParams, PointInPolygon, SimplifyPolyline};
