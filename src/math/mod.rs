pub mod planar;
pub mod rotation;
pub mod vector;

pub use rotation::RotationMatrix;

/// 2D point type for planar (projected) coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D vector type. Either an ECEF position in meters or a plain direction.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rounds `value` half away from zero to `digits` decimal places.
#[must_use]
pub fn round(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
