use std::ops::Mul;

use super::vector::unit;
use super::{Matrix3, Vector3};
use crate::error::Result;

/// A 3x3 rotation matrix acting on column vectors.
///
/// Angles are in radians and follow the right-hand rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    matrix: Matrix3,
}

impl RotationMatrix {
    /// Rotation about the X axis.
    #[must_use]
    pub fn about_x(alpha: f64) -> Self {
        let (s, c) = alpha.sin_cos();
        #[rustfmt::skip]
        let matrix = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c,   -s,
            0.0, s,   c,
        );
        Self { matrix }
    }

    /// Rotation about the Y axis.
    #[must_use]
    pub fn about_y(alpha: f64) -> Self {
        let (s, c) = alpha.sin_cos();
        #[rustfmt::skip]
        let matrix = Matrix3::new(
            c,   0.0, s,
            0.0, 1.0, 0.0,
            -s,  0.0, c,
        );
        Self { matrix }
    }

    /// Rotation about the Z axis.
    #[must_use]
    pub fn about_z(alpha: f64) -> Self {
        let (s, c) = alpha.sin_cos();
        #[rustfmt::skip]
        let matrix = Matrix3::new(
            c,   -s,  0.0,
            s,   c,   0.0,
            0.0, 0.0, 1.0,
        );
        Self { matrix }
    }

    /// Rotation about an arbitrary axis (Rodrigues). The axis is normalized first.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the axis is zero-length.
    #[allow(clippy::many_single_char_names)]
    pub fn about_axis(axis: &Vector3, alpha: f64) -> Result<Self> {
        let axis = unit(axis)?;
        let (s, c) = alpha.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        #[allow(clippy::suspicious_operation_groupings)]
        #[rustfmt::skip]
        let matrix = Matrix3::new(
            t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
            t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
            t * x * z - s * y, t * y * z + s * x, t * z * z + c,
        );
        Ok(Self { matrix })
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Rotates `v`.
    #[must_use]
    pub fn apply(&self, v: &Vector3) -> Vector3 {
        self.matrix * v
    }
}

impl Mul<Vector3> for RotationMatrix {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.apply(&rhs)
    }
}
