use super::{Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Returns `v` scaled to length 1.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` has (near) zero length.
pub fn unit(v: &Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}
