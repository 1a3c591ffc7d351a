use super::{GeoPoint, COORDINATE_DECIMALS, EARTH_RADIUS_M};
use crate::math::round;

/// Great-circle distance between two points, rounded to whole meters.
///
/// The result is always integral (or NaN for non-finite input).
///
/// Points equal after rounding to [`COORDINATE_DECIMALS`] are exactly 0 apart.
/// The cosine of the central angle is clamped to `[-1, 1]` before `acos`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    if round(a.lat, COORDINATE_DECIMALS) == round(b.lat, COORDINATE_DECIMALS)
        && round(a.lon, COORDINATE_DECIMALS) == round(b.lon, COORDINATE_DECIMALS)
    {
        return 0.0;
    }

    let v1 = a.to_ecef();
    let v2 = b.to_ecef();
    let cos_angle = (v1.dot(&v2) / (v1.norm() * v2.norm())).clamp(-1.0, 1.0);

    (cos_angle.acos() * EARTH_RADIUS_M).round()
}
