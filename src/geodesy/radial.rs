use super::{bearing360, GeoPoint, COORDINATE_DECIMALS, EARTH_RADIUS_M};
use crate::math::round;

/// Destination reached from `center` after `distance` meters along bearing `angle` (degrees).
///
/// A zero distance returns `center` untouched. A negative distance walks the
/// reverse bearing. The result is rounded to [`COORDINATE_DECIMALS`] places.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn radial_coordinates(center: GeoPoint, angle: f64, distance: f64) -> GeoPoint {
    if distance == 0.0 {
        return center;
    }

    let (angle, distance) = if distance < 0.0 {
        (angle + 180.0, -distance)
    } else {
        (angle, distance)
    };

    let angle = bearing360(angle);
    let hemisphere = if angle > 180.0 { -1.0 } else { 1.0 };

    let theta = distance / EARTH_RADIUS_M;
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_a, cos_a) = center.lat.to_radians().sin_cos();
    let cos_alpha = angle.to_radians().cos();

    let sin_lat = cos_alpha * cos_a * sin_theta + sin_a * cos_theta;
    let lat = sin_lat.asin().to_degrees();

    // n = cos(lat), z = cos(lat) * cos(delta lon)
    let mut n = (1.0 - sin_lat * sin_lat).sqrt();
    let z = cos_theta * cos_a - cos_alpha * sin_theta * sin_a;
    if z > n {
        n = z;
    }
    let lon = center.lon + (z / n).acos().to_degrees() * hemisphere;

    GeoPoint::new(round(lon, COORDINATE_DECIMALS), round(lat, COORDINATE_DECIMALS))
}
