use std::mem;

use super::GeoPoint;

/// Initial great-circle bearing from `center` toward `direction`, in degrees `[-180, 180]`.
///
/// Negative bearings point west of the meridian through `center`. Identical
/// points yield `0`. Antipodal pairs have no defined bearing and yield NaN.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn bearing(center: GeoPoint, direction: GeoPoint) -> f64 {
    if center == direction {
        return 0.0;
    }

    let (sin_phi_a, cos_phi_a) = center.lat.to_radians().sin_cos();
    let (sin_phi_b, cos_phi_b) = direction.lat.to_radians().sin_cos();
    let cos_delta_lambda = (center.lon - direction.lon).to_radians().cos();

    // n = sin(central angle), z = sin(central angle) * cos(bearing)
    let cos_central = cos_delta_lambda * cos_phi_a * cos_phi_b + sin_phi_a * sin_phi_b;
    let mut n = (1.0 - cos_central * cos_central).sqrt();
    let mut z = cos_phi_a * sin_phi_b - cos_delta_lambda * cos_phi_b * sin_phi_a;

    // Keep |z / n| <= 1 so acos stays in its domain near the poles.
    if n.abs() < z.abs() {
        mem::swap(&mut n, &mut z);
    }

    let value = (z / n).acos().to_degrees();

    if center.lon > direction.lon {
        -value
    } else {
        value
    }
}

/// Wraps an angle into `[0, 360]` by whole turns.
///
/// Positive multiples of `360` map to `360`, zero and negative multiples to `0`.
/// Non-finite input yields NaN.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn bearing360(angle: f64) -> f64 {
    if !angle.is_finite() {
        return f64::NAN;
    }
    let wrapped = angle.rem_euclid(360.0);
    if wrapped == 0.0 && angle > 0.0 {
        360.0
    } else {
        wrapped
    }
}

/// Shorter angular difference between two bearings, in degrees `[0, 180]`.
#[must_use]
pub fn delta_angle(a1: f64, a2: f64) -> f64 {
    let delta = (bearing360(a1) - bearing360(a2)).abs();
    if delta > 180.0 {
        360.0 - delta
    } else {
        delta
    }
}
