//! Great-circle geodesy on a WGS84-radius sphere.
//!
//! All public coordinates are WGS84 / EPSG:4326 degrees, longitude first.

mod bearing;
mod bounding;
mod distance;
mod polygon;
mod radial;

pub use bearing::{bearing, bearing360, delta_angle};
pub use bounding::{bounding_rectangle, BoundingRectangle};
pub use distance::distance;
pub use polygon::Polygon;
pub use radial::radial_coordinates;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::Vector3;

/// Radius of the WGS84 sphere in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// One nautical mile in meters.
pub const NAUTICAL_MILE_M: f64 = 1852.0;

/// Decimal places kept on projected coordinates (~0.1 m).
pub const COORDINATE_DECIMALS: i32 = 6;

/// A geographic position in degrees, longitude first.
///
/// No range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// Longitude in degrees, east positive.
    pub lon: f64,
    /// Latitude in degrees, north positive.
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a point from longitude and latitude, in that order.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Earth-centered Cartesian position in meters.
    #[must_use]
    pub fn to_ecef(&self) -> Vector3 {
        let (sin_lat, cos_lat) = self.lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.lon.to_radians().sin_cos();
        Vector3::new(
            EARTH_RADIUS_M * cos_lat * cos_lon,
            EARTH_RADIUS_M * cos_lat * sin_lon,
            EARTH_RADIUS_M * sin_lat,
        )
    }

    /// Whether both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}
