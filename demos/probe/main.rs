//! Geosphere probe: tests points against a polygon and logs the ray cast.
//!
//! Usage:
//! ```text
//! cargo run --example probe                              # built-in sample
//! cargo run --example probe -- 8.46 46.78                # custom point
//! RUST_LOG=geosphere=trace cargo run --example probe     # every edge test
//! ```

use geosphere::{bearing, distance, radial_coordinates, simplify, GeoPoint, Polygon, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, DEBUG for geosphere.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geosphere=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("probe=info".parse().unwrap_or_default())
        .add_directive("geosphere=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let polygon = Polygon::close(vec![
        GeoPoint::new(8.313_217_163_085_938, 46.710_677_594_196_37),
        GeoPoint::new(8.556_976_318_359_373, 46.710_677_594_196_37),
        GeoPoint::new(8.556_976_318_359_373, 46.829_663_860_515_41),
        GeoPoint::new(8.313_217_163_085_938, 46.829_663_860_515_41),
    ])?;

    let args: Vec<f64> = std::env::args().skip(1).filter_map(|a| a.parse().ok()).collect();
    let points = match args.as_slice() {
        [lon, lat] => vec![GeoPoint::new(*lon, *lat)],
        _ => vec![
            GeoPoint::new(8.459_472_656_249_998, 46.779_373_682_055_635),
            GeoPoint::new(8.6, 46.78),
        ],
    };

    for point in points {
        tracing::info!(?point, inside = polygon.contains(point), "containment");
    }

    let origin = GeoPoint::new(9.0, 47.5);
    let target = GeoPoint::new(13.0, 49.2);
    tracing::info!(
        distance_m = distance(origin, target),
        bearing_deg = bearing(origin, target),
        "great circle"
    );

    let track: Vec<GeoPoint> = (0..12)
        .map(|i| radial_coordinates(origin, 45.0 + f64::from(i % 3), 500.0 * f64::from(i)))
        .collect();
    let thinned = simplify(&track, 20.0);
    tracing::info!(input = track.len(), output = thinned.len(), "simplify");

    Ok(())
}
