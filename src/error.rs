use thiserror::Error;

/// Top-level error type for the geosphere toolkit.
#[derive(Debug, Error)]
pub enum GeosphereError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

/// Errors related to vector and great-circle computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("great-circle planes are parallel, intersection is undefined")]
    ParallelPlanes,

    #[error("non-finite result in {0}")]
    NonFinite(&'static str),
}

/// Errors raised while building a polygon ring.
#[derive(Debug, Error)]
pub enum PolygonError {
    #[error("polygon needs at least 3 distinct vertices, got {distinct}")]
    TooFewVertices { distinct: usize },

    #[error("polygon ring is not closed")]
    RingNotClosed,
}

/// Convenience type alias for results using [`GeosphereError`].
pub type Result<T> = std::result::Result<T, GeosphereError>;
