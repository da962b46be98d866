use thiserror::Error;

/// Top-level error type for the archgeo geometry core.
#[derive(Debug, Error)]
pub enum ArchgeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised when a geometric value fails validation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid point: expected 2 or 3 finite coordinates, got {0:?}")]
    InvalidPoint(Vec<f64>),

    #[error("dimension mismatch: {expected}D vs {found}D")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("degenerate segment: endpoints coincide at {0:?}")]
    DegenerateSegment(Vec<f64>),

    #[error("polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to operations (curve sampling, distribution, queries).
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`ArchgeoError`].
pub type Result<T> = std::result::Result<T, ArchgeoError>;
