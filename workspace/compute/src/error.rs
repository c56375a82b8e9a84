use thiserror::Error;

/// Error types for the compute layer
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Parallel vectors of a series disagree in length
    #[error("Series shape error: {0}")]
    SeriesShape(String),

    /// A selection window does not fit the series it was computed against
    #[error("Window out of bounds: {0}")]
    WindowOutOfBounds(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
