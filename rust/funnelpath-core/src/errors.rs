use thiserror::Error;

/// Reasons a smoothing call fails. Callers are expected to fall back to the
/// unsmoothed path; retrying with the same input yields the same error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothError {
    #[error("no path to smooth")]
    InvalidInput,
    #[error("path does not carry a portal corridor")]
    WrongPathType,
    #[error("corridor has no portal edges")]
    EmptyCorridor,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("equal tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),
}
