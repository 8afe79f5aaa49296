//! Error types for steering_bench

use std::fmt;

/// Main error type for the benchmark harness
#[derive(Debug)]
pub enum BenchError {
    /// Requested steering implementation is not in the registry
    UnknownImplementation(String),
    /// Statistics requested over an empty sample sequence
    EmptySampleSet,
    /// Invalid configuration parameter
    InvalidParameter(String),
    /// I/O error while persisting benchmark records
    IoError(std::io::Error),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::UnknownImplementation(id) => {
                write!(f, "Unknown steering implementation: {}", id)
            }
            BenchError::EmptySampleSet => write!(f, "Statistics over an empty sample set"),
            BenchError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            BenchError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(e: std::io::Error) -> Self {
        BenchError::IoError(e)
    }
}

/// Result type alias for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;
