//! Error types for the report driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("workout error: {0}")]
    Workout(#[from] workout_stats::WorkoutError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
