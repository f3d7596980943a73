//! Workout statistics (distance, mean speed, calories) computed from raw
//! sensor packages for running, sports walking and swimming.

use thiserror::Error;

pub mod activity;
pub mod package;
pub mod report;
pub mod training;

pub use activity::ActivityKind;
pub use package::{Package, build_record, load_packages, sample_packages};
pub use report::Report;
pub use training::Training;

#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("unknown activity code: {0}")]
    UnknownActivity(String),
    #[error("{activity} package expects {expected} values, got {actual}")]
    ArityMismatch {
        activity: ActivityKind,
        expected: usize,
        actual: usize,
    },
    #[error("invalid {field} = {value}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
