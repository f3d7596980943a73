//! Sensor packages: an activity code plus positional readings, and the
//! dispatcher that turns them into a typed [`Training`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::WorkoutError;
use crate::activity::ActivityKind;
use crate::training::{Running, Session, SportsWalking, Swimming, Training, whole_count};

/// Raw package as delivered by the sensor block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn build(&self) -> Result<Training, WorkoutError> {
        build_record(&self.workout_type, &self.data)
    }
}

/// Selects the variant for `code` and binds `data` to its fields in order:
/// action, duration, weight, then the variant-specific trailing values.
pub fn build_record(code: &str, data: &[f64]) -> Result<Training, WorkoutError> {
    let kind = code.parse::<ActivityKind>().inspect_err(|_| {
        warn!(code, "rejected package with unknown activity code");
    })?;

    if data.len() != kind.arity() {
        warn!(
            code,
            expected = kind.arity(),
            actual = data.len(),
            "rejected package with wrong number of values"
        );
        return Err(WorkoutError::ArityMismatch {
            activity: kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let session = Session::new(whole_count("action", data[0])?, data[1], data[2])?;
    let training = match kind {
        ActivityKind::Running => Training::Running(Running::new(session)),
        ActivityKind::SportsWalking => {
            Training::SportsWalking(SportsWalking::new(session, data[3])?)
        }
        ActivityKind::Swimming => {
            Training::Swimming(Swimming::from_readings(session, data[3], data[4])?)
        }
    };
    debug!(code, "built training record");
    Ok(training)
}

/// The three packages the sensor block emits in its self-test.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reads a JSON array of packages from `path`.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>, WorkoutError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let packages: Vec<Package> = serde_json::from_str(&raw)?;
    debug!(
        path = %path.as_ref().display(),
        count = packages.len(),
        "loaded packages"
    );
    Ok(packages)
}
