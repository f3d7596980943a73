use std::path::PathBuf;

use crate::OutputFormat;
use crate::error::ReportResult;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// JSON package file; the built-in sample packages are used when unset.
    pub packages_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> ReportResult<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration values through `get` so tests never touch the
    /// process environment.
    pub fn from_env_with<F>(mut get: F) -> ReportResult<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let packages_path = get("WORKOUT_REPORT_PACKAGES")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let format = match get("WORKOUT_REPORT_FORMAT") {
            Some(raw) => raw.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };
        let log_level = get("WORKOUT_REPORT_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.into());
        Ok(Self {
            packages_path,
            format,
            log_level,
        })
    }
}
