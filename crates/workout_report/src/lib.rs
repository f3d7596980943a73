//! Report driver: turns sensor packages into one summary line each.

use std::io::Write;
use std::str::FromStr;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use workout_stats::Package;

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ReportError, ReportResult};

pub const FALLBACK_FILTER: &str = "info";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The fixed human-readable summary line.
    #[default]
    Text,
    /// One JSON object per report.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ReportError::Config(format!(
                "unknown output format `{other}`, expected `text` or `json`"
            ))),
        }
    }
}

/// Builds the log filter from `log_level`. Falls back to `info` when the
/// filter does not parse.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Builds every package in order and writes one line per report to `out`.
///
/// Stops at the first package that fails to build and returns its error;
/// lines already written stay written. Returns the number of lines written.
pub fn write_reports<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> ReportResult<usize> {
    let mut written = 0;
    for package in packages {
        let report = package.build()?.to_report();
        match format {
            OutputFormat::Text => writeln!(out, "{}", report.render())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        debug!(workout_type = %package.workout_type, "report written");
        written += 1;
    }
    out.flush()?;
    info!(written, "workout reports written");
    Ok(written)
}
