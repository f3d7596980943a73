use anyhow::Context;
use workout_report::{Config, env_filter, write_reports};
use workout_stats::{load_packages, sample_packages};

fn main() -> anyhow::Result<()> {
    // Configure from `WORKOUT_REPORT_*` env vars (log level falls back to `RUST_LOG`, then `info`).
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&config.log_level))
        .init();
    tracing::info!("workout_report: log filter: {}", config.log_level);

    let packages = match &config.packages_path {
        Some(path) => load_packages(path)
            .with_context(|| format!("failed to load packages from {}", path.display()))?,
        None => {
            tracing::info!("workout_report: no package file configured, using sample packages");
            sample_packages()
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_reports(&packages, config.format, &mut out)?;

    Ok(())
}
