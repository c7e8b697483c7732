//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "NEETHI_LOG";

const LOG_FILE_NAME: &str = "neethi.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/neethi/logs/` so they never collide
/// with the terminal the TUI owns. Log level is controlled by `NEETHI_LOG`.
///
/// # Examples
/// ```bash
/// NEETHI_LOG=debug neethi
/// NEETHI_LOG=neethi_client=trace neethi --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Neethi starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `NEETHI_LOG` is unset or unparsable
fn default_filter() -> &'static str {
    "neethi=info,neethi_app=info,neethi_client=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("neethi").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_live_under_neethi_dir() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("neethi/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter()).is_ok());
    }
}
