//! Logging setup: a compact stderr layer plus an optional JSONL file layer.
//!
//! Filter precedence: `RUST_LOG`, then `--quiet`/`-v`, then config `log_level`.
//! File logging turns on when `READABILITY_LOG_PATH`, `READABILITY_LOG_DIR`,
//! or config `log_dir` is set.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "READABILITY_LOG_PATH";
const LOG_DIR_ENV: &str = "READABILITY_LOG_DIR";
const LOG_FILE_NAME: &str = "readability.jsonl";

/// Where log files go, if anywhere.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path; wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for `readability.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to the configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir: std::env::var_os(LOG_DIR_ENV)
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Resolve the log file as `(directory, file name)`.
    fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let name = path.file_name()?.to_string_lossy().into_owned();
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            return Some((dir.to_path_buf(), name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_NAME.to_string()))
    }
}

/// Build the log filter.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

const fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit so buffered file logs are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, &name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
