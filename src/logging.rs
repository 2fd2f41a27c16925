//! Structured logging: compact stderr output plus optional JSONL file.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hotkey_registry::logging::{self, LoggingOptions};
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init(&LoggingOptions::default());
//!
//! tracing::info!(key = "CTRL+ALT+K", "Hotkey registered");
//! ```
//!
//! # JSONL Output Format
//!
//! Each line is a valid JSON object:
//! ```json
//! {"timestamp":"2026-01-05T10:30:45.123Z","level":"INFO","target":"hotkey_registry::hotkeys","fields":{"message":"Registered global hotkey","key":"CTRL+ALT+K"}}
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, DEFAULT_JSON_LOG, DEFAULT_LOG_FILTER};

const LOG_FILE_NAME: &str = "hotkey-registry.jsonl";

/// What `init` sets up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    /// Filter directives used when RUST_LOG is unset or invalid
    pub filter: String,
    /// Also append JSONL records to [`log_path`]
    pub json_file: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json_file: DEFAULT_JSON_LOG,
        }
    }
}

impl From<&Config> for LoggingOptions {
    fn from(config: &Config) -> Self {
        Self {
            filter: config.log_filter.clone(),
            json_file: config.json_log,
        }
    }
}

/// Guard that must be kept alive for the duration of the program.
/// Dropping it flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
pub fn init(options: &LoggingOptions) -> LoggingGuard {
    let env_filter = build_filter(&options.filter);

    let (json_layer, file_guard) = match options.json_file.then(open_log_file).flatten() {
        Some(file) => {
            // Non-blocking writer so hotkey callbacks never wait on disk
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::debug!(
        json_file = options.json_file,
        log_path = %log_path().display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// RUST_LOG wins; otherwise `fallback`, otherwise the default filter.
fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn open_log_file() -> Option<fs::File> {
    let dir = log_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
        return None;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
        .map_err(|e| eprintln!("[LOGGING] Failed to open log file: {}", e))
        .ok()
}

/// Log directory (`<data dir>/hotkey-registry/logs`)
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("hotkey-registry").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("hotkey-registry-logs"))
}

/// Path to the JSONL log file
pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_config() {
        let config = Config {
            log_filter: "hotkey_registry=trace".to_string(),
            json_log: true,
            ..Config::default()
        };
        let options = LoggingOptions::from(&config);
        assert_eq!(options.filter, "hotkey_registry=trace");
        assert!(options.json_file);
    }

    #[test]
    fn test_default_options() {
        let options = LoggingOptions::default();
        assert_eq!(options.filter, "info");
        assert!(!options.json_file);
    }

    #[test]
    fn test_log_path_is_jsonl_in_log_dir() {
        let path = log_path();
        assert_eq!(path.parent(), Some(log_dir().as_path()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jsonl"));
    }
}
