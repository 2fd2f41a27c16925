use thiserror::Error;
use tracing::{error, warn};

use crate::shortcuts::ParseError;

/// Error severity for user-facing reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning, // recoverable, e.g. a rejected hotkey
    Error,   // operation failed
}

/// Domain-specific errors for hotkey registration
#[derive(Error, Debug)]
pub enum HotkeyError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("global hotkeys are not supported on this platform")]
    Unsupported,

    #[error("key code {0:#04x} has no OS hotkey equivalent")]
    UnmappableKey(u32),

    #[error("OS hotkey error: {0}")]
    Os(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HotkeyError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Parse(_) => ErrorSeverity::Error,
            Self::Unsupported => ErrorSeverity::Error,
            Self::UnmappableKey(_) => ErrorSeverity::Warning,
            Self::Os(_) => ErrorSeverity::Warning,
            Self::Config(_) => ErrorSeverity::Warning,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(e) => format!("Invalid hotkey: {}", e),
            Self::Unsupported => "Global hotkeys are not available on this system".to_string(),
            Self::UnmappableKey(code) => {
                format!("Key code {:#04x} cannot be used as a global hotkey", code)
            }
            Self::Os(msg) => format!("The system rejected the hotkey: {}", msg),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, HotkeyError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use hotkey_registry::error::ResultExt;
///
/// // Unregistering may fail if the OS already dropped the hotkey
/// provider.unregister(id).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = %err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = %err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
