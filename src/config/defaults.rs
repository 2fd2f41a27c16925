//! Default configuration values

/// Global hotkeys are registered with the OS when the provider supports it
pub const DEFAULT_GLOBAL_HOTKEYS: bool = true;

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// JSONL file logging is opt-in
pub const DEFAULT_JSON_LOG: bool = false;

/// Directory name under the user's config directory
pub const CONFIG_DIR_NAME: &str = "hotkey-registry";

/// Config file name inside `CONFIG_DIR_NAME`
pub const CONFIG_FILE_NAME: &str = "config.json";
