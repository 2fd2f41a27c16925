//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::defaults::{DEFAULT_GLOBAL_HOTKEYS, DEFAULT_JSON_LOG, DEFAULT_LOG_FILTER};
use crate::shortcuts::Platform;

/// Application configuration, read from JSON with camelCase keys.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Modifier naming scheme (default: the platform we run on)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Register global hotkeys with the OS (default: true)
    #[serde(default = "default_global_hotkeys")]
    pub global_hotkeys: bool,
    /// Extra accelerator token rewrites, e.g. `{"command": "cmd"}`
    #[serde(default)]
    pub synonyms: HashMap<String, String>,
    /// tracing filter used when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Also write JSONL logs to the log directory (default: false)
    #[serde(default = "default_json_log")]
    pub json_log: bool,
}

fn default_global_hotkeys() -> bool {
    DEFAULT_GLOBAL_HOTKEYS
}
fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
fn default_json_log() -> bool {
    DEFAULT_JSON_LOG
}

impl Default for Config {
    fn default() -> Self {
        Config {
            platform: None,
            global_hotkeys: DEFAULT_GLOBAL_HOTKEYS,
            synonyms: HashMap::new(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json_log: DEFAULT_JSON_LOG,
        }
    }
}
