//! Configuration module - Hotkey naming scheme, capability flags and logging
//!
//! This module provides functionality for:
//! - Loading configuration from `<config dir>/hotkey-registry/config.json`
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_GLOBAL_HOTKEYS, DEFAULT_JSON_LOG, DEFAULT_LOG_FILTER};
pub use loader::{config_path, load_config, load_config_from};
pub use types::Config;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
