//! `hotkeys` - inspect hotkey strings and key codes from the command line.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::{debug, error, warn};

use hotkey_registry::config::{self, Config};
use hotkey_registry::error::{ErrorSeverity, HotkeyError};
use hotkey_registry::logging::{self, LoggingOptions};
use hotkey_registry::shortcuts::{AcceleratorRegistry, KeyCodec, Platform};

/// Convert between hotkey strings and (modifiers, key) codes
#[derive(Parser, Debug)]
#[command(name = "hotkeys", version, about)]
struct Cli {
    /// Modifier naming scheme (defaults to config, then the running platform)
    #[arg(long, value_enum, global = true)]
    platform: Option<PlatformArg>,

    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a hotkey string such as "ctrl+alt+k"
    Parse {
        key: String,
        /// Use the OS global hotkey key codes
        #[arg(long)]
        global: bool,
    },
    /// Format modifier bits and a key code (decimal or 0x-prefixed hex)
    Format {
        #[arg(value_parser = parse_code)]
        modifiers: u32,
        #[arg(value_parser = parse_code)]
        key: u32,
        /// Use the OS global hotkey key codes
        #[arg(long)]
        global: bool,
    },
    /// List every known key name and its code
    Keys {
        /// Use the OS global hotkey key codes
        #[arg(long)]
        global: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    Macos,
    Windows,
    Linux,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Macos => Platform::MacOS,
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Linux => Platform::Linux,
        }
    }
}

fn parse_code(value: &str) -> std::result::Result<u32, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid code '{}': {}", value, e))
}

/// Log `err` at its severity and turn it into the message shown to the user.
fn report(err: HotkeyError) -> anyhow::Error {
    match err.severity() {
        ErrorSeverity::Warning => warn!(error = %err, "Command failed"),
        ErrorSeverity::Error => error!(error = %err, "Command failed"),
    }
    anyhow::anyhow!(err.user_message())
}

fn codec_for(config: &Config, global: bool) -> KeyCodec {
    if global {
        KeyCodec::global_hotkey()
    } else {
        AcceleratorRegistry::from_config(config).codec().clone()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if let Some(platform) = cli.platform {
        config.platform = Some(platform.into());
    }

    let _guard = logging::init(&LoggingOptions::from(&config));
    debug!(?cli, "Parsed arguments");

    match cli.command {
        Command::Parse { key, global } => {
            let codec = codec_for(&config, global);
            let chord = codec
                .str_to_key(&key)
                .map_err(|e| report(e.into()))?;
            let canonical = codec.key_to_str(chord.modifiers, chord.key);
            if cli.json {
                println!(
                    "{}",
                    json!({
                        "input": key,
                        "modifiers": chord.modifiers,
                        "key": chord.key,
                        "canonical": canonical,
                    })
                );
            } else {
                println!(
                    "modifiers={:#x} key={:#x} ({})",
                    chord.modifiers, chord.key, canonical
                );
            }
        }
        Command::Format {
            modifiers,
            key,
            global,
        } => {
            let text = codec_for(&config, global).key_to_str(modifiers, key);
            if cli.json {
                println!("{}", json!({ "modifiers": modifiers, "key": key, "hotkey": text }));
            } else {
                println!("{}", text);
            }
        }
        Command::Keys { global } => {
            let codec = codec_for(&config, global);
            let names = codec.keys().names();
            if cli.json {
                let entries: Vec<_> = names
                    .iter()
                    .map(|(name, code)| json!({ "name": name, "code": code }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for (name, code) in names {
                    println!("{:<16} {:#06x}", name, code);
                }
            }
        }
    }

    Ok(())
}
