//! Hotkey strings, key codes and per-control accelerator tables.
//!
//! This module provides:
//! - Key-code namespaces with precomputed name/code tables
//! - `KeyCodec` for `"CTRL+ALT+K"` <-> `(modifiers, key)` conversion
//! - `AcceleratorRegistry` for attaching accelerators to controls
//!
//! # Example
//!
//! ```ignore
//! use hotkey_registry::shortcuts::{KeyCodec, Platform};
//!
//! let codec = KeyCodec::accelerator(Platform::Linux);
//! let chord = codec.str_to_key("ctrl+alt+k")?;
//! assert_eq!(codec.key_to_str(chord.modifiers, chord.key), "CTRL+ALT+K");
//! ```

mod codec;
pub mod keycodes;
mod registry;
mod types;

#[cfg(test)]
#[path = "codec_tests.rs"]
mod codec_tests;


pub use codec::KeyCodec;
pub use keycodes::KeyTable;
pub use registry::{get_id, new_id, AcceleratorRegistry};
pub use types::{
    AccelModifiers, AcceleratorEntry, AcceleratorTable, CommandId, HotkeyModifiers, KeyChord,
    ParseError, Platform,
};
