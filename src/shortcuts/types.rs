//! Core hotkey types.
//!
//! This module provides:
//! - `Platform` - Which modifier naming scheme applies (CMD/OPT on macOS, CTRL/ALT elsewhere)
//! - `AccelModifiers` / `HotkeyModifiers` - Modifier bit sets for accelerators and OS hotkeys
//! - `KeyChord` - A numeric `(modifiers, key)` pair
//! - `CommandId` - Identifier correlating a binding with its handler
//! - `AcceleratorEntry` / `AcceleratorTable` - Per-control accelerator bookkeeping
//! - `ParseError` - Detailed parse errors for user feedback

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a hotkey string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("hotkey string is empty")]
    Empty,
    #[error("hotkey '{0}' has no key, only modifiers")]
    MissingKey(String),
    #[error("multiple keys specified in '{0}'")]
    MultipleKeys(String),
    #[error("unknown key '{token}' in '{input}'")]
    UnknownKey { input: String, token: String },
    #[error("unknown token '{token}' in '{input}'")]
    UnknownToken { input: String, token: String },
}

/// Platform enum selecting the modifier naming scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(alias = "mac", alias = "darwin")]
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Platform::Linux
        }
    }

    pub fn is_macos(self) -> bool {
        self == Platform::MacOS
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Modifier flags understood by the toolkit's accelerator tables.
    ///
    /// On macOS `CTRL` is the Command key and `RAW_CTRL` the physical
    /// Control key. Elsewhere the two are the same key and `RAW_CTRL`
    /// never appears in parsed chords.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AccelModifiers: u32 {
        const ALT = 0x1;
        const CTRL = 0x2;
        const SHIFT = 0x4;
        const RAW_CTRL = 0x8;
    }
}

bitflags! {
    /// Modifier flags for OS-level global hotkeys (Win32 `MOD_*` values).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HotkeyModifiers: u32 {
        const ALT = 0x1;
        const CONTROL = 0x2;
        const SHIFT = 0x4;
        const WIN = 0x8;
    }
}

/// A numeric hotkey: modifier bits plus a single key code.
///
/// The meaning of both fields depends on the namespace of the codec that
/// produced it (toolkit accelerator codes or OS virtual-key codes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyChord {
    pub modifiers: u32,
    pub key: u32,
}

impl KeyChord {
    pub fn new(modifiers: u32, key: u32) -> Self {
        Self { modifiers, key }
    }
}

impl From<(u32, u32)> for KeyChord {
    fn from((modifiers, key): (u32, u32)) -> Self {
        Self { modifiers, key }
    }
}

/// Identifier correlating an event binding with its handler and table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommandId(pub u32);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One accelerator bound on a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AcceleratorEntry {
    pub modifiers: u32,
    pub key: u32,
    pub id: CommandId,
}

impl AcceleratorEntry {
    pub fn new(chord: KeyChord, id: CommandId) -> Self {
        Self {
            modifiers: chord.modifiers,
            key: chord.key,
            id,
        }
    }

    pub fn chord(&self) -> KeyChord {
        KeyChord::new(self.modifiers, self.key)
    }
}

/// Snapshot of a control's accelerators, as applied to the control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceleratorTable {
    entries: Vec<AcceleratorEntry>,
}

impl AcceleratorTable {
    pub fn new(entries: Vec<AcceleratorEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AcceleratorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id bound to the chord, first entry wins when a chord was added twice.
    pub fn find(&self, chord: KeyChord) -> Option<CommandId> {
        self.entries
            .iter()
            .find(|entry| entry.chord() == chord)
            .map(|entry| entry.id)
    }
}
