//! Hotkey Registry - keyboard shortcut strings, accelerator tables and
//! global hotkeys.
//!
//! - [`shortcuts`] converts `"CTRL+ALT+K"` to and from `(modifiers, key)` and
//!   keeps per-control accelerator tables
//! - [`hotkeys`] registers system-wide hotkeys through a [`hotkeys::HotkeyProvider`]
//! - [`control`] is the seam to whatever UI toolkit owns the controls

pub mod config;
pub mod control;
pub mod error;
pub mod hotkeys;
pub mod logging;
pub mod shortcuts;

pub use control::{Control, ControlId, EventKind, Handler, HeadlessControl};
pub use error::{HotkeyError, ResultExt};
pub use hotkeys::{GlobalHotkeyRegistry, HotkeyProvider, UnsupportedHotkeys};
pub use shortcuts::{
    get_id, new_id, AcceleratorRegistry, CommandId, KeyChord, KeyCodec, ParseError, Platform,
};
