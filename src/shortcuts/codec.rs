//! Conversion between hotkey strings and numeric chords.
//!
//! A `KeyCodec` bundles everything one namespace needs: the ordered modifier
//! display table, the modifier names accepted when parsing, the key table and
//! the token rewrites. The same algorithm then serves both the toolkit's
//! accelerators and OS-level global hotkeys.

use std::collections::HashMap;

use tracing::debug;

use super::keycodes::KeyTable;
use super::types::{AccelModifiers, HotkeyModifiers, KeyChord, ParseError, Platform};

const NONE: &str = "NONE";

/// String <-> `(modifiers, key)` translator for one key namespace.
#[derive(Clone, Debug)]
pub struct KeyCodec {
    /// Naming scheme; `None` for the virtual-key namespace.
    platform: Option<Platform>,
    /// Display order.
    modifiers: Vec<(u32, &'static str)>,
    modifier_names: HashMap<&'static str, u32>,
    keys: KeyTable,
    transpositions: HashMap<String, String>,
}

impl KeyCodec {
    /// Codec for the toolkit's accelerator tables.
    pub fn accelerator(platform: Platform) -> Self {
        let ctrl = AccelModifiers::CTRL.bits();
        let alt = AccelModifiers::ALT.bits();
        let shift = AccelModifiers::SHIFT.bits();

        let (modifiers, raw_ctrl) = if platform.is_macos() {
            let raw_ctrl = AccelModifiers::RAW_CTRL.bits();
            (
                vec![
                    (ctrl, "CMD"),
                    (alt, "OPT"),
                    (shift, "SHIFT"),
                    (raw_ctrl, "RAW_CTRL"),
                ],
                raw_ctrl,
            )
        } else {
            (vec![(ctrl, "CTRL"), (alt, "ALT"), (shift, "SHIFT")], ctrl)
        };

        let modifier_names = HashMap::from([
            ("NORMAL", 0),
            ("CTRL", ctrl),
            ("CMD", ctrl),
            ("RAW_CTRL", raw_ctrl),
            ("ALT", alt),
            ("OPT", alt),
            ("SHIFT", shift),
        ]);

        Self {
            platform: Some(platform),
            modifiers,
            modifier_names,
            keys: KeyTable::accelerator(platform),
            transpositions: HashMap::new(),
        }
    }

    /// Codec for OS-level global hotkeys (virtual-key codes, `MOD_*` flags).
    pub fn global_hotkey() -> Self {
        let ctrl = HotkeyModifiers::CONTROL.bits();
        let alt = HotkeyModifiers::ALT.bits();
        let shift = HotkeyModifiers::SHIFT.bits();
        let win = HotkeyModifiers::WIN.bits();

        Self {
            platform: None,
            modifiers: vec![(ctrl, "CTRL"), (alt, "ALT"), (shift, "SHIFT"), (win, "WIN")],
            modifier_names: HashMap::from([
                ("CONTROL", ctrl),
                ("ALT", alt),
                ("SHIFT", shift),
                ("WIN", win),
            ]),
            keys: KeyTable::virtual_keys(),
            transpositions: HashMap::from([("CTRL".to_string(), "CONTROL".to_string())]),
        }
    }

    /// Rewrite `from` to `to` before lookup. Both are matched uppercase.
    pub fn with_synonym(mut self, from: &str, to: &str) -> Self {
        self.transpositions
            .insert(from.trim().to_uppercase(), to.trim().to_uppercase());
        self
    }

    /// Modifier naming scheme of an accelerator codec.
    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    pub fn keys(&self) -> &KeyTable {
        &self.keys
    }

    /// Human-readable form of a chord, e.g. `(3, 75)` -> `"CTRL+ALT+K"`.
    pub fn key_to_str(&self, modifiers: u32, key: u32) -> String {
        debug!(modifiers, key, "Converting chord to string");
        let mut res = String::new();
        for &(bits, name) in &self.modifiers {
            if bits != 0 && modifiers & bits == bits {
                res.push_str(name);
                res.push('+');
            }
        }
        res.push_str(&self.key_name(key));
        res
    }

    /// Display name for a single key code.
    ///
    /// Named constants win, then the character with that code, then `NONE`.
    pub fn key_name(&self, key: u32) -> String {
        if key == 0 {
            return NONE.to_string();
        }
        if let Some(name) = self.keys.name(key) {
            return name.to_string();
        }
        char::from_u32(key)
            .filter(|c| !c.is_control())
            .map_or_else(|| NONE.to_string(), |c| c.to_string())
    }

    /// Code for a single key name, without modifiers.
    pub fn key_code(&self, name: &str) -> Option<u32> {
        let upper = name.trim().to_uppercase();
        self.keys.code(self.transpose(&upper))
    }

    /// Parse a string like `"CTRL+ALT+K"` into modifier bits and a key code.
    pub fn str_to_key(&self, value: &str) -> Result<KeyChord, ParseError> {
        debug!(value, "Converting string to chord");
        if value.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let tokens: Vec<&str> = value.split('+').map(str::trim).collect();
        let last = tokens.len() - 1;
        let mut modifiers = 0;
        let mut key: Option<u32> = None;
        let mut last_was_modifier = false;

        for (index, token) in tokens.iter().enumerate() {
            let upper = token.to_uppercase();
            let name = self.transpose(&upper);
            if let Some(&bits) = self.modifier_names.get(name) {
                modifiers |= bits;
                last_was_modifier = index == last;
            } else if let Some(code) = self.keys.code(name) {
                if key.is_some() {
                    return Err(ParseError::MultipleKeys(value.to_string()));
                }
                key = Some(code);
            } else if token.is_empty() {
                continue;
            } else if index != last {
                return Err(ParseError::UnknownToken {
                    input: value.to_string(),
                    token: token.to_string(),
                });
            } else if key.is_some() {
                // Nothing may follow a named key
                return Err(if token.chars().count() == 1 {
                    ParseError::MultipleKeys(value.to_string())
                } else {
                    ParseError::UnknownKey {
                        input: value.to_string(),
                        token: token.to_string(),
                    }
                });
            }
        }

        let key = match key {
            Some(code) => code,
            None => {
                debug!("No key name yet, falling back to character code");
                self.char_key(value, tokens[last], last_was_modifier)?
            }
        };

        Ok(KeyChord::new(modifiers, key))
    }

    fn char_key(&self, value: &str, token: &str, is_modifier: bool) -> Result<u32, ParseError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c.to_uppercase().next().unwrap_or(c) as u32),
            (None, _) => Err(ParseError::MissingKey(value.to_string())),
            _ if is_modifier => Err(ParseError::MissingKey(value.to_string())),
            _ => Err(ParseError::UnknownKey {
                input: value.to_string(),
                token: token.to_string(),
            }),
        }
    }

    fn transpose<'a>(&'a self, token: &'a str) -> &'a str {
        self.transpositions
            .get(token)
            .map_or(token, String::as_str)
    }
}
