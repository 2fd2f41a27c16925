//! Key-code namespaces and the precomputed name/code tables built from them.
//!
//! Two namespaces exist:
//! - `accel` - codes understood by the toolkit's accelerator tables
//! - `vk` - Win32 virtual-key codes used for OS-level global hotkeys
//!
//! Letters and digits have no named constant in either namespace. They are
//! addressed by their (uppercase) character code.

use std::collections::HashMap;

use super::types::Platform;

/// Toolkit accelerator key codes.
pub mod accel {
    pub const NONE: u32 = 0;
    pub const BACK: u32 = 8;
    pub const TAB: u32 = 9;
    pub const RETURN: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = 32;
    pub const DELETE: u32 = 127;
    pub const START: u32 = 300;
    pub const CANCEL: u32 = 303;
    pub const CLEAR: u32 = 305;
    pub const SHIFT: u32 = 306;
    pub const ALT: u32 = 307;
    pub const CONTROL: u32 = 308;
    pub const MENU: u32 = 309;
    pub const PAUSE: u32 = 310;
    pub const CAPITAL: u32 = 311;
    pub const END: u32 = 312;
    pub const HOME: u32 = 313;
    pub const LEFT: u32 = 314;
    pub const UP: u32 = 315;
    pub const RIGHT: u32 = 316;
    pub const DOWN: u32 = 317;
    pub const SELECT: u32 = 318;
    pub const PRINT: u32 = 319;
    pub const EXECUTE: u32 = 320;
    pub const SNAPSHOT: u32 = 321;
    pub const INSERT: u32 = 322;
    pub const HELP: u32 = 323;
    pub const NUMPAD0: u32 = 324;
    pub const NUMPAD1: u32 = 325;
    pub const NUMPAD2: u32 = 326;
    pub const NUMPAD3: u32 = 327;
    pub const NUMPAD4: u32 = 328;
    pub const NUMPAD5: u32 = 329;
    pub const NUMPAD6: u32 = 330;
    pub const NUMPAD7: u32 = 331;
    pub const NUMPAD8: u32 = 332;
    pub const NUMPAD9: u32 = 333;
    pub const MULTIPLY: u32 = 334;
    pub const ADD: u32 = 335;
    pub const SEPARATOR: u32 = 336;
    pub const SUBTRACT: u32 = 337;
    pub const DECIMAL: u32 = 338;
    pub const DIVIDE: u32 = 339;
    pub const F1: u32 = 340;
    pub const F2: u32 = 341;
    pub const F3: u32 = 342;
    pub const F4: u32 = 343;
    pub const F5: u32 = 344;
    pub const F6: u32 = 345;
    pub const F7: u32 = 346;
    pub const F8: u32 = 347;
    pub const F9: u32 = 348;
    pub const F10: u32 = 349;
    pub const F11: u32 = 350;
    pub const F12: u32 = 351;
    pub const F13: u32 = 352;
    pub const F14: u32 = 353;
    pub const F15: u32 = 354;
    pub const F16: u32 = 355;
    pub const F17: u32 = 356;
    pub const F18: u32 = 357;
    pub const F19: u32 = 358;
    pub const F20: u32 = 359;
    pub const F21: u32 = 360;
    pub const F22: u32 = 361;
    pub const F23: u32 = 362;
    pub const F24: u32 = 363;
    pub const NUMLOCK: u32 = 364;
    pub const SCROLL: u32 = 365;
    pub const PAGEUP: u32 = 366;
    pub const PAGEDOWN: u32 = 367;
    pub const NUMPAD_SPACE: u32 = 368;
    pub const NUMPAD_TAB: u32 = 369;
    pub const NUMPAD_ENTER: u32 = 370;
    pub const NUMPAD_F1: u32 = 371;
    pub const NUMPAD_F2: u32 = 372;
    pub const NUMPAD_F3: u32 = 373;
    pub const NUMPAD_F4: u32 = 374;
    pub const NUMPAD_HOME: u32 = 375;
    pub const NUMPAD_LEFT: u32 = 376;
    pub const NUMPAD_UP: u32 = 377;
    pub const NUMPAD_RIGHT: u32 = 378;
    pub const NUMPAD_DOWN: u32 = 379;
    pub const NUMPAD_PAGEUP: u32 = 380;
    pub const NUMPAD_PAGEDOWN: u32 = 381;
    pub const NUMPAD_END: u32 = 382;
    pub const NUMPAD_BEGIN: u32 = 383;
    pub const NUMPAD_INSERT: u32 = 384;
    pub const NUMPAD_DELETE: u32 = 385;
    pub const NUMPAD_EQUAL: u32 = 386;
    pub const NUMPAD_MULTIPLY: u32 = 387;
    pub const NUMPAD_ADD: u32 = 388;
    pub const NUMPAD_SEPARATOR: u32 = 389;
    pub const NUMPAD_SUBTRACT: u32 = 390;
    pub const NUMPAD_DECIMAL: u32 = 391;
    pub const NUMPAD_DIVIDE: u32 = 392;
    pub const WINDOWS_LEFT: u32 = 393;
    pub const WINDOWS_RIGHT: u32 = 394;
    pub const WINDOWS_MENU: u32 = 395;
    /// Physical Control key on macOS, where `CONTROL` is the Command key.
    pub const RAW_CONTROL_MACOS: u32 = 396;
}

/// Win32 virtual-key codes.
pub mod vk {
    pub const NONE: u32 = 0x00;
    pub const BACK: u32 = 0x08;
    pub const TAB: u32 = 0x09;
    pub const CLEAR: u32 = 0x0C;
    pub const RETURN: u32 = 0x0D;
    pub const SHIFT: u32 = 0x10;
    pub const CONTROL: u32 = 0x11;
    pub const MENU: u32 = 0x12;
    pub const PAUSE: u32 = 0x13;
    pub const CAPITAL: u32 = 0x14;
    pub const ESCAPE: u32 = 0x1B;
    pub const SPACE: u32 = 0x20;
    pub const PRIOR: u32 = 0x21;
    pub const NEXT: u32 = 0x22;
    pub const END: u32 = 0x23;
    pub const HOME: u32 = 0x24;
    pub const LEFT: u32 = 0x25;
    pub const UP: u32 = 0x26;
    pub const RIGHT: u32 = 0x27;
    pub const DOWN: u32 = 0x28;
    pub const SELECT: u32 = 0x29;
    pub const PRINT: u32 = 0x2A;
    pub const EXECUTE: u32 = 0x2B;
    pub const SNAPSHOT: u32 = 0x2C;
    pub const INSERT: u32 = 0x2D;
    pub const DELETE: u32 = 0x2E;
    pub const HELP: u32 = 0x2F;
    pub const LWIN: u32 = 0x5B;
    pub const RWIN: u32 = 0x5C;
    pub const APPS: u32 = 0x5D;
    pub const NUMPAD0: u32 = 0x60;
    pub const NUMPAD1: u32 = 0x61;
    pub const NUMPAD2: u32 = 0x62;
    pub const NUMPAD3: u32 = 0x63;
    pub const NUMPAD4: u32 = 0x64;
    pub const NUMPAD5: u32 = 0x65;
    pub const NUMPAD6: u32 = 0x66;
    pub const NUMPAD7: u32 = 0x67;
    pub const NUMPAD8: u32 = 0x68;
    pub const NUMPAD9: u32 = 0x69;
    pub const MULTIPLY: u32 = 0x6A;
    pub const ADD: u32 = 0x6B;
    pub const SEPARATOR: u32 = 0x6C;
    pub const SUBTRACT: u32 = 0x6D;
    pub const DECIMAL: u32 = 0x6E;
    pub const DIVIDE: u32 = 0x6F;
    pub const F1: u32 = 0x70;
    pub const F2: u32 = 0x71;
    pub const F3: u32 = 0x72;
    pub const F4: u32 = 0x73;
    pub const F5: u32 = 0x74;
    pub const F6: u32 = 0x75;
    pub const F7: u32 = 0x76;
    pub const F8: u32 = 0x77;
    pub const F9: u32 = 0x78;
    pub const F10: u32 = 0x79;
    pub const F11: u32 = 0x7A;
    pub const F12: u32 = 0x7B;
    pub const F13: u32 = 0x7C;
    pub const F14: u32 = 0x7D;
    pub const F15: u32 = 0x7E;
    pub const F16: u32 = 0x7F;
    pub const F17: u32 = 0x80;
    pub const F18: u32 = 0x81;
    pub const F19: u32 = 0x82;
    pub const F20: u32 = 0x83;
    pub const F21: u32 = 0x84;
    pub const F22: u32 = 0x85;
    pub const F23: u32 = 0x86;
    pub const F24: u32 = 0x87;
    pub const NUMLOCK: u32 = 0x90;
    pub const SCROLL: u32 = 0x91;
    pub const OEM_1: u32 = 0xBA;
    pub const OEM_PLUS: u32 = 0xBB;
    pub const OEM_COMMA: u32 = 0xBC;
    pub const OEM_MINUS: u32 = 0xBD;
    pub const OEM_PERIOD: u32 = 0xBE;
    pub const OEM_2: u32 = 0xBF;
    pub const OEM_3: u32 = 0xC0;
    pub const OEM_4: u32 = 0xDB;
    pub const OEM_5: u32 = 0xDC;
    pub const OEM_6: u32 = 0xDD;
    pub const OEM_7: u32 = 0xDE;
}

const ACCEL_KEYS: &[(&str, u32)] = &[
    ("BACK", accel::BACK),
    ("TAB", accel::TAB),
    ("RETURN", accel::RETURN),
    ("ESCAPE", accel::ESCAPE),
    ("SPACE", accel::SPACE),
    ("DELETE", accel::DELETE),
    ("START", accel::START),
    ("CANCEL", accel::CANCEL),
    ("CLEAR", accel::CLEAR),
    ("SHIFT", accel::SHIFT),
    ("ALT", accel::ALT),
    ("CONTROL", accel::CONTROL),
    ("MENU", accel::MENU),
    ("PAUSE", accel::PAUSE),
    ("CAPITAL", accel::CAPITAL),
    ("END", accel::END),
    ("HOME", accel::HOME),
    ("LEFT", accel::LEFT),
    ("UP", accel::UP),
    ("RIGHT", accel::RIGHT),
    ("DOWN", accel::DOWN),
    ("SELECT", accel::SELECT),
    ("PRINT", accel::PRINT),
    ("EXECUTE", accel::EXECUTE),
    ("SNAPSHOT", accel::SNAPSHOT),
    ("INSERT", accel::INSERT),
    ("HELP", accel::HELP),
    ("NUMPAD0", accel::NUMPAD0),
    ("NUMPAD1", accel::NUMPAD1),
    ("NUMPAD2", accel::NUMPAD2),
    ("NUMPAD3", accel::NUMPAD3),
    ("NUMPAD4", accel::NUMPAD4),
    ("NUMPAD5", accel::NUMPAD5),
    ("NUMPAD6", accel::NUMPAD6),
    ("NUMPAD7", accel::NUMPAD7),
    ("NUMPAD8", accel::NUMPAD8),
    ("NUMPAD9", accel::NUMPAD9),
    ("MULTIPLY", accel::MULTIPLY),
    ("ADD", accel::ADD),
    ("SEPARATOR", accel::SEPARATOR),
    ("SUBTRACT", accel::SUBTRACT),
    ("DECIMAL", accel::DECIMAL),
    ("DIVIDE", accel::DIVIDE),
    ("F1", accel::F1),
    ("F2", accel::F2),
    ("F3", accel::F3),
    ("F4", accel::F4),
    ("F5", accel::F5),
    ("F6", accel::F6),
    ("F7", accel::F7),
    ("F8", accel::F8),
    ("F9", accel::F9),
    ("F10", accel::F10),
    ("F11", accel::F11),
    ("F12", accel::F12),
    ("F13", accel::F13),
    ("F14", accel::F14),
    ("F15", accel::F15),
    ("F16", accel::F16),
    ("F17", accel::F17),
    ("F18", accel::F18),
    ("F19", accel::F19),
    ("F20", accel::F20),
    ("F21", accel::F21),
    ("F22", accel::F22),
    ("F23", accel::F23),
    ("F24", accel::F24),
    ("NUMLOCK", accel::NUMLOCK),
    ("SCROLL", accel::SCROLL),
    ("PAGEUP", accel::PAGEUP),
    ("PAGEDOWN", accel::PAGEDOWN),
    ("NUMPAD_SPACE", accel::NUMPAD_SPACE),
    ("NUMPAD_TAB", accel::NUMPAD_TAB),
    ("NUMPAD_ENTER", accel::NUMPAD_ENTER),
    ("NUMPAD_F1", accel::NUMPAD_F1),
    ("NUMPAD_F2", accel::NUMPAD_F2),
    ("NUMPAD_F3", accel::NUMPAD_F3),
    ("NUMPAD_F4", accel::NUMPAD_F4),
    ("NUMPAD_HOME", accel::NUMPAD_HOME),
    ("NUMPAD_LEFT", accel::NUMPAD_LEFT),
    ("NUMPAD_UP", accel::NUMPAD_UP),
    ("NUMPAD_RIGHT", accel::NUMPAD_RIGHT),
    ("NUMPAD_DOWN", accel::NUMPAD_DOWN),
    ("NUMPAD_PAGEUP", accel::NUMPAD_PAGEUP),
    ("NUMPAD_PAGEDOWN", accel::NUMPAD_PAGEDOWN),
    ("NUMPAD_END", accel::NUMPAD_END),
    ("NUMPAD_BEGIN", accel::NUMPAD_BEGIN),
    ("NUMPAD_INSERT", accel::NUMPAD_INSERT),
    ("NUMPAD_DELETE", accel::NUMPAD_DELETE),
    ("NUMPAD_EQUAL", accel::NUMPAD_EQUAL),
    ("NUMPAD_MULTIPLY", accel::NUMPAD_MULTIPLY),
    ("NUMPAD_ADD", accel::NUMPAD_ADD),
    ("NUMPAD_SEPARATOR", accel::NUMPAD_SEPARATOR),
    ("NUMPAD_SUBTRACT", accel::NUMPAD_SUBTRACT),
    ("NUMPAD_DECIMAL", accel::NUMPAD_DECIMAL),
    ("NUMPAD_DIVIDE", accel::NUMPAD_DIVIDE),
    ("WINDOWS_LEFT", accel::WINDOWS_LEFT),
    ("WINDOWS_RIGHT", accel::WINDOWS_RIGHT),
    ("WINDOWS_MENU", accel::WINDOWS_MENU),
];

const VIRTUAL_KEYS: &[(&str, u32)] = &[
    ("BACK", vk::BACK),
    ("TAB", vk::TAB),
    ("CLEAR", vk::CLEAR),
    ("RETURN", vk::RETURN),
    ("SHIFT", vk::SHIFT),
    ("CONTROL", vk::CONTROL),
    ("MENU", vk::MENU),
    ("PAUSE", vk::PAUSE),
    ("CAPITAL", vk::CAPITAL),
    ("ESCAPE", vk::ESCAPE),
    ("SPACE", vk::SPACE),
    ("PRIOR", vk::PRIOR),
    ("NEXT", vk::NEXT),
    ("END", vk::END),
    ("HOME", vk::HOME),
    ("LEFT", vk::LEFT),
    ("UP", vk::UP),
    ("RIGHT", vk::RIGHT),
    ("DOWN", vk::DOWN),
    ("SELECT", vk::SELECT),
    ("PRINT", vk::PRINT),
    ("EXECUTE", vk::EXECUTE),
    ("SNAPSHOT", vk::SNAPSHOT),
    ("INSERT", vk::INSERT),
    ("DELETE", vk::DELETE),
    ("HELP", vk::HELP),
    ("LWIN", vk::LWIN),
    ("RWIN", vk::RWIN),
    ("APPS", vk::APPS),
    ("NUMPAD0", vk::NUMPAD0),
    ("NUMPAD1", vk::NUMPAD1),
    ("NUMPAD2", vk::NUMPAD2),
    ("NUMPAD3", vk::NUMPAD3),
    ("NUMPAD4", vk::NUMPAD4),
    ("NUMPAD5", vk::NUMPAD5),
    ("NUMPAD6", vk::NUMPAD6),
    ("NUMPAD7", vk::NUMPAD7),
    ("NUMPAD8", vk::NUMPAD8),
    ("NUMPAD9", vk::NUMPAD9),
    ("MULTIPLY", vk::MULTIPLY),
    ("ADD", vk::ADD),
    ("SEPARATOR", vk::SEPARATOR),
    ("SUBTRACT", vk::SUBTRACT),
    ("DECIMAL", vk::DECIMAL),
    ("DIVIDE", vk::DIVIDE),
    ("F1", vk::F1),
    ("F2", vk::F2),
    ("F3", vk::F3),
    ("F4", vk::F4),
    ("F5", vk::F5),
    ("F6", vk::F6),
    ("F7", vk::F7),
    ("F8", vk::F8),
    ("F9", vk::F9),
    ("F10", vk::F10),
    ("F11", vk::F11),
    ("F12", vk::F12),
    ("F13", vk::F13),
    ("F14", vk::F14),
    ("F15", vk::F15),
    ("F16", vk::F16),
    ("F17", vk::F17),
    ("F18", vk::F18),
    ("F19", vk::F19),
    ("F20", vk::F20),
    ("F21", vk::F21),
    ("F22", vk::F22),
    ("F23", vk::F23),
    ("F24", vk::F24),
    ("NUMLOCK", vk::NUMLOCK),
    ("SCROLL", vk::SCROLL),
    ("OEM_1", vk::OEM_1),
    ("OEM_PLUS", vk::OEM_PLUS),
    ("OEM_COMMA", vk::OEM_COMMA),
    ("OEM_MINUS", vk::OEM_MINUS),
    ("OEM_PERIOD", vk::OEM_PERIOD),
    ("OEM_2", vk::OEM_2),
    ("OEM_3", vk::OEM_3),
    ("OEM_4", vk::OEM_4),
    ("OEM_5", vk::OEM_5),
    ("OEM_6", vk::OEM_6),
    ("OEM_7", vk::OEM_7),
];

/// Alternate spellings accepted when parsing toolkit key names.
const ACCEL_ALIASES: &[(&str, u32)] = &[
    ("ENTER", accel::RETURN),
    ("ESC", accel::ESCAPE),
    ("BACKSPACE", accel::BACK),
    ("DEL", accel::DELETE),
    ("INS", accel::INSERT),
    ("PGUP", accel::PAGEUP),
    ("PGDN", accel::PAGEDOWN),
    ("COMMAND", accel::CONTROL),
];

/// Alternate spellings accepted when parsing virtual-key names.
const VIRTUAL_ALIASES: &[(&str, u32)] = &[
    ("ENTER", vk::RETURN),
    ("ESC", vk::ESCAPE),
    ("BACKSPACE", vk::BACK),
    ("DEL", vk::DELETE),
    ("INS", vk::INSERT),
    ("PAGEUP", vk::PRIOR),
    ("PAGEDOWN", vk::NEXT),
];

/// Display names for keys whose constant name is ambiguous or misleading.
const ACCEL_DISPLAY: &[(&str, &str)] = &[("CONTROL", "CTRL"), ("RAW_CONTROL", "CTRL")];
const ACCEL_DISPLAY_MACOS: &[(&str, &str)] = &[
    ("CONTROL", "CMD"),
    ("RAW_CONTROL", "CTRL"),
    ("ALT", "OPT"),
];
const VIRTUAL_DISPLAY: &[(&str, &str)] = &[
    ("CONTROL", "CTRL"),
    ("SHIFT", "SHIFT"),
    ("MENU", "ALT"),
];

/// Bidirectional key name/code mapping for one namespace.
///
/// `code()` accepts every constant name and alias. `name()` returns the
/// display name of the first constant registered for a code, rewritten by
/// the namespace's display table.
#[derive(Clone, Debug, Default)]
pub struct KeyTable {
    by_name: HashMap<String, u32>,
    by_code: HashMap<u32, String>,
}

impl KeyTable {
    /// Toolkit accelerator namespace for the given platform.
    pub fn accelerator(platform: Platform) -> Self {
        let (raw_control, display) = if platform.is_macos() {
            (accel::RAW_CONTROL_MACOS, ACCEL_DISPLAY_MACOS)
        } else {
            (accel::CONTROL, ACCEL_DISPLAY)
        };

        let mut table = Self::default();
        table.insert_all(&[("NONE", accel::NONE)], display);
        table.insert_all(ACCEL_KEYS, display);
        table.insert_all(&[("RAW_CONTROL", raw_control)], display);
        table.insert_aliases(ACCEL_ALIASES);
        table
    }

    /// Win32 virtual-key namespace used for global hotkeys.
    pub fn virtual_keys() -> Self {
        let mut table = Self::default();
        table.insert_all(&[("NONE", vk::NONE)], VIRTUAL_DISPLAY);
        table.insert_all(VIRTUAL_KEYS, VIRTUAL_DISPLAY);
        table.insert_aliases(VIRTUAL_ALIASES);
        table
    }

    fn insert_all(&mut self, keys: &[(&str, u32)], display: &[(&str, &str)]) {
        for &(name, code) in keys {
            self.by_name.insert(name.to_string(), code);
            self.by_code.entry(code).or_insert_with(|| {
                display
                    .iter()
                    .find(|(from, _)| *from == name)
                    .map_or(name, |(_, to)| *to)
                    .to_string()
            });
        }
    }

    fn insert_aliases(&mut self, aliases: &[(&str, u32)]) {
        for &(alias, code) in aliases {
            self.by_name.entry(alias.to_string()).or_insert(code);
        }
    }

    /// Code for an uppercase key name.
    pub fn code(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    /// Display name for a code.
    pub fn name(&self, code: u32) -> Option<&str> {
        self.by_code.get(&code).map(String::as_str)
    }

    /// All accepted names with their codes, sorted by code then name.
    pub fn names(&self) -> Vec<(&str, u32)> {
        let mut names: Vec<(&str, u32)> = self
            .by_name
            .iter()
            .map(|(name, code)| (name.as_str(), *code))
            .collect();
        names.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_display_name_depends_on_platform() {
        let linux = KeyTable::accelerator(Platform::Linux);
        assert_eq!(linux.name(accel::CONTROL), Some("CTRL"));
        assert_eq!(linux.code("RAW_CONTROL"), Some(accel::CONTROL));

        let mac = KeyTable::accelerator(Platform::MacOS);
        assert_eq!(mac.name(accel::CONTROL), Some("CMD"));
        assert_eq!(mac.name(accel::RAW_CONTROL_MACOS), Some("CTRL"));
        assert_eq!(mac.name(accel::ALT), Some("OPT"));
    }

    #[test]
    fn test_aliases_parse_but_do_not_display() {
        let table = KeyTable::accelerator(Platform::Windows);
        assert_eq!(table.code("ENTER"), Some(accel::RETURN));
        assert_eq!(table.name(accel::RETURN), Some("RETURN"));
    }

    #[test]
    fn test_virtual_key_overrides() {
        let table = KeyTable::virtual_keys();
        assert_eq!(table.name(vk::MENU), Some("ALT"));
        assert_eq!(table.name(vk::CONTROL), Some("CTRL"));
        assert_eq!(table.code("PAGEUP"), Some(vk::PRIOR));
        assert_eq!(table.name(vk::F24), Some("F24"));
    }

    #[test]
    fn test_letters_have_no_names() {
        let table = KeyTable::virtual_keys();
        assert_eq!(table.name('K' as u32), None);
        assert_eq!(table.code("K"), None);
    }

    #[test]
    fn test_names_sorted_by_code() {
        let table = KeyTable::accelerator(Platform::Linux);
        let names = table.names();
        assert_eq!(names[0], ("NONE", 0));
        assert!(names.windows(2).all(|pair| pair[0].1 <= pair[1].1));
    }
}
