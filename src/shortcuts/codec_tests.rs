use super::keycodes::{accel, vk};
use super::*;

fn linux() -> KeyCodec {
    KeyCodec::accelerator(Platform::Linux)
}

fn mac() -> KeyCodec {
    KeyCodec::accelerator(Platform::MacOS)
}

const CTRL: u32 = AccelModifiers::CTRL.bits();
const ALT: u32 = AccelModifiers::ALT.bits();
const SHIFT: u32 = AccelModifiers::SHIFT.bits();

// =============================================================================
// str_to_key
// =============================================================================

#[test]
fn test_parse_ctrl_alt_letter() {
    let chord = linux().str_to_key("CTRL+ALT+K").unwrap();
    assert_eq!(chord, KeyChord::new(CTRL | ALT, 'K' as u32));
}

#[test]
fn test_parse_is_case_insensitive() {
    let codec = linux();
    assert_eq!(
        codec.str_to_key("ctrl+shift+k").unwrap(),
        codec.str_to_key("CTRL+SHIFT+K").unwrap()
    );
    assert_eq!(codec.str_to_key("Ctrl+f").unwrap().key, 'F' as u32);
}

#[test]
fn test_parse_named_key() {
    let codec = linux();
    assert_eq!(
        codec.str_to_key("SHIFT+F5").unwrap(),
        KeyChord::new(SHIFT, accel::F5)
    );
    assert_eq!(
        codec.str_to_key("ESCAPE").unwrap(),
        KeyChord::new(0, accel::ESCAPE)
    );
    assert_eq!(codec.str_to_key("ctrl+enter").unwrap().key, accel::RETURN);
}

#[test]
fn test_parse_modifier_order_not_enforced() {
    let codec = linux();
    assert_eq!(
        codec.str_to_key("HOME+CTRL").unwrap(),
        KeyChord::new(CTRL, accel::HOME)
    );
}

#[test]
fn test_parse_tolerates_whitespace() {
    assert_eq!(
        linux().str_to_key(" CTRL + ALT + K ").unwrap(),
        KeyChord::new(CTRL | ALT, 'K' as u32)
    );
}

#[test]
fn test_parse_digit_and_punctuation() {
    let codec = linux();
    assert_eq!(codec.str_to_key("ALT+1").unwrap().key, '1' as u32);
    assert_eq!(codec.str_to_key("CTRL+/").unwrap().key, '/' as u32);
}

#[test]
fn test_parse_multiple_keys_error() {
    let result = linux().str_to_key("CTRL+HOME+END");
    assert_eq!(
        result,
        Err(ParseError::MultipleKeys("CTRL+HOME+END".to_string()))
    );
}

#[test]
fn test_parse_rejects_tokens_after_named_key() {
    let codec = linux();
    assert_eq!(
        codec.str_to_key("HOME+K"),
        Err(ParseError::MultipleKeys("HOME+K".to_string()))
    );
    assert_eq!(
        codec.str_to_key("ALT+F4+X"),
        Err(ParseError::MultipleKeys("ALT+F4+X".to_string()))
    );
    assert_eq!(
        codec.str_to_key("CTRL+HOME+FOO"),
        Err(ParseError::UnknownKey {
            input: "CTRL+HOME+FOO".to_string(),
            token: "FOO".to_string(),
        })
    );
    // Leading unknown tokens are reported the same way as before
    assert!(matches!(
        codec.str_to_key("K+HOME"),
        Err(ParseError::UnknownToken { token, .. }) if token == "K"
    ));
}

#[test]
fn test_parse_command_key_needs_synonym_on_macos() {
    // COMMAND names the key; without a synonym it is not the CMD modifier.
    assert!(matches!(
        mac().str_to_key("COMMAND+T"),
        Err(ParseError::MultipleKeys(_))
    ));
    assert_eq!(
        mac().with_synonym("command", "cmd").str_to_key("COMMAND+T").unwrap(),
        KeyChord::new(CTRL, 'T' as u32)
    );
}

#[test]
fn test_parse_control_key_counts_as_key() {
    // CONTROL names the key itself, CTRL the modifier.
    let codec = linux();
    assert_eq!(
        codec.str_to_key("CTRL+ALT+CONTROL").unwrap(),
        KeyChord::new(CTRL | ALT, accel::CONTROL)
    );
    assert!(matches!(
        codec.str_to_key("CONTROL+ESCAPE"),
        Err(ParseError::MultipleKeys(_))
    ));
}

#[test]
fn test_parse_empty_error() {
    assert_eq!(linux().str_to_key(""), Err(ParseError::Empty));
    assert_eq!(linux().str_to_key("   "), Err(ParseError::Empty));
}

#[test]
fn test_parse_modifiers_only_error() {
    assert!(matches!(
        linux().str_to_key("CTRL+ALT"),
        Err(ParseError::MissingKey(_))
    ));
    assert!(matches!(
        linux().str_to_key("CTRL+"),
        Err(ParseError::MissingKey(_))
    ));
}

#[test]
fn test_parse_unknown_key_error() {
    let result = linux().str_to_key("CTRL+FOO");
    assert_eq!(
        result,
        Err(ParseError::UnknownKey {
            input: "CTRL+FOO".to_string(),
            token: "FOO".to_string(),
        })
    );
}

#[test]
fn test_parse_unknown_token_error() {
    assert!(matches!(
        linux().str_to_key("CTRL+HYPER+K"),
        Err(ParseError::UnknownToken { token, .. }) if token == "HYPER"
    ));
}

#[test]
fn test_parse_none_key() {
    assert_eq!(
        linux().str_to_key("CTRL+NONE").unwrap(),
        KeyChord::new(CTRL, 0)
    );
}

#[test]
fn test_parse_macos_names() {
    let codec = mac();
    assert_eq!(
        codec.str_to_key("CMD+T").unwrap(),
        KeyChord::new(CTRL, 'T' as u32)
    );
    assert_eq!(
        codec.str_to_key("OPT+SHIFT+X").unwrap(),
        KeyChord::new(ALT | SHIFT, 'X' as u32)
    );
    assert_eq!(
        codec.str_to_key("RAW_CTRL+C").unwrap(),
        KeyChord::new(AccelModifiers::RAW_CTRL.bits(), 'C' as u32)
    );
}

#[test]
fn test_raw_ctrl_is_ctrl_outside_macos() {
    assert_eq!(
        linux().str_to_key("RAW_CTRL+C").unwrap(),
        KeyChord::new(CTRL, 'C' as u32)
    );
}

#[test]
fn test_synonym_rewrites_tokens() {
    let codec = linux().with_synonym("control_key", "ctrl");
    assert_eq!(
        codec.str_to_key("CONTROL_KEY+K").unwrap(),
        KeyChord::new(CTRL, 'K' as u32)
    );
}

// =============================================================================
// key_to_str
// =============================================================================

#[test]
fn test_format_ctrl_alt_letter() {
    assert_eq!(linux().key_to_str(CTRL | ALT, 'K' as u32), "CTRL+ALT+K");
}

#[test]
fn test_format_uses_display_order() {
    assert_eq!(
        linux().key_to_str(SHIFT | ALT | CTRL, accel::F1),
        "CTRL+ALT+SHIFT+F1"
    );
    assert_eq!(mac().key_to_str(SHIFT | CTRL, 'T' as u32), "CMD+SHIFT+T");
}

#[test]
fn test_format_no_key() {
    assert_eq!(linux().key_to_str(CTRL, 0), "CTRL+NONE");
    assert_eq!(linux().key_to_str(0, 0), "NONE");
}

#[test]
fn test_format_underivable_character() {
    assert_eq!(linux().key_to_str(0, 0xD800), "NONE");
    assert_eq!(linux().key_to_str(0, 0x01), "NONE");
}

#[test]
fn test_format_canonical_key_names() {
    assert_eq!(linux().key_to_str(0, accel::CONTROL), "CTRL");
    assert_eq!(mac().key_to_str(0, accel::CONTROL), "CMD");
    assert_eq!(mac().key_to_str(0, accel::ALT), "OPT");
    assert_eq!(mac().key_to_str(0, accel::RAW_CONTROL_MACOS), "CTRL");
}

#[test]
fn test_format_ignores_unknown_bits() {
    assert_eq!(linux().key_to_str(0x100 | CTRL, 'A' as u32), "CTRL+A");
}

// =============================================================================
// Round trips
// =============================================================================

/// Keys whose display name parses back to the same code.
fn sample_accel_keys() -> Vec<u32> {
    let mut keys: Vec<u32> = ('A'..='Z').chain('0'..='9').map(|c| c as u32).collect();
    keys.extend([
        accel::F1,
        accel::F12,
        accel::F24,
        accel::HOME,
        accel::END,
        accel::PAGEUP,
        accel::PAGEDOWN,
        accel::ESCAPE,
        accel::SPACE,
        accel::RETURN,
        accel::TAB,
        accel::DELETE,
        accel::INSERT,
        accel::NUMPAD0,
        accel::NUMPAD_ENTER,
        accel::LEFT,
        accel::DOWN,
        ',' as u32,
        '/' as u32,
    ]);
    keys
}

#[test]
fn test_round_trip_linux() {
    let codec = linux();
    for modifiers in 0..=(CTRL | ALT | SHIFT) {
        for key in sample_accel_keys() {
            let text = codec.key_to_str(modifiers, key);
            assert_eq!(
                codec.str_to_key(&text).unwrap(),
                KeyChord::new(modifiers, key),
                "round trip of {text}"
            );
        }
    }
}

#[test]
fn test_round_trip_macos() {
    let codec = mac();
    let all = AccelModifiers::all().bits();
    for modifiers in 0..=all {
        for key in sample_accel_keys() {
            let text = codec.key_to_str(modifiers, key);
            assert_eq!(
                codec.str_to_key(&text).unwrap(),
                KeyChord::new(modifiers, key),
                "round trip of {text}"
            );
        }
    }
}

#[test]
fn test_round_trip_global_hotkeys() {
    let codec = KeyCodec::global_hotkey();
    let all = HotkeyModifiers::all().bits();
    let mut keys: Vec<u32> = ('A'..='Z').chain('0'..='9').map(|c| c as u32).collect();
    keys.extend([vk::F1, vk::F24, vk::PRIOR, vk::SPACE, vk::OEM_1, vk::NUMPAD7]);
    for modifiers in 0..=all {
        for &key in &keys {
            let text = codec.key_to_str(modifiers, key);
            assert_eq!(
                codec.str_to_key(&text).unwrap(),
                KeyChord::new(modifiers, key),
                "round trip of {text}"
            );
        }
    }
}

// =============================================================================
// Global hotkey namespace
// =============================================================================

#[test]
fn test_global_ctrl_is_transposed_to_control() {
    let codec = KeyCodec::global_hotkey();
    let chord = codec.str_to_key("CTRL+ALT+K").unwrap();
    assert_eq!(
        chord,
        KeyChord::new(
            (HotkeyModifiers::CONTROL | HotkeyModifiers::ALT).bits(),
            'K' as u32
        )
    );
    assert_eq!(codec.key_to_str(chord.modifiers, chord.key), "CTRL+ALT+K");
}

#[test]
fn test_global_lowercase_letter_is_not_a_numpad_key() {
    // 'k' is 0x6B, which is VK_ADD; letters are always uppercased first.
    let chord = KeyCodec::global_hotkey().str_to_key("ctrl+k").unwrap();
    assert_eq!(chord.key, 'K' as u32);
    assert_ne!(chord.key, vk::ADD);
}

#[test]
fn test_global_menu_key_displays_as_alt() {
    let codec = KeyCodec::global_hotkey();
    assert_eq!(codec.key_to_str(0, vk::MENU), "ALT");
    assert_eq!(codec.key_name(vk::NEXT), "NEXT");
    assert_eq!(codec.platform(), None);
    assert_eq!(codec.key_code("pagedown"), Some(vk::NEXT));
}
