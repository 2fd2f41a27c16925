//! OS-level global hotkeys.
//!
//! [`GlobalHotkeyRegistry`] keeps per-control `(hotkey string, id)` records and
//! forwards registrations to a [`HotkeyProvider`]. Which provider is used is
//! decided once at startup: the `os-hotkeys` feature compiles in
//! [`OsHotkeys`] (backed by the `global-hotkey` crate), and configuration can
//! still switch to [`UnsupportedHotkeys`], which rejects every registration.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::control::{Control, ControlId, EventKind, Handler};
use crate::error::{HotkeyError, Result, ResultExt};
use crate::shortcuts::{get_id, CommandId, KeyCodec};

#[cfg(feature = "os-hotkeys")]
pub use os::OsHotkeys;

/// Backend that registers hotkeys with the operating system.
///
/// `modifiers` are `MOD_*` bits and `key` a virtual-key code, as produced by
/// [`KeyCodec::global_hotkey`]. Ids are scoped to the owning control, so two
/// controls may register the same `CommandId` independently.
pub trait HotkeyProvider {
    fn is_supported(&self) -> bool;

    /// Registering an id the control already holds replaces that hotkey.
    fn register(
        &mut self,
        control: ControlId,
        id: CommandId,
        modifiers: u32,
        key: u32,
    ) -> Result<()>;

    /// Unregistering an unknown id is not an error.
    fn unregister(&mut self, control: ControlId, id: CommandId) -> Result<()>;

    /// Hotkeys pressed since the last poll.
    fn poll_pressed(&mut self) -> Vec<(ControlId, CommandId)> {
        Vec::new()
    }
}

/// Provider for systems without a global hotkey facility.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedHotkeys;

impl HotkeyProvider for UnsupportedHotkeys {
    fn is_supported(&self) -> bool {
        false
    }

    fn register(
        &mut self,
        _control: ControlId,
        _id: CommandId,
        _modifiers: u32,
        _key: u32,
    ) -> Result<()> {
        Err(HotkeyError::Unsupported)
    }

    fn unregister(&mut self, _control: ControlId, _id: CommandId) -> Result<()> {
        Err(HotkeyError::Unsupported)
    }
}

/// Pick the provider for this process.
///
/// Falls back to [`UnsupportedHotkeys`] when disabled, when the crate was
/// built without `os-hotkeys`, or when the OS manager cannot be created.
pub fn default_provider(enabled: bool) -> Box<dyn HotkeyProvider> {
    if !enabled {
        info!("Global hotkeys disabled by configuration");
        return Box::new(UnsupportedHotkeys);
    }

    #[cfg(feature = "os-hotkeys")]
    {
        match OsHotkeys::new() {
            Ok(provider) => Box::new(provider),
            Err(e) => {
                warn!(error = %e, "Failed to create hotkey manager, global hotkeys unavailable");
                Box::new(UnsupportedHotkeys)
            }
        }
    }

    #[cfg(not(feature = "os-hotkeys"))]
    {
        info!("Built without os-hotkeys, global hotkeys unavailable");
        Box::new(UnsupportedHotkeys)
    }
}

/// Global hotkey bookkeeping for every control in the application.
pub struct GlobalHotkeyRegistry {
    codec: KeyCodec,
    provider: Box<dyn HotkeyProvider>,
    /// Control -> (hotkey string as given, id) pairs.
    hotkeys: HashMap<ControlId, Vec<(String, CommandId)>>,
}

impl GlobalHotkeyRegistry {
    pub fn new(provider: Box<dyn HotkeyProvider>) -> Self {
        Self {
            codec: KeyCodec::global_hotkey(),
            provider,
            hotkeys: HashMap::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(default_provider(config.global_hotkeys))
    }

    pub fn is_supported(&self) -> bool {
        self.provider.is_supported()
    }

    pub fn codec(&self) -> &KeyCodec {
        &self.codec
    }

    /// Register `key` as a global hotkey delivering to `handler` on `control`.
    ///
    /// Returns whether the OS accepted the registration. A rejected hotkey is
    /// still recorded so that [`remove_hotkey`](Self::remove_hotkey) cleans up
    /// the handler binding.
    pub fn add_hotkey<C: Control + ?Sized>(
        &mut self,
        control: &mut C,
        key: &str,
        handler: Handler,
        id: Option<CommandId>,
    ) -> Result<bool> {
        if !self.provider.is_supported() {
            return Err(HotkeyError::Unsupported);
        }

        let chord = self.codec.str_to_key(key)?;
        let id = get_id(id);
        let control_id = control.control_id();

        control.bind(EventKind::Hotkey, id, handler);
        self.hotkeys
            .entry(control_id)
            .or_default()
            .push((key.to_string(), id));

        match self
            .provider
            .register(control_id, id, chord.modifiers, chord.key)
        {
            Ok(()) => {
                info!(control = %control_id, key, %id, "Registered global hotkey");
                Ok(true)
            }
            Err(e) => {
                warn!(control = %control_id, key, %id, error = %e, "Global hotkey rejected");
                Ok(false)
            }
        }
    }

    /// Remove every hotkey registered on `control` under exactly `key`.
    ///
    /// Does nothing when `key` was never registered for the control. An id
    /// still used by another of the control's hotkeys stays bound.
    pub fn remove_hotkey<C: Control + ?Sized>(&mut self, control: &mut C, key: &str) {
        let control_id = control.control_id();
        let Some(entries) = self.hotkeys.get_mut(&control_id) else {
            return;
        };

        let (removed, kept): (Vec<_>, Vec<_>) =
            entries.drain(..).partition(|(registered, _)| registered == key);
        *entries = kept;
        if entries.is_empty() {
            self.hotkeys.remove(&control_id);
        }

        let mut removed_ids: Vec<CommandId> = removed.into_iter().map(|(_, id)| id).collect();
        removed_ids.sort();
        removed_ids.dedup();
        for id in removed_ids {
            if self.is_recorded(control_id, id) {
                debug!(control = %control_id, %id, "Id still in use, keeping binding");
                continue;
            }
            control.unbind(EventKind::Hotkey, id);
            self.provider.unregister(control_id, id).warn_on_err();
            info!(control = %control_id, key, %id, "Removed global hotkey");
        }
    }

    /// Hotkeys recorded for a control, in registration order.
    pub fn hotkeys(&self, control: ControlId) -> &[(String, CommandId)] {
        self.hotkeys.get(&control).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Pressed hotkeys since the last call, with the control that owns each.
    ///
    /// Presses for hotkeys no longer recorded are dropped.
    pub fn pending_events(&mut self) -> Vec<(ControlId, CommandId)> {
        let pressed = self.provider.poll_pressed();
        pressed
            .into_iter()
            .filter(|&(control, id)| {
                let known = self.is_recorded(control, id);
                if !known {
                    debug!(%control, %id, "Dropping press for unknown hotkey");
                }
                known
            })
            .collect()
    }

    fn is_recorded(&self, control: ControlId, id: CommandId) -> bool {
        self.hotkeys(control).iter().any(|(_, entry_id)| *entry_id == id)
    }
}

#[cfg(feature = "os-hotkeys")]
mod os {
    use std::collections::HashMap;

    use global_hotkey::{
        hotkey::{Code, HotKey, Modifiers},
        Error as GlobalHotkeyError, GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    };
    use tracing::debug;

    use super::HotkeyProvider;
    use crate::control::ControlId;
    use crate::error::{HotkeyError, Result, ResultExt};
    use crate::shortcuts::keycodes::vk;
    use crate::shortcuts::{CommandId, HotkeyModifiers};

    /// Provider backed by the `global-hotkey` crate.
    ///
    /// NOTE: Must be created on the main thread. On Windows and macOS the
    /// application's event loop must be running for presses to arrive.
    pub struct OsHotkeys {
        manager: GlobalHotKeyManager,
        by_slot: HashMap<(ControlId, CommandId), HotKey>,
        /// global-hotkey's own id -> owning control and command id
        by_hotkey: HashMap<u32, (ControlId, CommandId)>,
    }

    impl OsHotkeys {
        pub fn new() -> Result<Self> {
            let manager = GlobalHotKeyManager::new().map_err(|e| HotkeyError::Os(e.to_string()))?;
            Ok(Self {
                manager,
                by_slot: HashMap::new(),
                by_hotkey: HashMap::new(),
            })
        }
    }

    impl HotkeyProvider for OsHotkeys {
        fn is_supported(&self) -> bool {
            true
        }

        fn register(
            &mut self,
            control: ControlId,
            id: CommandId,
            modifiers: u32,
            key: u32,
        ) -> Result<()> {
            let code = virtual_key_to_code(key).ok_or(HotkeyError::UnmappableKey(key))?;
            let hotkey = HotKey::new(Some(to_modifiers(modifiers)), code);

            if self.by_slot.contains_key(&(control, id)) {
                self.unregister(control, id).log_err();
            }
            self.manager
                .register(hotkey)
                .map_err(|e| HotkeyError::Os(describe_error(&e)))?;

            debug!(%control, %id, hotkey_id = hotkey.id(), "OS hotkey registered");
            self.by_slot.insert((control, id), hotkey);
            self.by_hotkey.insert(hotkey.id(), (control, id));
            Ok(())
        }

        fn unregister(&mut self, control: ControlId, id: CommandId) -> Result<()> {
            let Some(hotkey) = self.by_slot.remove(&(control, id)) else {
                return Ok(());
            };
            self.by_hotkey.remove(&hotkey.id());
            self.manager
                .unregister(hotkey)
                .map_err(|e| HotkeyError::Os(describe_error(&e)))
        }

        fn poll_pressed(&mut self) -> Vec<(ControlId, CommandId)> {
            let receiver = GlobalHotKeyEvent::receiver();
            let mut pressed = Vec::new();
            while let Ok(event) = receiver.try_recv() {
                // Only respond to key PRESS, not release
                if event.state != HotKeyState::Pressed {
                    continue;
                }
                if let Some(&slot) = self.by_hotkey.get(&event.id) {
                    pressed.push(slot);
                }
            }
            pressed
        }
    }

    /// Format a registration error with helpful context
    fn describe_error(e: &GlobalHotkeyError) -> String {
        match e {
            GlobalHotkeyError::AlreadyRegistered(hk) => format!(
                "already registered by another application (id: {})",
                hk.id()
            ),
            GlobalHotkeyError::FailedToRegister(msg) => {
                format!("{}. This shortcut may be reserved by the system", msg)
            }
            GlobalHotkeyError::OsError(os_err) => format!("OS error: {}", os_err),
            other => other.to_string(),
        }
    }

    pub(super) fn to_modifiers(bits: u32) -> Modifiers {
        let flags = HotkeyModifiers::from_bits_truncate(bits);
        let mut modifiers = Modifiers::empty();
        if flags.contains(HotkeyModifiers::ALT) {
            modifiers |= Modifiers::ALT;
        }
        if flags.contains(HotkeyModifiers::CONTROL) {
            modifiers |= Modifiers::CONTROL;
        }
        if flags.contains(HotkeyModifiers::SHIFT) {
            modifiers |= Modifiers::SHIFT;
        }
        if flags.contains(HotkeyModifiers::WIN) {
            modifiers |= Modifiers::SUPER;
        }
        modifiers
    }

    /// Convert a virtual-key code to the `global-hotkey` key code.
    pub(super) fn virtual_key_to_code(key: u32) -> Option<Code> {
        let code = match key {
            0x41 => Code::KeyA,
            0x42 => Code::KeyB,
            0x43 => Code::KeyC,
            0x44 => Code::KeyD,
            0x45 => Code::KeyE,
            0x46 => Code::KeyF,
            0x47 => Code::KeyG,
            0x48 => Code::KeyH,
            0x49 => Code::KeyI,
            0x4A => Code::KeyJ,
            0x4B => Code::KeyK,
            0x4C => Code::KeyL,
            0x4D => Code::KeyM,
            0x4E => Code::KeyN,
            0x4F => Code::KeyO,
            0x50 => Code::KeyP,
            0x51 => Code::KeyQ,
            0x52 => Code::KeyR,
            0x53 => Code::KeyS,
            0x54 => Code::KeyT,
            0x55 => Code::KeyU,
            0x56 => Code::KeyV,
            0x57 => Code::KeyW,
            0x58 => Code::KeyX,
            0x59 => Code::KeyY,
            0x5A => Code::KeyZ,
            0x30 => Code::Digit0,
            0x31 => Code::Digit1,
            0x32 => Code::Digit2,
            0x33 => Code::Digit3,
            0x34 => Code::Digit4,
            0x35 => Code::Digit5,
            0x36 => Code::Digit6,
            0x37 => Code::Digit7,
            0x38 => Code::Digit8,
            0x39 => Code::Digit9,
            vk::NUMPAD0 => Code::Numpad0,
            vk::NUMPAD1 => Code::Numpad1,
            vk::NUMPAD2 => Code::Numpad2,
            vk::NUMPAD3 => Code::Numpad3,
            vk::NUMPAD4 => Code::Numpad4,
            vk::NUMPAD5 => Code::Numpad5,
            vk::NUMPAD6 => Code::Numpad6,
            vk::NUMPAD7 => Code::Numpad7,
            vk::NUMPAD8 => Code::Numpad8,
            vk::NUMPAD9 => Code::Numpad9,
            vk::F1 => Code::F1,
            vk::F2 => Code::F2,
            vk::F3 => Code::F3,
            vk::F4 => Code::F4,
            vk::F5 => Code::F5,
            vk::F6 => Code::F6,
            vk::F7 => Code::F7,
            vk::F8 => Code::F8,
            vk::F9 => Code::F9,
            vk::F10 => Code::F10,
            vk::F11 => Code::F11,
            vk::F12 => Code::F12,
            vk::SPACE => Code::Space,
            vk::RETURN => Code::Enter,
            vk::TAB => Code::Tab,
            vk::ESCAPE => Code::Escape,
            vk::BACK => Code::Backspace,
            vk::DELETE => Code::Delete,
            vk::INSERT => Code::Insert,
            vk::HOME => Code::Home,
            vk::END => Code::End,
            vk::PRIOR => Code::PageUp,
            vk::NEXT => Code::PageDown,
            vk::LEFT => Code::ArrowLeft,
            vk::UP => Code::ArrowUp,
            vk::RIGHT => Code::ArrowRight,
            vk::DOWN => Code::ArrowDown,
            vk::SNAPSHOT => Code::PrintScreen,
            vk::PAUSE => Code::Pause,
            vk::CAPITAL => Code::CapsLock,
            vk::NUMLOCK => Code::NumLock,
            vk::SCROLL => Code::ScrollLock,
            vk::APPS => Code::ContextMenu,
            vk::MULTIPLY => Code::NumpadMultiply,
            vk::ADD => Code::NumpadAdd,
            vk::SUBTRACT => Code::NumpadSubtract,
            vk::DECIMAL => Code::NumpadDecimal,
            vk::DIVIDE => Code::NumpadDivide,
            vk::OEM_1 => Code::Semicolon,
            vk::OEM_PLUS => Code::Equal,
            vk::OEM_COMMA => Code::Comma,
            vk::OEM_MINUS => Code::Minus,
            vk::OEM_PERIOD => Code::Period,
            vk::OEM_2 => Code::Slash,
            vk::OEM_3 => Code::Backquote,
            vk::OEM_4 => Code::BracketLeft,
            vk::OEM_5 => Code::Backslash,
            vk::OEM_6 => Code::BracketRight,
            vk::OEM_7 => Code::Quote,
            _ => return None,
        };
        Some(code)
    }
}
