//! Per-control accelerator tables.
//!
//! Each control owns an ordered list of `(modifiers, key, id)` entries. The
//! list is created on the first add, dropped when it becomes empty, and the
//! whole table is reapplied to the control after every change.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, info};

use super::codec::KeyCodec;
use super::types::{AcceleratorEntry, AcceleratorTable, CommandId, ParseError, Platform};
use crate::config::Config;
use crate::control::{Control, ControlId, EventKind, Handler};

/// First id handed out by [`new_id`]. Lower ids are left to callers.
const FIRST_GENERATED_ID: u32 = 10_000;

static NEXT_COMMAND_ID: AtomicU32 = AtomicU32::new(FIRST_GENERATED_ID);

/// Allocate a fresh, process-unique command id.
pub fn new_id() -> CommandId {
    CommandId(NEXT_COMMAND_ID.fetch_add(1, Ordering::SeqCst))
}

/// Return `id` unchanged, or allocate a new one when it is `None`.
pub fn get_id(id: Option<CommandId>) -> CommandId {
    match id {
        Some(id) => {
            debug!(%id, "Using provided id");
            id
        }
        None => {
            let id = new_id();
            debug!(%id, "Generated new id");
            id
        }
    }
}

/// Accelerator bookkeeping for every control in the application.
#[derive(Debug)]
pub struct AcceleratorRegistry {
    codec: KeyCodec,
    tables: HashMap<ControlId, Vec<AcceleratorEntry>>,
}

impl Default for AcceleratorRegistry {
    fn default() -> Self {
        Self::new(KeyCodec::accelerator(Platform::current()))
    }
}

impl AcceleratorRegistry {
    pub fn new(codec: KeyCodec) -> Self {
        Self {
            codec,
            tables: HashMap::new(),
        }
    }

    /// Registry using the configured platform scheme and synonyms.
    pub fn from_config(config: &Config) -> Self {
        let platform = config.platform.unwrap_or_else(Platform::current);
        let codec = config
            .synonyms
            .iter()
            .fold(KeyCodec::accelerator(platform), |codec, (from, to)| {
                codec.with_synonym(from, to)
            });
        Self::new(codec)
    }

    pub fn codec(&self) -> &KeyCodec {
        &self.codec
    }

    /// Bind `handler` on `control` and add `key` to its accelerator table.
    ///
    /// Returns the id the handler was bound to. Nothing changes when `key`
    /// does not parse.
    pub fn add_accelerator<C: Control + ?Sized>(
        &mut self,
        control: &mut C,
        key: &str,
        handler: Handler,
        id: Option<CommandId>,
    ) -> Result<CommandId, ParseError> {
        let chord = self.codec.str_to_key(key)?;
        let id = get_id(id);
        let control_id = control.control_id();

        control.bind(EventKind::Menu, id, handler);
        self.tables
            .entry(control_id)
            .or_default()
            .push(AcceleratorEntry::new(chord, id));

        info!(
            control = %control_id,
            key,
            modifiers = chord.modifiers,
            key_code = chord.key,
            %id,
            "Added accelerator"
        );

        self.update_accelerators(control);
        Ok(id)
    }

    /// Remove the first accelerator on `control` matching `key`.
    ///
    /// Returns whether an entry was found. The handler is unbound once no
    /// remaining entry on the control uses its id.
    pub fn remove_accelerator<C: Control + ?Sized>(
        &mut self,
        control: &mut C,
        key: &str,
    ) -> Result<bool, ParseError> {
        let chord = self.codec.str_to_key(key)?;
        let control_id = control.control_id();

        let Some(entries) = self.tables.get_mut(&control_id) else {
            return Ok(false);
        };
        let Some(index) = entries.iter().position(|entry| entry.chord() == chord) else {
            return Ok(false);
        };

        let removed = entries.remove(index);
        let id_still_used = entries.iter().any(|entry| entry.id == removed.id);
        if entries.is_empty() {
            self.tables.remove(&control_id);
        }
        if !id_still_used {
            control.unbind(EventKind::Menu, removed.id);
        }

        info!(control = %control_id, key, id = %removed.id, "Removed accelerator");

        self.update_accelerators(control);
        Ok(true)
    }

    /// Rebuild the control's table from the stored entries and apply it.
    pub fn update_accelerators<C: Control + ?Sized>(&self, control: &mut C) {
        let entries = self.entries(control.control_id()).to_vec();
        debug!(
            control = %control.control_id(),
            count = entries.len(),
            "Applying accelerator table"
        );
        control.set_accelerator_table(AcceleratorTable::new(entries));
    }

    /// Entries currently stored for a control, in insertion order.
    pub fn entries(&self, control: ControlId) -> &[AcceleratorEntry] {
        self.tables.get(&control).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of controls with at least one accelerator.
    pub fn control_count(&self) -> usize {
        self.tables.len()
    }
}
