//! The GUI control seam.
//!
//! Registries never talk to a toolkit directly. They drive anything that
//! implements [`Control`]: bind/unbind handlers for command ids and apply an
//! accelerator table. [`HeadlessControl`] is an in-memory implementation used
//! by headless applications and tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::shortcuts::{AcceleratorTable, CommandId, KeyChord};

/// Callback invoked when a bound command fires.
pub type Handler = Arc<dyn Fn(CommandId) + Send + Sync>;

/// Identity of a control, used as the registry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub u64);

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "control#{}", self.0)
    }
}

static NEXT_CONTROL_ID: AtomicU64 = AtomicU64::new(1);

impl ControlId {
    /// Allocate a process-unique control id.
    pub fn next() -> Self {
        ControlId(NEXT_CONTROL_ID.fetch_add(1, Ordering::SeqCst))
    }
}

/// Which event a handler is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Menu/command event, fired by the accelerator table.
    Menu,
    /// OS-level global hotkey event.
    Hotkey,
}

/// A GUI control that can carry accelerators and hotkey bindings.
pub trait Control {
    fn control_id(&self) -> ControlId;

    fn bind(&mut self, kind: EventKind, id: CommandId, handler: Handler);

    /// Returns whether a binding was removed.
    fn unbind(&mut self, kind: EventKind, id: CommandId) -> bool;

    fn set_accelerator_table(&mut self, table: AcceleratorTable);
}

/// In-memory control: stores handlers and the applied table.
pub struct HeadlessControl {
    id: ControlId,
    handlers: HashMap<(EventKind, CommandId), Handler>,
    table: AcceleratorTable,
    table_updates: usize,
}

impl HeadlessControl {
    pub fn new() -> Self {
        Self {
            id: ControlId::next(),
            handlers: HashMap::new(),
            table: AcceleratorTable::default(),
            table_updates: 0,
        }
    }

    /// The table most recently applied by a registry.
    pub fn accelerator_table(&self) -> &AcceleratorTable {
        &self.table
    }

    /// How many times a table has been applied.
    pub fn table_updates(&self) -> usize {
        self.table_updates
    }

    pub fn is_bound(&self, kind: EventKind, id: CommandId) -> bool {
        self.handlers.contains_key(&(kind, id))
    }

    /// Deliver an event to its handler. Returns false when nothing is bound.
    pub fn fire(&self, kind: EventKind, id: CommandId) -> bool {
        match self.handlers.get(&(kind, id)) {
            Some(handler) => {
                handler(id);
                true
            }
            None => false,
        }
    }

    /// Simulate a key press routed through the accelerator table.
    pub fn press(&self, chord: KeyChord) -> bool {
        match self.table.find(chord) {
            Some(id) => {
                debug!(control = %self.id, %id, "Accelerator matched");
                self.fire(EventKind::Menu, id)
            }
            None => false,
        }
    }
}

impl Default for HeadlessControl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HeadlessControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessControl")
            .field("id", &self.id)
            .field("handlers", &self.handlers.len())
            .field("table", &self.table)
            .finish()
    }
}

impl Control for HeadlessControl {
    fn control_id(&self) -> ControlId {
        self.id
    }

    fn bind(&mut self, kind: EventKind, id: CommandId, handler: Handler) {
        self.handlers.insert((kind, id), handler);
    }

    fn unbind(&mut self, kind: EventKind, id: CommandId) -> bool {
        self.handlers.remove(&(kind, id)).is_some()
    }

    fn set_accelerator_table(&mut self, table: AcceleratorTable) {
        self.table = table;
        self.table_updates += 1;
    }
}
