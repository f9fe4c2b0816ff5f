//! Keeps the driver's `gesture_mode` node in step with the gesture state.

use log::{debug, error};

use crate::gesture::{encode, GestureMask};
use crate::prefs::PrefStore;
use crate::state::GestureState;
use crate::writer::LineWriter;

pub struct GestureSyncController<W: LineWriter> {
    state: GestureState,
    writer: W,
}

impl<W: LineWriter> GestureSyncController<W> {
    /// Loads the switches and writes the resulting mode once.
    pub fn new(prefs: &dyn PrefStore, writer: W) -> Self {
        let mut controller = Self { state: GestureState::load(prefs), writer };
        controller.recompute();
        controller
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Updates the state for `key` without writing. False for non-gesture keys.
    pub fn apply(&mut self, key: &str, prefs: &dyn PrefStore) -> bool {
        self.state.on_change(key, prefs).is_some()
    }

    /// Applies `key` and writes straight away when it is a gesture key.
    pub fn on_change(&mut self, key: &str, prefs: &dyn PrefStore) -> Option<GestureMask> {
        if self.apply(key, prefs) {
            Some(self.recompute())
        } else {
            None
        }
    }

    /// Encodes the current state and writes it. A failed write is logged;
    /// the node is missing on some hardware variants.
    pub fn recompute(&mut self) -> GestureMask {
        let mask = encode(&self.state);
        debug!("[GestureSync] finished gesture mode: {}", mask.bits());
        let line = mask.to_line();
        if let Err(e) = self.writer.write_line(&line) {
            error!("[GestureSync] Could not write gesture mode {}: {}", line, e);
        }
        mask
    }
}
