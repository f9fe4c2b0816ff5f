//! Touchscreen gesture mode sync for the touch controller's `gesture_mode` node.
//!
//! Six letter gestures (C, E, S, V, W, Z) are switched on and off through
//! boolean preferences. Every change is encoded into a 7-bit mask and
//! written to the driver as a zero padded binary line.

pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
mod ffi;
pub mod gesture;
pub mod logging;
pub mod panel;
pub mod paths;
pub mod prefs;
mod properties;
pub mod service;
pub mod settings;
pub mod state;
pub mod sync;
pub mod writer;

pub use config::Config;
pub use error::{Error, Result};
pub use gesture::{encode, GestureFlag, GestureMask};
pub use prefs::{MemoryPrefs, PrefStore, PrefWatcher, PropertyPrefs};
pub use service::Service;
pub use settings::{Namespace, SettingsCommand, SettingsProvider};
pub use state::GestureState;
pub use sync::GestureSyncController;
pub use writer::{LineWriter, SysfsNode};
