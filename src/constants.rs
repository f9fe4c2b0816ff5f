use std::os::raw::c_int;

// global constants
pub(crate) const LOG_DEBUG: c_int = 3; // android log prio d
pub(crate) const LOG_INFO: c_int = 4; // android log prio i
pub(crate) const LOG_WARN: c_int = 5; // android log prio w
pub(crate) const LOG_ERROR: c_int = 6; // android log prio e
pub(crate) const PROP_VALUE_MAX: usize = 92; // bionic limit

pub const GESTURE_MODE_WIDTH: usize = 7; // chars written to gesture_mode
pub const DEFAULT_DEBOUNCE_MS: u64 = 500; // coalesce toggles before writing
pub const DEFAULT_POLL_MS: u64 = 100; // pref watcher interval
pub(crate) const DOZE_DEFAULT: i32 = 1; // doze on when unset
pub(crate) const HAPTIC_DEFAULT: i32 = 1; // haptic on when unset
