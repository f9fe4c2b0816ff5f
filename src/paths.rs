// file paths, property keys & preference keys
pub fn gesture_mode_path() -> &'static str { "/sys/bus/i2c/devices/i2c-5/5-0038/gesture_mode" }
pub(crate) fn log_tag() -> &'static str { "CMActions" }
pub(crate) fn persist_dbg() -> &'static str { "persist.sys.cmactions.debug" } // set true for debug logs
pub(crate) fn persist_node() -> &'static str { "persist.sys.cmactions.node" } // override gesture_mode path
pub(crate) fn persist_debounce_ms() -> &'static str { "persist.sys.cmactions.debounce_ms" }
pub(crate) fn persist_poll_ms() -> &'static str { "persist.sys.cmactions.poll_ms" }
pub fn prefs_prefix() -> &'static str { "persist.sys.cmactions." } // preference keys live under this

// preference keys
pub fn gesture_control_key() -> &'static str { "touchscreen_gesture_control" } // umbrella, ui only
pub fn ambient_display_key() -> &'static str { "ambient_display_enable" }
pub fn haptic_feedback_key() -> &'static str { "touchscreen_gesture_haptic_feedback" }
pub fn hand_wave_key() -> &'static str { "gesture_hand_wave" }
pub fn pick_up_key() -> &'static str { "gesture_pick_up" }
pub fn pocket_key() -> &'static str { "gesture_pocket" }

// host settings keys
pub(crate) fn doze_enabled_setting() -> &'static str { "doze_enabled" } // secure
pub(crate) fn haptic_feedback_setting() -> &'static str { "touchscreen_gesture_haptic_feedback" } // system
