use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_POLL_MS};
use crate::paths::{gesture_mode_path, persist_dbg, persist_debounce_ms, persist_node, persist_poll_ms, prefs_prefix};
use crate::properties::get_prop;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub node_path: PathBuf,
    pub prefs_prefix: String,
    pub debounce: Duration,
    pub poll_interval: Duration,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_path: PathBuf::from(gesture_mode_path()),
            prefs_prefix: prefs_prefix().to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
            debug: false,
        }
    }
}

impl Config {
    /// Defaults overridden by `persist.sys.cmactions.*` properties.
    pub fn from_props() -> Self {
        Self::from_lookup(get_prop)
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(node) = lookup(persist_node()).filter(|v| !v.trim().is_empty()) {
            config.node_path = PathBuf::from(node.trim());
        }
        if let Some(ms) = lookup(persist_debounce_ms()).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.debounce = Duration::from_millis(ms);
        }
        // zero would spin
        if let Some(ms) = lookup(persist_poll_ms()).and_then(|v| v.trim().parse::<u64>().ok()).filter(|ms| *ms > 0) {
            config.poll_interval = Duration::from_millis(ms);
        }
        config.debug = lookup(persist_dbg()).as_deref() == Some("true");
        config
    }
}
