//! Key/value preference storage.
//!
//! On device the switches live in system properties under a common prefix,
//! so the settings UI (or `setprop`) and this daemon share one store.

use std::collections::HashMap;

use crate::error::Result;
use crate::properties::{get_prop, parse_bool, set_prop};

/// Boolean preference store keyed by preference name.
pub trait PrefStore {
    /// Value of `key`, or `default` when absent or unparsable.
    fn get_bool(&self, key: &str, default: bool) -> bool;

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()>;
}

// system property backed store
#[derive(Debug, Clone)]
pub struct PropertyPrefs {
    prefix: String,
}

impl PropertyPrefs {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub(crate) fn prop_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl PrefStore for PropertyPrefs {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        get_prop(&self.prop_name(key))
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or(default)
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()> {
        set_prop(&self.prop_name(key), if value { "true" } else { "false" })
    }
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, bool>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }
}

impl PrefStore for MemoryPrefs {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).unwrap_or(default)
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

// change detection by snapshot, stands in for a registered listener
#[derive(Debug, Clone)]
pub struct PrefWatcher {
    keys: Vec<&'static str>,
    last: Vec<bool>,
}

impl PrefWatcher {
    pub fn new(keys: Vec<&'static str>, prefs: &dyn PrefStore) -> Self {
        let last = keys.iter().map(|key| prefs.get_bool(key, false)).collect();
        Self { keys, last }
    }

    /// Keys whose value changed since the previous poll, in watch order.
    pub fn poll(&mut self, prefs: &dyn PrefStore) -> Vec<&'static str> {
        let mut changed = Vec::new();
        for (key, last) in self.keys.iter().zip(self.last.iter_mut()) {
            let now = prefs.get_bool(key, false);
            if now != *last {
                *last = now;
                changed.push(*key);
            }
        }
        changed
    }

    /// Records `value` for `key` without reporting it.
    pub fn acknowledge(&mut self, key: &str, value: bool) {
        if let Some(pos) = self.keys.iter().position(|k| *k == key) {
            self.last[pos] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_prefs_default_when_absent() {
        let mut prefs = MemoryPrefs::new();
        assert!(!prefs.get_bool("touchscreen_gesture_c", false));
        assert!(prefs.get_bool("touchscreen_gesture_c", true));
        prefs.put_bool("touchscreen_gesture_c", true).unwrap();
        assert!(prefs.get_bool("touchscreen_gesture_c", false));
    }

    #[test]
    fn property_names_use_prefix() {
        let prefs = PropertyPrefs::new("persist.sys.cmactions.");
        assert_eq!(prefs.prop_name("touchscreen_gesture_z"), "persist.sys.cmactions.touchscreen_gesture_z");
    }

    #[test]
    fn watcher_reports_each_change_once() {
        let mut prefs = MemoryPrefs::new();
        let mut watcher = PrefWatcher::new(vec!["a", "b", "c"], &prefs);
        assert!(watcher.poll(&prefs).is_empty());

        prefs.insert("c", true);
        prefs.insert("a", true);
        assert_eq!(watcher.poll(&prefs), vec!["a", "c"]);
        assert!(watcher.poll(&prefs).is_empty());

        prefs.insert("a", false);
        assert_eq!(watcher.poll(&prefs), vec!["a"]);
    }

    #[test]
    fn watcher_ignores_unwatched_keys() {
        let mut prefs = MemoryPrefs::new();
        let mut watcher = PrefWatcher::new(vec!["a"], &prefs);
        prefs.insert("z", true);
        assert!(watcher.poll(&prefs).is_empty());
    }

    #[test]
    fn acknowledged_value_is_not_reported() {
        let mut prefs = MemoryPrefs::new();
        let mut watcher = PrefWatcher::new(vec!["a"], &prefs);
        prefs.insert("a", true);
        watcher.acknowledge("a", true);
        assert!(watcher.poll(&prefs).is_empty());
    }
}
