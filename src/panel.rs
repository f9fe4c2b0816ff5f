//! Headless counterpart of the touchscreen gesture settings screen.
//!
//! Handles the side effects of each switch: ambient display maps onto the
//! doze setting, haptic feedback onto its system setting, and gesture
//! switches schedule a debounced gesture_mode update.

use std::time::{Duration, Instant};

use log::{debug, error};

use crate::debounce::Debouncer;
use crate::error::Result;
use crate::gesture::GestureFlag;
use crate::paths::{ambient_display_key, haptic_feedback_key};
use crate::prefs::PrefStore;
use crate::settings::{enable_doze, haptic_feedback_enabled, is_doze_enabled, set_haptic_feedback, SettingsProvider};

pub struct SettingsPanel<S: SettingsProvider> {
    settings: S,
    gesture_update: Debouncer,
    doze_dependents_enabled: bool,
}

impl<S: SettingsProvider> SettingsPanel<S> {
    pub fn new(settings: S, debounce: Duration) -> Self {
        Self { settings, gesture_update: Debouncer::new(debounce), doze_dependents_enabled: true }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Mirrors doze and haptic settings into their switches.
    pub fn resume(&mut self, prefs: &mut dyn PrefStore) -> Result<()> {
        let doze = is_doze_enabled(&self.settings)?;
        prefs.put_bool(ambient_display_key(), doze)?;
        self.doze_dependents_enabled = doze;

        let haptic = haptic_feedback_enabled(&self.settings)?;
        prefs.put_bool(haptic_feedback_key(), haptic)?;
        debug!("[Panel] resumed: doze={}, haptic={}", doze, haptic);
        Ok(())
    }

    /// Reacts to a switch change. False vetoes the change.
    pub fn on_preference_change(&mut self, key: &str, value: bool, now: Instant) -> bool {
        if key == ambient_display_key() {
            match enable_doze(&mut self.settings, value) {
                Ok(()) => {
                    self.doze_dependents_enabled = value;
                    true
                }
                Err(e) => {
                    error!("[Panel] Could not set doze to {}: {}", value, e);
                    false
                }
            }
        } else if key == haptic_feedback_key() {
            match set_haptic_feedback(&mut self.settings, value) {
                Ok(()) => true,
                Err(e) => {
                    error!("[Panel] Could not set haptic feedback to {}: {}", value, e);
                    false
                }
            }
        } else {
            if GestureFlag::from_key(key).is_some() {
                self.gesture_update.schedule(now);
            }
            true
        }
    }

    pub fn take_gesture_update(&mut self, now: Instant) -> bool {
        self.gesture_update.fire(now)
    }

    pub fn gesture_update_pending(&self) -> bool {
        self.gesture_update.is_pending()
    }

    /// Hand wave, pick up and pocket only apply while doze is on.
    pub fn doze_dependents_enabled(&self) -> bool {
        self.doze_dependents_enabled
    }
}
