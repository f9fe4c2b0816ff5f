use std::thread::sleep;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use crate::config::Config;
use crate::gesture::GestureFlag;
use crate::panel::SettingsPanel;
use crate::paths::{ambient_display_key, gesture_control_key, haptic_feedback_key};
use crate::prefs::{PrefStore, PrefWatcher, PropertyPrefs};
use crate::settings::{SettingsCommand, SettingsProvider};
use crate::sync::GestureSyncController;
use crate::writer::{LineWriter, SysfsNode};

// every switch the panel or the controller reacts to
pub fn watched_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = GestureFlag::ALL.iter().map(|flag| flag.key()).collect();
    keys.extend([gesture_control_key(), ambient_display_key(), haptic_feedback_key()]);
    keys
}

pub struct Service<P: PrefStore, W: LineWriter, S: SettingsProvider> {
    prefs: P,
    controller: GestureSyncController<W>,
    panel: SettingsPanel<S>,
    watcher: PrefWatcher,
}

impl<P: PrefStore, W: LineWriter, S: SettingsProvider> Service<P, W, S> {
    /// Syncs doze/haptic switches, writes the initial gesture mode and
    /// snapshots the watched switches.
    pub fn start(mut prefs: P, writer: W, settings: S, debounce: Duration) -> Self {
        let mut panel = SettingsPanel::new(settings, debounce);
        if let Err(e) = panel.resume(&mut prefs) {
            warn!("[Service] Could not mirror host settings: {}", e);
        }
        let controller = GestureSyncController::new(&prefs, writer);
        let watcher = PrefWatcher::new(watched_keys(), &prefs);
        Self { prefs, controller, panel, watcher }
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn prefs_mut(&mut self) -> &mut P {
        &mut self.prefs
    }

    pub fn controller(&self) -> &GestureSyncController<W> {
        &self.controller
    }

    pub fn panel(&self) -> &SettingsPanel<S> {
        &self.panel
    }

    /// One pass: dispatch changed switches, then run a due gesture update.
    pub fn tick(&mut self, now: Instant) {
        for key in self.watcher.poll(&self.prefs) {
            let value = self.prefs.get_bool(key, false);
            debug!("[Service] {} changed to {}", key, value);

            self.controller.apply(key, &self.prefs);
            if !self.panel.on_preference_change(key, value, now) {
                // vetoed, put the old value back
                match self.prefs.put_bool(key, !value) {
                    Ok(()) => self.watcher.acknowledge(key, !value),
                    Err(e) => error!("[Service] Could not restore {}: {}", key, e),
                }
            }
        }

        if self.panel.take_gesture_update(now) {
            self.controller.recompute();
        }
    }
}

// main loop
pub fn run(config: &Config) -> ! {
    info!("[GestureSync] Starting, node: {}", config.node_path.display());
    debug!(
        "[GestureSync] prefix: {}, debounce: {:?}, poll: {:?}",
        config.prefs_prefix, config.debounce, config.poll_interval
    );

    let prefs = PropertyPrefs::new(config.prefs_prefix.clone());
    let node = SysfsNode::new(&config.node_path);
    let mut service = Service::start(prefs, node, SettingsCommand, config.debounce);

    loop {
        service.tick(Instant::now());
        sleep(config.poll_interval);
    }
}
