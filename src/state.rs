use crate::gesture::GestureFlag;
use crate::prefs::PrefStore;

// gesture switch state, one bool per flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureState {
    enabled: [bool; GestureFlag::COUNT],
}

impl GestureState {
    /// Reads every gesture switch, absent entries count as off.
    pub fn load(prefs: &dyn PrefStore) -> Self {
        let mut state = Self::default();
        for flag in GestureFlag::ALL {
            state.set(flag, prefs.get_bool(flag.key(), false));
        }
        state
    }

    /// Re-reads the switch behind `key`. Returns the full state when `key`
    /// is a gesture key, `None` otherwise.
    pub fn on_change(&mut self, key: &str, prefs: &dyn PrefStore) -> Option<GestureState> {
        let flag = GestureFlag::from_key(key)?;
        self.set(flag, prefs.get_bool(key, false));
        Some(*self)
    }

    pub fn is_enabled(&self, flag: GestureFlag) -> bool {
        self.enabled[flag.index()]
    }

    pub fn set(&mut self, flag: GestureFlag, on: bool) {
        self.enabled[flag.index()] = on;
    }

    pub fn enabled_flags(&self) -> impl Iterator<Item = GestureFlag> + '_ {
        GestureFlag::ALL.into_iter().filter(move |flag| self.is_enabled(*flag))
    }
}
