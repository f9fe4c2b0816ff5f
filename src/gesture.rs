//! Gesture flags and the `gesture_mode` encoding.
//!
//! The touchscreen driver takes one line of seven `0`/`1` characters, most
//! significant bit first. Each gesture owns one bit and bit 6 is the control
//! bit, which is set whenever at least one gesture is on.

use bitflags::bitflags;

use crate::constants::GESTURE_MODE_WIDTH;
use crate::state::GestureState;

bitflags! {
    /// Bits understood by the driver's `gesture_mode` node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GestureMask: u8 {
        const V = 0x01;
        const Z = 0x02;
        const C = 0x04;
        const E = 0x08;
        const S = 0x10;
        const W = 0x20;
        /// Set iff any gesture bit is set.
        const CONTROL = 0x40;
    }
}

impl GestureMask {
    /// Renders the mask as the line the driver expects, e.g. `1000100`.
    pub fn to_line(self) -> String {
        format!("{:0width$b}", self.bits(), width = GESTURE_MODE_WIDTH)
    }
}

/// Letter-shaped touchscreen gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureFlag {
    C,
    E,
    S,
    V,
    W,
    Z,
}

impl GestureFlag {
    pub const COUNT: usize = 6;

    pub const ALL: [GestureFlag; 6] = [
        GestureFlag::C,
        GestureFlag::E,
        GestureFlag::S,
        GestureFlag::V,
        GestureFlag::W,
        GestureFlag::Z,
    ];

    /// Preference key holding this gesture's switch.
    pub fn key(self) -> &'static str {
        match self {
            GestureFlag::C => "touchscreen_gesture_c",
            GestureFlag::E => "touchscreen_gesture_e",
            GestureFlag::S => "touchscreen_gesture_s",
            GestureFlag::V => "touchscreen_gesture_v",
            GestureFlag::W => "touchscreen_gesture_w",
            GestureFlag::Z => "touchscreen_gesture_z",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.key() == key)
    }

    pub fn mask(self) -> GestureMask {
        match self {
            GestureFlag::C => GestureMask::C,
            GestureFlag::E => GestureMask::E,
            GestureFlag::S => GestureMask::S,
            GestureFlag::V => GestureMask::V,
            GestureFlag::W => GestureMask::W,
            GestureFlag::Z => GestureMask::Z,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Encodes the gesture switches into the driver mask.
///
/// Starts from an empty mask and toggles each gesture bit whose current
/// state differs from its switch, then toggles the control bit if anything
/// ended up set.
pub fn encode(state: &GestureState) -> GestureMask {
    let mut mask = GestureMask::empty();
    for flag in GestureFlag::ALL {
        let bit = flag.mask();
        if mask.intersects(bit) != state.is_enabled(flag) {
            mask ^= bit;
        }
    }
    if !mask.is_empty() {
        mask ^= GestureMask::CONTROL;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(flag: GestureFlag) -> GestureState {
        let mut state = GestureState::default();
        state.set(flag, true);
        state
    }

    #[test]
    fn single_gesture_sets_its_bit_and_control() {
        for flag in GestureFlag::ALL {
            let mask = encode(&only(flag));
            assert_eq!(mask.bits(), flag.mask().bits() ^ 0x40, "{:?}", flag);
        }
    }

    #[test]
    fn only_c_renders_expected_line() {
        let mask = encode(&only(GestureFlag::C));
        assert_eq!(mask.bits(), 0x44);
        assert_eq!(mask.to_line(), "1000100");
    }

    #[test]
    fn all_off_is_zero() {
        let mask = encode(&GestureState::default());
        assert!(mask.is_empty());
        assert_eq!(mask.to_line(), "0000000");
    }

    #[test]
    fn all_on_is_full_mask() {
        let mut state = GestureState::default();
        for flag in GestureFlag::ALL {
            state.set(flag, true);
        }
        let mask = encode(&state);
        assert_eq!(mask.bits(), 0x7f);
        assert_eq!(mask.to_line(), "1111111");
    }

    #[test]
    fn encode_is_repeatable() {
        let mut state = GestureState::default();
        state.set(GestureFlag::E, true);
        state.set(GestureFlag::Z, true);
        let first = encode(&state);
        assert_eq!(first, encode(&state));
        assert_eq!(first.bits(), 0x08 | 0x02 | 0x40);
        assert_eq!(first.to_line(), "1001010");
    }

    #[test]
    fn line_is_always_seven_binary_chars() {
        for bits in 0u8..=127 {
            let line = GestureMask::from_bits_retain(bits).to_line();
            assert_eq!(line.len(), GESTURE_MODE_WIDTH);
            assert!(line.chars().all(|c| c == '0' || c == '1'));
            assert_eq!(u8::from_str_radix(&line, 2).unwrap(), bits);
        }
    }

    #[test]
    fn keys_round_trip_and_reject_others() {
        for flag in GestureFlag::ALL {
            assert_eq!(GestureFlag::from_key(flag.key()), Some(flag));
        }
        assert_eq!(GestureFlag::from_key("touchscreen_gesture_control"), None);
        assert_eq!(GestureFlag::from_key("touchscreen_gesture_x"), None);
    }

    #[test]
    fn bit_constants_match_driver() {
        assert_eq!(GestureFlag::C.mask().bits(), 0x04);
        assert_eq!(GestureFlag::E.mask().bits(), 0x08);
        assert_eq!(GestureFlag::S.mask().bits(), 0x10);
        assert_eq!(GestureFlag::V.mask().bits(), 0x01);
        assert_eq!(GestureFlag::W.mask().bits(), 0x20);
        assert_eq!(GestureFlag::Z.mask().bits(), 0x02);
    }
}
