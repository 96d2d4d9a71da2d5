//! Physical keycodes for in-place side LED adjustment
//!
//! Keycodes occupy a consecutive range starting at [`KEYCODE_BASE`].

use crate::config::KEYCODE_BASE;
use crate::settings::SideLedSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum SideLedKeycode {
    Toggle = KEYCODE_BASE,
    ModeNext,
    ModePrev,
    HueUp,
    HueDown,
    SaturationUp,
    SaturationDown,
    BrightnessUp,
    BrightnessDown,
    SpeedUp,
    SpeedDown,
}

impl SideLedKeycode {
    const ALL: [Self; 11] = [
        Self::Toggle,
        Self::ModeNext,
        Self::ModePrev,
        Self::HueUp,
        Self::HueDown,
        Self::SaturationUp,
        Self::SaturationDown,
        Self::BrightnessUp,
        Self::BrightnessDown,
        Self::SpeedUp,
        Self::SpeedDown,
    ];

    /// Map a raw keycode into the side LED command set
    pub fn from_raw(keycode: u16) -> Option<Self> {
        let offset = keycode.checked_sub(KEYCODE_BASE)?;
        Self::ALL.get(usize::from(offset)).copied()
    }

    pub const fn to_raw(self) -> u16 {
        self as u16
    }

    /// Apply the adjustment bound to this keycode
    pub fn apply(self, settings: &mut SideLedSettings) {
        match self {
            Self::Toggle => settings.toggle(),
            Self::ModeNext => settings.next_mode(),
            Self::ModePrev => settings.prev_mode(),
            Self::HueUp => settings.increase_hue(),
            Self::HueDown => settings.decrease_hue(),
            Self::SaturationUp => settings.increase_saturation(),
            Self::SaturationDown => settings.decrease_saturation(),
            Self::BrightnessUp => settings.increase_brightness(),
            Self::BrightnessDown => settings.decrease_brightness(),
            Self::SpeedUp => settings.increase_speed(),
            Self::SpeedDown => settings.decrease_speed(),
        }
    }
}
