//! Effect system with compile-time known effect variants
//!
//! Effects are stateless: each frame is a pure function of the settings
//! record and the animation step. The mode id to effect mapping is an
//! explicit table, several ids may share one effect.

mod breathe;
mod solid;
mod spectrum;
mod wave;

pub use breathe::BreatheEffect;
pub use solid::SolidEffect;
pub use spectrum::SpectrumEffect;
pub use wave::WaveEffect;

use crate::{
    color::{BLACK, Rgb},
    config::{MAX_SPEED, MODE_COUNT},
    settings::SideLedSettings,
};

const EFFECT_NAME_NONE: &str = "none";
const EFFECT_NAME_WAVE: &str = "wave";
const EFFECT_NAME_WAVE1: &str = "wave1";
const EFFECT_NAME_WAVE2: &str = "wave2";
const EFFECT_NAME_FIXED_WAVE: &str = "fixed_wave";
const EFFECT_NAME_WAVE_RGB: &str = "wave_rgb";
const EFFECT_NAME_SPECTRUM: &str = "spectrum";
const EFFECT_NAME_BREATHE: &str = "breathe";
const EFFECT_NAME_BREATHE_RGB: &str = "breathe_rgb";
const EFFECT_NAME_LIGHT: &str = "light";

const EFFECT_ID_NONE: u8 = 0;
const EFFECT_ID_WAVE: u8 = 1;
const EFFECT_ID_WAVE1: u8 = 2;
const EFFECT_ID_WAVE2: u8 = 3;
const EFFECT_ID_FIXED_WAVE: u8 = 4;
const EFFECT_ID_WAVE_RGB: u8 = 5;
const EFFECT_ID_SPECTRUM: u8 = 6;
const EFFECT_ID_BREATHE: u8 = 7;
const EFFECT_ID_BREATHE_RGB: u8 = 8;
const EFFECT_ID_LIGHT: u8 = 9;

/// Mode id to effect mapping, indexed by [`EffectId`]
const EFFECT_TABLE: [EffectSlot; MODE_COUNT as usize] = [
    EffectSlot::Off,
    EffectSlot::Wave(WaveEffect::new(HueSource::Fixed)),
    EffectSlot::Wave(WaveEffect::new(HueSource::Fixed)),
    EffectSlot::Wave(WaveEffect::new(HueSource::Fixed)),
    EffectSlot::Wave(WaveEffect::new(HueSource::Fixed)),
    EffectSlot::Wave(WaveEffect::new(HueSource::Cycling)),
    EffectSlot::Spectrum(SpectrumEffect),
    EffectSlot::Breathe(BreatheEffect::new(HueSource::Fixed)),
    EffectSlot::Breathe(BreatheEffect::new(HueSource::Cycling)),
    EffectSlot::Solid(SolidEffect),
];

pub trait Effect {
    /// Render a single frame for the given settings and animation step
    fn render(&self, settings: &SideLedSettings, step: u8, leds: &mut [Rgb]);
}

/// Where an animated effect takes its hue from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueSource {
    /// Configured hue
    Fixed,
    /// Hue drifting with the animation step
    Cycling,
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSlot {
    /// All LEDs dark
    Off,
    /// Single configured color
    Solid(SolidEffect),
    /// Whole strip pulsing with the envelope
    Breathe(BreatheEffect),
    /// Whole strip cycling through hues
    Spectrum(SpectrumEffect),
    /// Envelope travelling along the strip
    Wave(WaveEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    None = EFFECT_ID_NONE,
    Wave = EFFECT_ID_WAVE,
    Wave1 = EFFECT_ID_WAVE1,
    Wave2 = EFFECT_ID_WAVE2,
    FixedWave = EFFECT_ID_FIXED_WAVE,
    WaveRgb = EFFECT_ID_WAVE_RGB,
    Spectrum = EFFECT_ID_SPECTRUM,
    Breathe = EFFECT_ID_BREATHE,
    BreatheRgb = EFFECT_ID_BREATHE_RGB,
    Light = EFFECT_ID_LIGHT,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_NONE => Self::None,
            EFFECT_ID_WAVE => Self::Wave,
            EFFECT_ID_WAVE1 => Self::Wave1,
            EFFECT_ID_WAVE2 => Self::Wave2,
            EFFECT_ID_FIXED_WAVE => Self::FixedWave,
            EFFECT_ID_WAVE_RGB => Self::WaveRgb,
            EFFECT_ID_SPECTRUM => Self::Spectrum,
            EFFECT_ID_BREATHE => Self::Breathe,
            EFFECT_ID_BREATHE_RGB => Self::BreatheRgb,
            EFFECT_ID_LIGHT => Self::Light,
            _ => return None,
        })
    }

    pub const fn to_slot(self) -> EffectSlot {
        EFFECT_TABLE[self as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => EFFECT_NAME_NONE,
            Self::Wave => EFFECT_NAME_WAVE,
            Self::Wave1 => EFFECT_NAME_WAVE1,
            Self::Wave2 => EFFECT_NAME_WAVE2,
            Self::FixedWave => EFFECT_NAME_FIXED_WAVE,
            Self::WaveRgb => EFFECT_NAME_WAVE_RGB,
            Self::Spectrum => EFFECT_NAME_SPECTRUM,
            Self::Breathe => EFFECT_NAME_BREATHE,
            Self::BreatheRgb => EFFECT_NAME_BREATHE_RGB,
            Self::Light => EFFECT_NAME_LIGHT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_NONE => Some(Self::None),
            EFFECT_NAME_WAVE => Some(Self::Wave),
            EFFECT_NAME_WAVE1 => Some(Self::Wave1),
            EFFECT_NAME_WAVE2 => Some(Self::Wave2),
            EFFECT_NAME_FIXED_WAVE => Some(Self::FixedWave),
            EFFECT_NAME_WAVE_RGB => Some(Self::WaveRgb),
            EFFECT_NAME_SPECTRUM => Some(Self::Spectrum),
            EFFECT_NAME_BREATHE => Some(Self::Breathe),
            EFFECT_NAME_BREATHE_RGB => Some(Self::BreatheRgb),
            EFFECT_NAME_LIGHT => Some(Self::Light),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Select the effect for a raw mode id
    ///
    /// Unknown ids fall back to a solid color.
    pub fn for_mode(mode: u8) -> Self {
        EffectId::from_raw(mode).map_or(Self::Solid(SolidEffect), EffectId::to_slot)
    }

    /// Render the current effect
    ///
    /// A disabled strip is dark regardless of the effect.
    pub fn render(&self, settings: &SideLedSettings, step: u8, leds: &mut [Rgb]) {
        if !settings.enabled {
            leds.fill(BLACK);
            return;
        }
        match self {
            Self::Off => leds.fill(BLACK),
            Self::Solid(effect) => effect.render(settings, step, leds),
            Self::Breathe(effect) => effect.render(settings, step, leds),
            Self::Spectrum(effect) => effect.render(settings, step, leds),
            Self::Wave(effect) => effect.render(settings, step, leds),
        }
    }
}

/// Animation speed factor for a base rate
///
/// Speeds above the maximum are treated as the maximum.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn speed_multiplier(speed: u8, base: u32) -> u32 {
    let speed = if speed > MAX_SPEED { MAX_SPEED } else { speed };
    (speed as u32 + 1) * base
}
