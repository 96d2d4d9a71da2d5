//! Breathing effect
//!
//! The whole strip pulses with the wave table envelope. The cycling variant
//! also drifts the hue, twice as fast as the envelope phase.

use super::{Effect, HueSource, speed_multiplier};
use crate::{
    color::{Rgb, hsv_color},
    math8::{scale_by_envelope, wrap_hue},
    settings::SideLedSettings,
    waveform::envelope,
};

const BREATHE_RATE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreatheEffect {
    hue: HueSource,
}

impl BreatheEffect {
    pub const fn new(hue: HueSource) -> Self {
        Self { hue }
    }
}

impl Effect for BreatheEffect {
    fn render(&self, settings: &SideLedSettings, step: u8, leds: &mut [Rgb]) {
        let multiplier = speed_multiplier(settings.speed, BREATHE_RATE);
        let progress = u32::from(step) * multiplier;

        let value = scale_by_envelope(settings.brightness, envelope(progress / 10));
        let hue = match self.hue {
            HueSource::Fixed => settings.hue,
            HueSource::Cycling => wrap_hue(progress / 5),
        };

        leds.fill(hsv_color(hue, settings.saturation, value));
    }
}
