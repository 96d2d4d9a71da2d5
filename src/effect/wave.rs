//! Wave effect
//!
//! The breathing envelope travels along the strip: each LED is shifted by a
//! fixed phase offset. The cycling variant spreads the hue the same way.

use super::{Effect, HueSource, speed_multiplier};
use crate::{
    color::{Rgb, hsv_color},
    math8::{scale_by_envelope, wrap_hue},
    settings::SideLedSettings,
    waveform::envelope,
};

const WAVE_RATE: u32 = 10;
/// Envelope phase shift between neighbouring LEDs
const PHASE_OFFSET: u32 = 25;
/// Hue shift between neighbouring LEDs
const HUE_OFFSET: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveEffect {
    hue: HueSource,
}

impl WaveEffect {
    pub const fn new(hue: HueSource) -> Self {
        Self { hue }
    }
}

impl Effect for WaveEffect {
    fn render(&self, settings: &SideLedSettings, step: u8, leds: &mut [Rgb]) {
        let multiplier = speed_multiplier(settings.speed, WAVE_RATE);
        let base_phase = u32::from(step) * multiplier / 10;

        for (i, led) in (0u32..).zip(leds.iter_mut()) {
            let value =
                scale_by_envelope(settings.brightness, envelope(base_phase + i * PHASE_OFFSET));
            let hue = match self.hue {
                HueSource::Fixed => settings.hue,
                HueSource::Cycling => wrap_hue(base_phase + i * HUE_OFFSET),
            };

            *led = hsv_color(hue, settings.saturation, value);
        }
    }
}
