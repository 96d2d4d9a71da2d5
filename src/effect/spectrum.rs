//! Spectrum cycling effect
//!
//! Slowly rotates the whole strip through the color wheel at the configured
//! saturation and brightness.

use super::{Effect, speed_multiplier};
use crate::{
    color::{Rgb, hsv_color},
    math8::wrap_hue,
    settings::SideLedSettings,
};

const SPECTRUM_RATE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumEffect;

impl Effect for SpectrumEffect {
    fn render(&self, settings: &SideLedSettings, step: u8, leds: &mut [Rgb]) {
        let multiplier = speed_multiplier(settings.speed, SPECTRUM_RATE);
        let hue = wrap_hue(u32::from(step) * multiplier / 5);

        leds.fill(hsv_color(hue, settings.saturation, settings.brightness));
    }
}
