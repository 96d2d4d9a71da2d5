//! Solid color effect
//!
//! Fills all LEDs with the configured hue, saturation and brightness.

use super::Effect;
use crate::{
    color::{Rgb, hsv_color},
    settings::SideLedSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidEffect;

impl Effect for SolidEffect {
    fn render(&self, settings: &SideLedSettings, _step: u8, leds: &mut [Rgb]) {
        leds.fill(hsv_color(
            settings.hue,
            settings.saturation,
            settings.brightness,
        ));
    }
}
