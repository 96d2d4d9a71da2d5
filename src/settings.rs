//! Side LED settings record
//!
//! The record is the single source of truth for rendering. Every adjustment
//! keeps the field invariants: hue wraps, saturation/brightness/speed
//! saturate, mode cycles through `0..MODE_COUNT`.

use crate::config::{ADJUST_STEP, MAX_MODE, MAX_SPEED};
use crate::math8::{step_down, step_up};
use crate::persistence::PersistenceError;

/// Size of the persisted settings record in bytes
pub const SETTINGS_RECORD_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideLedSettings {
    pub enabled: bool,
    /// Raw mode id, see [`crate::EffectId`]
    pub mode: u8,
    pub hue: u8,
    pub saturation: u8,
    pub brightness: u8,
    pub speed: u8,
}

impl Default for SideLedSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: 1,
            hue: 0,
            saturation: 255,
            brightness: 255,
            speed: 2,
        }
    }
}

impl SideLedSettings {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Advance the mode, wrapping past the last one
    pub fn next_mode(&mut self) {
        self.mode = if self.mode >= MAX_MODE { 0 } else { self.mode + 1 };
    }

    /// Step the mode back, wrapping below zero
    pub fn prev_mode(&mut self) {
        self.mode = if self.mode == 0 || self.mode > MAX_MODE {
            MAX_MODE
        } else {
            self.mode - 1
        };
    }

    pub fn increase_hue(&mut self) {
        self.hue = self.hue.wrapping_add(ADJUST_STEP);
    }

    pub fn decrease_hue(&mut self) {
        self.hue = self.hue.wrapping_sub(ADJUST_STEP);
    }

    pub fn increase_saturation(&mut self) {
        self.saturation = step_up(self.saturation, ADJUST_STEP, u8::MAX);
    }

    pub fn decrease_saturation(&mut self) {
        self.saturation = step_down(self.saturation, ADJUST_STEP);
    }

    pub fn increase_brightness(&mut self) {
        self.brightness = step_up(self.brightness, ADJUST_STEP, u8::MAX);
    }

    pub fn decrease_brightness(&mut self) {
        self.brightness = step_down(self.brightness, ADJUST_STEP);
    }

    pub fn increase_speed(&mut self) {
        self.speed = step_up(self.speed, 1, MAX_SPEED);
    }

    pub fn decrease_speed(&mut self) {
        self.speed = step_down(self.speed, 1);
    }

    /// Set the effect from a remote request
    ///
    /// A non-zero effect implies the strip is on, zero turns it off.
    pub fn set_effect(&mut self, mode: u8) {
        self.mode = mode;
        self.enabled = mode > 0;
    }

    /// Effect id as reported to remote queries, zero while disabled
    pub const fn reported_effect(&self) -> u8 {
        if self.enabled { self.mode } else { 0 }
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.min(MAX_SPEED);
    }

    /// Encode the record in its persisted layout
    pub const fn to_bytes(&self) -> [u8; SETTINGS_RECORD_SIZE] {
        [
            self.enabled as u8,
            self.mode,
            self.hue,
            self.saturation,
            self.brightness,
            self.speed,
        ]
    }

    /// Decode a persisted record
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistenceError> {
        let Some(record) = bytes.get(..SETTINGS_RECORD_SIZE) else {
            return Err(PersistenceError::InvalidRecord);
        };
        let &[enabled, mode, hue, saturation, brightness, speed] = record else {
            return Err(PersistenceError::InvalidRecord);
        };
        if enabled > 1 || speed > MAX_SPEED {
            return Err(PersistenceError::InvalidRecord);
        }

        Ok(Self {
            enabled: enabled == 1,
            mode,
            hue,
            saturation,
            brightness,
            speed,
        })
    }
}
