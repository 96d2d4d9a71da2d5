//! Interrupt-safe access to a side LED engine.
//!
//! Wraps the engine in a `critical-section` mutex so input handlers running
//! in interrupt context and the render loop never interleave a
//! read-modify-write of the settings record.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;

use crate::LedDriver;
use crate::engine::SideLed;
use crate::persistence::SettingsStore;
use crate::settings::SideLedSettings;

/// A side LED engine shared between execution contexts.
pub struct SharedSideLed<D: LedDriver, S: SettingsStore, const LED_COUNT: usize> {
    inner: Mutex<RefCell<SideLed<D, S, LED_COUNT>>>,
}

impl<D: LedDriver, S: SettingsStore, const LED_COUNT: usize> SharedSideLed<D, S, LED_COUNT> {
    pub const fn new(engine: SideLed<D, S, LED_COUNT>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut SideLed<D, S, LED_COUNT>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut()))
    }

    /// See [`SideLed::update`].
    pub fn update(&self, now: Instant) {
        self.with(|engine| engine.update(now));
    }

    /// See [`SideLed::process_keycode`].
    pub fn process_keycode(&self, keycode: u16, pressed: bool) -> bool {
        self.with(|engine| engine.process_keycode(keycode, pressed))
    }

    /// See [`SideLed::handle_remote`].
    pub fn handle_remote(&self, data: &mut [u8]) {
        self.with(|engine| engine.handle_remote(data));
    }

    /// Copy of the current settings record.
    pub fn settings(&self) -> SideLedSettings {
        self.with(|engine| *engine.settings())
    }
}
