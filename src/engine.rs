#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::Instant;

use crate::LedDriver;
use crate::clock::AnimationClock;
use crate::color::{BLACK, Rgb};
use crate::config::SideLedConfig;
use crate::effect::EffectSlot;
use crate::keycode::SideLedKeycode;
use crate::persistence::SettingsStore;
use crate::remote::{RemoteCommand, SideLedValue, write_response};
use crate::settings::SideLedSettings;

/// Side LED engine - owns the settings record and animation state
///
/// All entry points run to completion. Every accepted settings change is
/// written to the store exactly once.
pub struct SideLed<D: LedDriver, S: SettingsStore, const LED_COUNT: usize> {
    // External dependencies and configuration
    driver: D,
    store: S,
    base_index: usize,

    // Internal state
    settings: SideLedSettings,
    clock: AnimationClock,
    frame_buffer: [Rgb; LED_COUNT],
}

impl<D: LedDriver, S: SettingsStore, const LED_COUNT: usize> SideLed<D, S, LED_COUNT> {
    /// Create a new engine with the given settings
    pub fn new(driver: D, store: S, settings: SideLedSettings, config: &SideLedConfig) -> Self {
        Self {
            driver,
            store,
            base_index: config.base_index,
            settings,
            clock: AnimationClock::new(config.tick_interval),
            frame_buffer: [BLACK; LED_COUNT],
        }
    }

    /// Create a new engine with the settings saved in the store
    ///
    /// Falls back to default settings if the store has no valid record.
    pub fn restore(driver: D, mut store: S, config: &SideLedConfig) -> Self {
        let settings = match store.load() {
            Ok(settings) => settings,
            Err(_e) => {
                #[cfg(feature = "esp32-log")]
                println!("side_led: failed to load settings: {:?}, using defaults", _e);
                SideLedSettings::default()
            }
        };
        Self::new(driver, store, settings, config)
    }

    /// Process one refresh
    ///
    /// Advances the animation step if a tick interval has elapsed, then
    /// renders the current effect and writes it to the driver. Call this at
    /// the LED refresh cadence.
    pub fn update(&mut self, now: Instant) {
        self.clock.tick(now);

        let effect = EffectSlot::for_mode(self.settings.mode);
        effect.render(&self.settings, self.clock.step(), &mut self.frame_buffer);

        for (offset, color) in self.frame_buffer.iter().enumerate() {
            self.driver.set_led(self.base_index + offset, *color);
        }
    }

    /// Handle a keycode event
    ///
    /// Returns `true` if the keycode belongs to the side LED command set.
    /// Adjustments are applied on release only.
    pub fn process_keycode(&mut self, keycode: u16, pressed: bool) -> bool {
        let Some(keycode) = SideLedKeycode::from_raw(keycode) else {
            return false;
        };
        if !pressed {
            keycode.apply(&mut self.settings);
            self.persist();
        }
        true
    }

    /// Handle a remote configuration command buffer
    ///
    /// Buffers for other channels and unknown commands are ignored. Get
    /// responses are written back into `data`.
    pub fn handle_remote(&mut self, data: &mut [u8]) {
        let command = match RemoteCommand::decode(data) {
            Ok(command) => command,
            Err(_e) => {
                #[cfg(feature = "esp32-log")]
                println!("side_led: ignoring remote command: {:?}", _e);
                return;
            }
        };

        match command {
            RemoteCommand::Set(value) => {
                value.apply(&mut self.settings);
                self.persist();
            }
            RemoteCommand::Get(id) => {
                let value = SideLedValue::read(id, &self.settings);
                if let Err(_e) = write_response(data, value) {
                    #[cfg(feature = "esp32-log")]
                    println!("side_led: no room for {:?} response: {:?}", id, _e);
                }
            }
            RemoteCommand::Save => self.persist(),
        }
    }

    /// Write the settings record to the store
    ///
    /// Failures are logged, rendering continues with the in-memory record.
    fn persist(&mut self) {
        if let Err(_e) = self.store.save(&self.settings) {
            #[cfg(feature = "esp32-log")]
            println!("side_led: failed to save settings: {:?}", _e);
        }
    }

    pub const fn settings(&self) -> &SideLedSettings {
        &self.settings
    }

    /// Current animation step
    pub const fn step(&self) -> u8 {
        self.clock.step()
    }

    /// Last rendered frame, in strip order
    pub const fn frame(&self) -> &[Rgb; LED_COUNT] {
        &self.frame_buffer
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Replace the animation clock, e.g. to align its baseline with boot time
    pub fn set_clock(&mut self, clock: AnimationClock) {
        self.clock = clock;
    }
}
