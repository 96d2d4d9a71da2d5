#![no_std]

pub mod clock;
pub mod color;
pub mod config;
pub mod effect;
pub mod engine;
pub mod keycode;
pub mod math8;
pub mod persistence;
pub mod remote;
pub mod settings;
pub mod shared;
pub mod waveform;

pub use clock::AnimationClock;
pub use config::SideLedConfig;
pub use effect::{EffectId, EffectSlot};
pub use engine::SideLed;
pub use keycode::SideLedKeycode;
pub use persistence::{PersistenceError, SettingsStore};
pub use remote::{DecodeError, RemoteCommand, SideLedValue, ValueId};
pub use settings::SideLedSettings;
pub use shared::SharedSideLed;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The side LED engine is generic over this trait.
pub trait LedDriver {
    /// Set a single LED at the absolute driver index
    fn set_led(&mut self, index: usize, color: Rgb);
}
