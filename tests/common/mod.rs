#![allow(dead_code)]

use myrtio_side_led::{
    LedDriver, PersistenceError, Rgb, SettingsStore, SideLed, SideLedConfig, SideLedSettings,
};

pub const LED_COUNT: usize = 3;
pub const BASE_INDEX: usize = 5;

/// Driver recording every write
#[derive(Debug, Default)]
pub struct MockDriver {
    pub writes: Vec<(usize, Rgb)>,
}

impl MockDriver {
    /// Color last written to `index`
    pub fn last(&self, index: usize) -> Option<Rgb> {
        self.writes
            .iter()
            .rev()
            .find(|(i, _)| *i == index)
            .map(|(_, color)| *color)
    }
}

impl LedDriver for MockDriver {
    fn set_led(&mut self, index: usize, color: Rgb) {
        self.writes.push((index, color));
    }
}

/// Store counting saves
#[derive(Debug, Default)]
pub struct MockStore {
    pub saves: usize,
    pub saved: Option<SideLedSettings>,
    pub stored: Option<SideLedSettings>,
    pub fail: bool,
}

impl SettingsStore for MockStore {
    fn save(&mut self, settings: &SideLedSettings) -> Result<(), PersistenceError> {
        self.saves += 1;
        if self.fail {
            return Err(PersistenceError::DriverError);
        }
        self.saved = Some(*settings);
        Ok(())
    }

    fn load(&mut self) -> Result<SideLedSettings, PersistenceError> {
        self.stored.ok_or(PersistenceError::InvalidRecord)
    }
}

pub type TestSideLed = SideLed<MockDriver, MockStore, LED_COUNT>;

pub fn engine(settings: SideLedSettings) -> TestSideLed {
    SideLed::new(
        MockDriver::default(),
        MockStore::default(),
        settings,
        &SideLedConfig::new(BASE_INDEX),
    )
}
