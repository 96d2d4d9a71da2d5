use crate::settings::SideLedSettings;

/// Error type for the persistence operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceError {
    Busy,
    DriverError,
    /// Stored record is missing or does not hold valid settings
    InvalidRecord,
}

/// Power-loss-safe storage for the side LED settings
///
/// `save` is called once for every accepted settings change.
pub trait SettingsStore {
    /// Durably write the settings record
    fn save(&mut self, settings: &SideLedSettings) -> Result<(), PersistenceError>;

    /// Read the settings record saved last
    fn load(&mut self) -> Result<SideLedSettings, PersistenceError>;
}
