use embassy_time::Duration;

/// Number of selectable modes, ids are `0..MODE_COUNT`
pub const MODE_COUNT: u8 = 10;

/// Highest mode id reachable from keycodes
pub const MAX_MODE: u8 = MODE_COUNT - 1;

/// Highest animation speed
pub const MAX_SPEED: u8 = 4;

/// Hue, saturation and brightness step for keycode adjustments
pub const ADJUST_STEP: u8 = 8;

/// Animation step cadence
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(20);

/// First driver index of the side strip
pub const DEFAULT_BASE_INDEX: usize = 0;

/// Remote configuration channel served by this module
pub const REMOTE_CHANNEL: u8 = 4;

/// First raw keycode of the side LED command set
///
/// Matches the start of the keyboard-level custom keycode range.
pub const KEYCODE_BASE: u16 = 0x7E00;

/// Configuration for the side LED engine
#[derive(Debug, Clone, Copy)]
pub struct SideLedConfig {
    /// Driver index of the first side LED
    pub base_index: usize,
    /// Minimal time between animation steps
    pub tick_interval: Duration,
}

impl SideLedConfig {
    pub const fn new(base_index: usize) -> Self {
        Self {
            base_index,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl Default for SideLedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_INDEX)
    }
}
