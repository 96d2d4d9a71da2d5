/// Scale an 8-bit value by an envelope (0-255 = 0.0-1.0)
///
/// Unlike `scale8`-style shifts this divides by 255, so a full envelope
/// leaves the value untouched.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale_by_envelope(value: u8, envelope: u8) -> u8 {
    ((value as u16 * envelope as u16) / 255) as u8
}

/// Increase a value by `step`, stopping at `max`
#[inline]
pub const fn step_up(value: u8, step: u8, max: u8) -> u8 {
    if value >= max || max - value < step {
        max
    } else {
        value + step
    }
}

/// Decrease a value by `step`, stopping at zero
#[inline]
pub const fn step_down(value: u8, step: u8) -> u8 {
    value.saturating_sub(step)
}

/// Truncate a wide intermediate to a hue on the 0-255 circle
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn wrap_hue(value: u32) -> u8 {
    (value % 256) as u8
}
