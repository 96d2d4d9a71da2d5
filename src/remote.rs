//! Remote configuration protocol
//!
//! Wire layout: `[command_id, channel_id, value_id, payload...]`. Buffers are
//! decoded into a [`RemoteCommand`] at the boundary; get responses are
//! written back into the payload region of the same buffer.

use heapless::Vec;

use crate::config::REMOTE_CHANNEL;
use crate::settings::SideLedSettings;

const COMMAND_ID_SET: u8 = 0x07;
const COMMAND_ID_GET: u8 = 0x08;
const COMMAND_ID_SAVE: u8 = 0x09;

const VALUE_ID_BRIGHTNESS: u8 = 1;
const VALUE_ID_EFFECT: u8 = 2;
const VALUE_ID_SPEED: u8 = 3;
const VALUE_ID_COLOR: u8 = 4;

/// Offset of the payload region in a command buffer
pub const PAYLOAD_OFFSET: usize = 3;

/// Longest value payload in bytes
pub const MAX_VALUE_LEN: usize = 2;

/// Payload bytes of a single value
pub type ValuePayload = Vec<u8, MAX_VALUE_LEN>;

/// Reasons a command buffer is not handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer ends before the fields the command needs
    TooShort,
    /// Command is routed to another subsystem
    ForeignChannel(u8),
    UnknownCommand(u8),
    UnknownValue(u8),
}

/// Settings value addressed by a remote command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ValueId {
    Brightness = VALUE_ID_BRIGHTNESS,
    Effect = VALUE_ID_EFFECT,
    Speed = VALUE_ID_SPEED,
    Color = VALUE_ID_COLOR,
}

impl ValueId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            VALUE_ID_BRIGHTNESS => Self::Brightness,
            VALUE_ID_EFFECT => Self::Effect,
            VALUE_ID_SPEED => Self::Speed,
            VALUE_ID_COLOR => Self::Color,
            _ => return None,
        })
    }

    /// Number of payload bytes carrying this value
    pub const fn payload_len(self) -> usize {
        match self {
            Self::Color => 2,
            Self::Brightness | Self::Effect | Self::Speed => 1,
        }
    }
}

/// A settings value with its data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideLedValue {
    Brightness(u8),
    Effect(u8),
    Speed(u8),
    Color { hue: u8, saturation: u8 },
}

impl SideLedValue {
    /// Decode a value from its payload bytes
    pub fn decode(id: ValueId, payload: &[u8]) -> Result<Self, DecodeError> {
        let bytes = payload.get(..id.payload_len()).ok_or(DecodeError::TooShort)?;
        Ok(match (id, bytes) {
            (ValueId::Brightness, &[brightness]) => Self::Brightness(brightness),
            (ValueId::Effect, &[effect]) => Self::Effect(effect),
            (ValueId::Speed, &[speed]) => Self::Speed(speed),
            (ValueId::Color, &[hue, saturation]) => Self::Color { hue, saturation },
            _ => return Err(DecodeError::TooShort),
        })
    }

    /// Read a value as reported to remote queries
    pub const fn read(id: ValueId, settings: &SideLedSettings) -> Self {
        match id {
            ValueId::Brightness => Self::Brightness(settings.brightness),
            ValueId::Effect => Self::Effect(settings.reported_effect()),
            ValueId::Speed => Self::Speed(settings.speed),
            ValueId::Color => Self::Color {
                hue: settings.hue,
                saturation: settings.saturation,
            },
        }
    }

    /// Write the value into the settings record
    pub fn apply(self, settings: &mut SideLedSettings) {
        match self {
            Self::Brightness(brightness) => settings.brightness = brightness,
            Self::Effect(effect) => settings.set_effect(effect),
            Self::Speed(speed) => settings.set_speed(speed),
            Self::Color { hue, saturation } => {
                settings.hue = hue;
                settings.saturation = saturation;
            }
        }
    }

    /// Encode the value in its wire layout
    pub fn encode(self) -> ValuePayload {
        let mut payload = ValuePayload::new();
        let _ = match self {
            Self::Brightness(value) | Self::Effect(value) | Self::Speed(value) => {
                payload.push(value).map_err(|_| ())
            }
            Self::Color { hue, saturation } => payload.extend_from_slice(&[hue, saturation]),
        };
        payload
    }
}

/// Decoded remote command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteCommand {
    /// Store a new value
    Set(SideLedValue),
    /// Report the current value
    Get(ValueId),
    /// Flush the settings record to storage
    Save,
}

impl RemoteCommand {
    /// Decode a command buffer addressed to the side LED channel
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (&command_id, rest) = data.split_first().ok_or(DecodeError::TooShort)?;
        let (&channel_id, rest) = rest.split_first().ok_or(DecodeError::TooShort)?;
        if channel_id != REMOTE_CHANNEL {
            return Err(DecodeError::ForeignChannel(channel_id));
        }

        match command_id {
            COMMAND_ID_SET => {
                let (id, payload) = Self::decode_value_id(rest)?;
                Ok(Self::Set(SideLedValue::decode(id, payload)?))
            }
            COMMAND_ID_GET => {
                let (id, _) = Self::decode_value_id(rest)?;
                Ok(Self::Get(id))
            }
            COMMAND_ID_SAVE => Ok(Self::Save),
            other => Err(DecodeError::UnknownCommand(other)),
        }
    }

    fn decode_value_id(data: &[u8]) -> Result<(ValueId, &[u8]), DecodeError> {
        let (&value_id, payload) = data.split_first().ok_or(DecodeError::TooShort)?;
        let id = ValueId::from_raw(value_id).ok_or(DecodeError::UnknownValue(value_id))?;
        Ok((id, payload))
    }
}

/// Write a get response into the payload region of a command buffer
pub fn write_response(data: &mut [u8], value: SideLedValue) -> Result<(), DecodeError> {
    let payload = value.encode();
    let region = data
        .get_mut(PAYLOAD_OFFSET..PAYLOAD_OFFSET + payload.len())
        .ok_or(DecodeError::TooShort)?;
    region.copy_from_slice(&payload);
    Ok(())
}
