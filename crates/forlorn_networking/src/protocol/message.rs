//! # Message Dispatch
//!
//! Every frame starts with one type byte. The dispatcher reads it and hands
//! the rest of the frame to the matching payload decoder.
//!
//! ```text
//! ┌──────────┬───────────────────────────────┐
//! │ type u8  │ payload                       │
//! ├──────────┼───────────────────────────────┤
//! │ 1        │ game state                    │
//! │ 3        │ player action (client only)   │
//! │ 4        │ map (game start)              │
//! │ 5        │ game end, no payload          │
//! └──────────┴───────────────────────────────┘
//! ```

use super::cursor::ByteCursor;
use super::snapshots::{
    decode_game_state, decode_map, encode_game_state, encode_map, GameSnapshot, MapSnapshot,
};
use super::writer::ByteWriter;
use crate::error::{DecodeError, DecodeResult, EncodeResult};

/// Types of frames in the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    /// Server -> Client: dynamic state for one tick.
    GameState = 1,
    /// Client -> Server: JSON action object.
    PlayerAction = 3,
    /// Server -> Client: map layout, the game is starting.
    GameStart = 4,
    /// Server -> Client: the game is over.
    GameEnd = 5,
}

impl MessageType {
    /// Converts from the wire tag.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::GameState),
            3 => Some(Self::PlayerAction),
            4 => Some(Self::GameStart),
            5 => Some(Self::GameEnd),
            _ => None,
        }
    }
}

/// A decoded server frame.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerMessage {
    /// The game is starting on this map.
    GameStart(MapSnapshot),
    /// State for one tick.
    GameState(GameSnapshot),
    /// The game is over.
    GameEnd,
}

impl ServerMessage {
    /// Decodes one complete server frame.
    ///
    /// Bytes after the declared payload are ignored.
    pub fn decode(frame: &[u8]) -> DecodeResult<Self> {
        Self::decode_prefix(frame).map(|(message, _)| message)
    }

    /// Decodes a server frame from the front of `frame`, also returning how
    /// many bytes the message occupied.
    pub fn decode_prefix(frame: &[u8]) -> DecodeResult<(Self, usize)> {
        let mut cursor = ByteCursor::new(frame);
        let tag = cursor.read_u8()?;

        let message = match MessageType::from_u8(tag) {
            Some(MessageType::GameStart) => Self::GameStart(decode_map(&mut cursor)?),
            Some(MessageType::GameState) => Self::GameState(decode_game_state(&mut cursor)?),
            Some(MessageType::GameEnd) => Self::GameEnd,
            Some(MessageType::PlayerAction) | None => {
                return Err(DecodeError::UnknownMessageType(tag));
            }
        };

        Ok((message, cursor.position()))
    }

    /// The frame type this message travels as.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::GameStart(_) => MessageType::GameStart,
            Self::GameState(_) => MessageType::GameState,
            Self::GameEnd => MessageType::GameEnd,
        }
    }

    /// Encodes this message as a complete frame.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        let mut writer = ByteWriter::new();
        self.encode_into(&mut writer)?;
        Ok(writer.into_inner())
    }

    /// Appends this message as a complete frame to `writer`.
    pub fn encode_into(&self, writer: &mut ByteWriter) -> EncodeResult<()> {
        writer.write_u8(self.message_type() as u8);
        match self {
            Self::GameStart(map) => encode_map(writer, map),
            Self::GameState(state) => encode_game_state(writer, state),
            Self::GameEnd => Ok(()),
        }
    }
}

/// Decodes one complete server frame.
///
/// Shorthand for [`ServerMessage::decode`].
pub fn decode_message(frame: &[u8]) -> DecodeResult<ServerMessage> {
    ServerMessage::decode(frame)
}
