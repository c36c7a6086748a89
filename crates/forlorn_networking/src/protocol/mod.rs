//! # Feed Protocol
//!
//! Binary decoding of the server feed and encoding of bot actions.
//!
//! ## Frame Structure
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Type (1 byte)                                                │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Payload (variable, little-endian, no length prefix)          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! - One cursor per decode call, owned by the caller, never shared
//! - Every sequence carries its count up front; lengths are never guessed
//!   from what is left in the buffer
//! - Errors are values, never panics

mod actions;
mod cursor;
mod entities;
mod geometry;
mod message;
mod snapshots;
mod writer;

pub use actions::{encode_actions, Action};
pub use cursor::ByteCursor;
pub use entities::{
    decode_blade, decode_coin, decode_player, decode_projectile, encode_blade, encode_coin,
    encode_player, encode_projectile, Blade, Coin, PlayerInfo, Projectile, Weapon, BLADE_SIZE,
    COIN_SIZE, MIN_PLAYER_SIZE, PROJECTILE_SIZE,
};
pub use geometry::{
    decode_collider, decode_point, encode_collider, encode_point, Collider, ColliderKind,
    POINT_SIZE,
};
pub use message::{decode_message, MessageType, ServerMessage};
pub use snapshots::{
    decode_game_state, decode_map, encode_game_state, encode_map, GameSnapshot, MapSnapshot,
};
pub use writer::ByteWriter;
