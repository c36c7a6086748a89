//! # FORLORN Networking - Game Feed Codec
//!
//! Client side of the FORLORN game server protocol.
//!
//! ## Architecture
//!
//! - **Protocol**: bounds-checked decoding of the binary server feed, plus a
//!   byte-exact encoder for the same layout and JSON action frames
//! - **Client**: a [`Session`] that drives a [`Bot`] from raw frames
//! - **Feed**: a background [`FeedDecoder`] worker for transports that
//!   should not decode inline
//! - **Capture**: length-prefixed frame recordings for offline replay
//!
//! ## Message Flow
//!
//! ```text
//! SERVER                            CLIENT
//!   |                                 |
//!   |--- GameStart (map) ------------>|
//!   |--- GameState (tick 0) --------->|
//!   |<-- PlayerAction (JSON) ---------|
//!   |--- GameState (tick 1) --------->|
//!   |<-- PlayerAction (JSON) ---------|
//!   |              ...                |
//!   |--- GameEnd -------------------->|
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use forlorn_networking::{decode_message, ServerMessage};
//!
//! match decode_message(&frame)? {
//!     ServerMessage::GameStart(map) => println!("{} walls", map.walls.len()),
//!     ServerMessage::GameState(state) => println!("tick {}", state.tick),
//!     ServerMessage::GameEnd => println!("done"),
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod capture;
pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod protocol;
pub mod telemetry;

// Re-exports for convenience
pub use client::{Bot, Session, SessionPhase, SessionStats};
pub use config::{ClientConfig, FeedConfig};
pub use error::{
    CaptureError, ConfigError, DecodeError, DecodeResult, EncodeError, EncodeResult,
    SessionError,
};
pub use feed::{FeedDecoder, FeedStats};
pub use protocol::{
    decode_message, encode_actions, Action, Blade, Coin, Collider, ColliderKind, GameSnapshot,
    MapSnapshot, MessageType, PlayerInfo, Projectile, ServerMessage, Weapon,
};
