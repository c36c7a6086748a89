//! # Networking Error Types
//!
//! All errors that can occur while decoding the feed, encoding frames,
//! or loading configuration and captures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while decoding a server message.
///
/// Every variant is fatal to the decode call that produced it. A malformed
/// message means framing or protocol drift upstream; nothing here retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A read would cross the end of the buffer.
    #[error("out of bounds: need {needed} bytes at offset {offset}, {available} available")]
    OutOfBounds {
        /// Cursor position when the read was attempted.
        offset: usize,
        /// Bytes the read required.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },

    /// A string had no NUL terminator before the end of the buffer, or its
    /// bytes were not UTF-8.
    #[error("malformed string starting at offset {offset}")]
    MalformedString {
        /// Position of the first byte of the string.
        offset: usize,
    },

    /// A tag byte outside its known value set.
    #[error("malformed {kind} tag: {value}")]
    MalformedEnum {
        /// Name of the enum being decoded.
        kind: &'static str,
        /// The offending raw byte.
        value: u8,
    },

    /// The leading byte is not a message the feed can carry.
    #[error("unknown message type: {0}")]
    UnknownMessageType(u8),
}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while encoding a frame.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// A NUL-terminated string contains a NUL byte.
    #[error("string contains an interior NUL byte at index {index}")]
    InteriorNul {
        /// Index of the NUL inside the string.
        index: usize,
    },

    /// A sequence is longer than its count field can express.
    #[error("{what} count {len} exceeds the wire limit of {max}")]
    LengthOverflow {
        /// Which sequence overflowed.
        what: &'static str,
        /// Actual length.
        len: usize,
        /// Largest length the wire accepts.
        max: usize,
    },

    /// The discrete grid is not square with side `grid_size`.
    #[error("grid shape mismatch: expected {expected}x{expected}")]
    GridShape {
        /// Declared grid side.
        expected: usize,
    },

    /// Action JSON serialization failed.
    #[error("action serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for encode operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors surfaced by a [`crate::client::Session`].
#[derive(Error, Debug)]
pub enum SessionError {
    /// The incoming frame did not decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The bot's actions could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::ClientConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised while reading or writing capture files.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The capture file could not be read or written.
    #[error("capture I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A frame header or body runs past the end of the capture.
    #[error("capture truncated in frame {frame} at offset {offset}")]
    Truncated {
        /// Zero-based index of the broken frame.
        frame: usize,
        /// Byte offset where the frame started.
        offset: usize,
    },

    /// A frame is larger than a `u32` length prefix can describe.
    #[error("frame of {0} bytes is too large for a capture")]
    FrameTooLarge(usize),
}
