//! # FORLORN Shared
//!
//! Common types used by the feed codec, bots and tooling.
//!
//! ## CRITICAL RULE
//!
//! This crate holds values, not behavior. Nothing here reads or writes
//! wire bytes; that belongs to `forlorn_networking`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{CELL_WIDTH, MAP_CELLS, SAVE_SIZE, TICK_RATE};
pub use math::Point;
