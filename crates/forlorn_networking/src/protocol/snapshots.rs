//! # Snapshot Codec
//!
//! The two top-level payloads: the map sent once at game start and the
//! game state sent every tick.
//!
//! Both are decoded strictly front to back. A snapshot is returned only
//! after every declared element has been consumed.

use forlorn_shared::SAVE_SIZE;

use super::cursor::{capacity_hint, ByteCursor};
use super::entities::{
    decode_coin, decode_player, encode_coin, encode_player, Coin, PlayerInfo, COIN_SIZE,
    MIN_PLAYER_SIZE,
};
use super::geometry::{decode_collider, encode_collider, Collider};
use super::writer::ByteWriter;
use crate::error::{DecodeResult, EncodeError, EncodeResult};

/// Smallest encoded wall: vertex count byte plus kind byte.
const MIN_WALL_SIZE: usize = 2;

/// Map layout, sent once when a game starts.
#[derive(Clone, Debug, PartialEq)]
pub struct MapSnapshot {
    /// Side of the discrete grid.
    pub grid_size: u8,
    /// `grid_size` rows of `grid_size` cells, row-major.
    pub discrete_grid: Vec<Vec<u8>>,
    /// Wall outlines.
    pub walls: Vec<Collider>,
    /// Opaque per-bot storage the server echoes back every game.
    pub private_save: [u8; SAVE_SIZE],
}

impl MapSnapshot {
    /// Returns the grid cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.discrete_grid.get(row)?.get(col).copied()
    }
}

/// Dynamic game state for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSnapshot {
    /// Server tick number.
    pub tick: i32,
    /// Current round.
    pub round: i8,
    /// Every player in the game.
    pub players: Vec<PlayerInfo>,
    /// Coins currently on the map.
    pub coins: Vec<Coin>,
}

impl GameSnapshot {
    /// Finds a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerInfo> {
        self.players.iter().find(|p| p.name == name)
    }
}

/// Decodes a map payload.
pub fn decode_map(cursor: &mut ByteCursor<'_>) -> DecodeResult<MapSnapshot> {
    let grid_size = cursor.read_u8()?;
    let side = usize::from(grid_size);

    let mut discrete_grid = Vec::with_capacity(side);
    for _ in 0..side {
        discrete_grid.push(cursor.read_bytes(side)?.to_vec());
    }

    let wall_count = cursor.read_count()?;
    let mut walls = Vec::with_capacity(capacity_hint(wall_count, cursor, MIN_WALL_SIZE));
    for _ in 0..wall_count {
        let vertex_count = usize::from(cursor.read_u8()?);
        walls.push(decode_collider(cursor, vertex_count)?);
    }

    let private_save = cursor.read_array::<SAVE_SIZE>()?;

    Ok(MapSnapshot {
        grid_size,
        discrete_grid,
        walls,
        private_save,
    })
}

/// Decodes a game-state payload.
pub fn decode_game_state(cursor: &mut ByteCursor<'_>) -> DecodeResult<GameSnapshot> {
    let tick = cursor.read_i32()?;
    let round = cursor.read_i8()?;

    let player_count = cursor.read_count()?;
    let mut players = Vec::with_capacity(capacity_hint(player_count, cursor, MIN_PLAYER_SIZE));
    for _ in 0..player_count {
        players.push(decode_player(cursor)?);
    }

    let coin_count = cursor.read_count()?;
    let mut coins = Vec::with_capacity(capacity_hint(coin_count, cursor, COIN_SIZE));
    for _ in 0..coin_count {
        coins.push(decode_coin(cursor)?);
    }

    Ok(GameSnapshot {
        tick,
        round,
        players,
        coins,
    })
}

/// Encodes a map payload.
///
/// The grid must be exactly `grid_size` rows of `grid_size` cells.
pub fn encode_map(writer: &mut ByteWriter, map: &MapSnapshot) -> EncodeResult<()> {
    let side = usize::from(map.grid_size);
    if map.discrete_grid.len() != side || map.discrete_grid.iter().any(|row| row.len() != side) {
        return Err(EncodeError::GridShape { expected: side });
    }

    writer.write_u8(map.grid_size);
    for row in &map.discrete_grid {
        writer.write_bytes(row);
    }

    writer.write_count("wall", map.walls.len())?;
    for wall in &map.walls {
        encode_collider(writer, wall)?;
    }

    writer.write_bytes(&map.private_save);
    Ok(())
}

/// Encodes a game-state payload.
pub fn encode_game_state(writer: &mut ByteWriter, state: &GameSnapshot) -> EncodeResult<()> {
    writer.write_i32(state.tick);
    writer.write_i8(state.round);

    writer.write_count("player", state.players.len())?;
    for player in &state.players {
        encode_player(writer, player)?;
    }

    writer.write_count("coin", state.coins.len())?;
    for coin in &state.coins {
        encode_coin(writer, coin);
    }
    Ok(())
}
