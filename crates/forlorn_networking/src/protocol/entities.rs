//! # Entity Codec
//!
//! Players, projectiles, blades and coins as they appear in a game-state
//! message.
//!
//! ## Player Layout
//!
//! ```text
//! name\0 │ color i32 │ health i32 │ score i64 │ pos │ has_dest │ [dest] │
//! weapon u8 │ projectile count i32 │ projectiles... │ blade (always)
//! ```

use forlorn_shared::Point;
use uuid::Uuid;

use super::cursor::{capacity_hint, ByteCursor};
use super::geometry::{decode_point, encode_point, POINT_SIZE};
use super::writer::ByteWriter;
use crate::error::{DecodeError, DecodeResult, EncodeResult};

/// Size of an encoded [`Projectile`] in bytes.
pub const PROJECTILE_SIZE: usize = 16 + 2 * POINT_SIZE;

/// Size of an encoded [`Blade`] in bytes.
pub const BLADE_SIZE: usize = 2 * POINT_SIZE + 8;

/// Size of an encoded [`Coin`] in bytes.
pub const COIN_SIZE: usize = 16 + POINT_SIZE + 4;

/// Smallest possible encoded player: empty name, no destination, no
/// projectiles.
pub const MIN_PLAYER_SIZE: usize = 1 + 16 + POINT_SIZE + 1 + 1 + 4 + BLADE_SIZE;

/// Weapon a player currently holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weapon {
    /// Unarmed.
    #[default]
    None = 0,
    /// Projectile launcher.
    Canon = 1,
    /// Rotating blade.
    Blade = 2,
}

impl Weapon {
    /// Converts from the wire tag.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Canon),
            2 => Some(Self::Blade),
            _ => None,
        }
    }
}

/// A projectile in flight. Only meaningful within the tick that reported it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    /// Server-assigned identifier, stable while the projectile lives.
    pub id: Uuid,
    /// Current position.
    pub pos: Point,
    /// Where it is heading.
    pub dest: Point,
}

/// A player's blade segment. Reported even when another weapon is held.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Blade {
    /// Segment start.
    pub start: Point,
    /// Segment end.
    pub end: Point,
    /// Rotation in radians.
    pub rotation: f64,
}

/// A coin lying on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coin {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Position.
    pub pos: Point,
    /// Score gained by picking it up.
    pub value: i32,
}

/// One player's state for a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerInfo {
    /// Display name.
    pub name: String,
    /// Display color.
    pub color: i32,
    /// Remaining health. Not validated; the server may report any value.
    pub health: i32,
    /// Current score.
    pub score: i64,
    /// Current position.
    pub pos: Point,
    /// Movement target, if one is set. `None` is distinct from the origin.
    pub dest: Option<Point>,
    /// Equipped weapon.
    pub weapon: Weapon,
    /// Projectiles this player fired that are still alive.
    pub projectiles: Vec<Projectile>,
    /// Blade state.
    pub blade: Blade,
}

impl PlayerInfo {
    /// Returns true if the player has health left.
    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Encoded size of this player in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        MIN_PLAYER_SIZE
            + self.name.len()
            + if self.dest.is_some() { POINT_SIZE } else { 0 }
            + self.projectiles.len() * PROJECTILE_SIZE
    }
}

#[inline]
fn decode_uuid(cursor: &mut ByteCursor<'_>) -> DecodeResult<Uuid> {
    Ok(Uuid::from_bytes(cursor.read_array()?))
}

/// Decodes a projectile: id, position, destination.
pub fn decode_projectile(cursor: &mut ByteCursor<'_>) -> DecodeResult<Projectile> {
    let id = decode_uuid(cursor)?;
    let pos = decode_point(cursor)?;
    let dest = decode_point(cursor)?;
    Ok(Projectile { id, pos, dest })
}

/// Decodes a blade: start, end, rotation.
pub fn decode_blade(cursor: &mut ByteCursor<'_>) -> DecodeResult<Blade> {
    let start = decode_point(cursor)?;
    let end = decode_point(cursor)?;
    let rotation = cursor.read_f64()?;
    Ok(Blade { start, end, rotation })
}

/// Decodes a coin: id, position, value.
pub fn decode_coin(cursor: &mut ByteCursor<'_>) -> DecodeResult<Coin> {
    let id = decode_uuid(cursor)?;
    let pos = decode_point(cursor)?;
    let value = cursor.read_i32()?;
    Ok(Coin { id, pos, value })
}

/// Decodes one player record.
pub fn decode_player(cursor: &mut ByteCursor<'_>) -> DecodeResult<PlayerInfo> {
    let name = cursor.read_cstr()?.to_owned();
    let color = cursor.read_i32()?;
    let health = cursor.read_i32()?;
    let score = cursor.read_i64()?;
    let pos = decode_point(cursor)?;

    let dest = if cursor.read_bool()? {
        Some(decode_point(cursor)?)
    } else {
        None
    };

    let tag = cursor.read_u8()?;
    let weapon = Weapon::from_u8(tag).ok_or(DecodeError::MalformedEnum {
        kind: "weapon",
        value: tag,
    })?;

    let count = cursor.read_count()?;
    let mut projectiles = Vec::with_capacity(capacity_hint(count, cursor, PROJECTILE_SIZE));
    for _ in 0..count {
        projectiles.push(decode_projectile(cursor)?);
    }

    let blade = decode_blade(cursor)?;

    Ok(PlayerInfo {
        name,
        color,
        health,
        score,
        pos,
        dest,
        weapon,
        projectiles,
        blade,
    })
}

/// Encodes a projectile.
pub fn encode_projectile(writer: &mut ByteWriter, projectile: &Projectile) {
    writer.write_bytes(projectile.id.as_bytes());
    encode_point(writer, projectile.pos);
    encode_point(writer, projectile.dest);
}

/// Encodes a blade.
pub fn encode_blade(writer: &mut ByteWriter, blade: &Blade) {
    encode_point(writer, blade.start);
    encode_point(writer, blade.end);
    writer.write_f64(blade.rotation);
}

/// Encodes a coin.
pub fn encode_coin(writer: &mut ByteWriter, coin: &Coin) {
    writer.write_bytes(coin.id.as_bytes());
    encode_point(writer, coin.pos);
    writer.write_i32(coin.value);
}

/// Encodes one player record.
pub fn encode_player(writer: &mut ByteWriter, player: &PlayerInfo) -> EncodeResult<()> {
    writer.write_cstr(&player.name)?;
    writer.write_i32(player.color);
    writer.write_i32(player.health);
    writer.write_i64(player.score);
    encode_point(writer, player.pos);

    writer.write_bool(player.dest.is_some());
    if let Some(dest) = player.dest {
        encode_point(writer, dest);
    }

    writer.write_u8(player.weapon as u8);
    writer.write_count("projectile", player.projectiles.len())?;
    for projectile in &player.projectiles {
        encode_projectile(writer, projectile);
    }

    encode_blade(writer, &player.blade);
    Ok(())
}
