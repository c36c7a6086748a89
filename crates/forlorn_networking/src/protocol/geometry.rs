//! # Geometry Codec
//!
//! Points and colliders, shared by the map and game-state payloads.

use forlorn_shared::Point;

use super::cursor::{capacity_hint, ByteCursor};
use super::writer::ByteWriter;
use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};

/// Size of an encoded [`Point`] in bytes.
pub const POINT_SIZE: usize = 16;

/// What a collider outline belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColliderKind {
    /// Static map wall.
    Wall = 0,
    /// Projectile hitbox.
    Projectile = 1,
}

impl ColliderKind {
    /// Converts from the wire tag.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Wall),
            1 => Some(Self::Projectile),
            _ => None,
        }
    }
}

/// Polygon-like obstacle outline.
#[derive(Clone, Debug, PartialEq)]
pub struct Collider {
    /// What the outline belongs to.
    pub kind: ColliderKind,
    /// Outline vertices in wire order.
    pub vertices: Vec<Point>,
}

impl Collider {
    /// Creates a wall from its vertices.
    #[must_use]
    pub fn wall(vertices: Vec<Point>) -> Self {
        Self { kind: ColliderKind::Wall, vertices }
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

/// Decodes a point: x then y, both f64.
#[inline]
pub fn decode_point(cursor: &mut ByteCursor<'_>) -> DecodeResult<Point> {
    let x = cursor.read_f64()?;
    let y = cursor.read_f64()?;
    Ok(Point::new(x, y))
}

/// Decodes `vertex_count` points followed by the collider kind byte.
pub fn decode_collider(cursor: &mut ByteCursor<'_>, vertex_count: usize) -> DecodeResult<Collider> {
    let mut vertices = Vec::with_capacity(capacity_hint(vertex_count, cursor, POINT_SIZE));
    for _ in 0..vertex_count {
        vertices.push(decode_point(cursor)?);
    }
    let tag = cursor.read_u8()?;
    let kind = ColliderKind::from_u8(tag).ok_or(DecodeError::MalformedEnum {
        kind: "collider kind",
        value: tag,
    })?;
    Ok(Collider { kind, vertices })
}

/// Encodes a point.
#[inline]
pub fn encode_point(writer: &mut ByteWriter, point: Point) {
    writer.write_f64(point.x);
    writer.write_f64(point.y);
}

/// Encodes a collider with its one-byte vertex count prefix, as it appears
/// in the map wall list.
pub fn encode_collider(writer: &mut ByteWriter, collider: &Collider) -> EncodeResult<()> {
    let count = u8::try_from(collider.vertices.len()).map_err(|_| EncodeError::LengthOverflow {
        what: "collider vertex",
        len: collider.vertices.len(),
        max: u8::MAX as usize,
    })?;
    writer.write_u8(count);
    for &vertex in &collider.vertices {
        encode_point(writer, vertex);
    }
    writer.write_u8(collider.kind as u8);
    Ok(())
}
