//! # Byte Cursor
//!
//! Bounds-checked sequential reader over a received message.
//!
//! ## Design
//!
//! - Borrows the buffer, never copies it
//! - One read offset, only ever moves forward
//! - A failed read leaves the offset where it was

use crate::error::{DecodeError, DecodeResult};

/// Sequential little-endian reader over an immutable byte buffer.
///
/// Every decoding step takes the cursor by `&mut` so the offset is owned by
/// exactly one decode call at a time.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the first byte of `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, position: 0 }
    }

    /// Returns the number of bytes consumed so far.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes remaining.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads `len` raw bytes.
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> DecodeResult<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(DecodeError::OutOfBounds {
                offset: self.position,
                needed: len,
                available,
            });
        }
        let buffer = self.buffer;
        let start = self.position;
        self.position += len;
        Ok(&buffer[start..self.position])
    }

    /// Reads a fixed-size byte array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Reads a signed byte.
    #[inline]
    pub fn read_i8(&mut self) -> DecodeResult<i8> {
        Ok(i8::from_le_bytes(self.read_array()?))
    }

    /// Reads a boolean (one byte, nonzero is true).
    #[inline]
    pub fn read_bool(&mut self) -> DecodeResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a u16 in little-endian format.
    #[inline]
    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Reads an i16 in little-endian format.
    #[inline]
    pub fn read_i16(&mut self) -> DecodeResult<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    /// Reads a u32 in little-endian format.
    #[inline]
    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Reads an i32 in little-endian format.
    #[inline]
    pub fn read_i32(&mut self) -> DecodeResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Reads a u64 in little-endian format.
    #[inline]
    pub fn read_u64(&mut self) -> DecodeResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Reads an i64 in little-endian format.
    #[inline]
    pub fn read_i64(&mut self) -> DecodeResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Reads a f32 in little-endian format.
    #[inline]
    pub fn read_f32(&mut self) -> DecodeResult<f32> {
        self.read_u32().map(f32::from_bits)
    }

    /// Reads a f64 in little-endian format.
    #[inline]
    pub fn read_f64(&mut self) -> DecodeResult<f64> {
        self.read_u64().map(f64::from_bits)
    }

    /// Reads an `i32` element count.
    ///
    /// A negative count is an empty sequence, the same way the server's own
    /// loops treat it.
    #[inline]
    pub fn read_count(&mut self) -> DecodeResult<usize> {
        let count = self.read_i32()?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Reads a NUL-terminated UTF-8 string and steps past the terminator.
    pub fn read_cstr(&mut self) -> DecodeResult<&'a str> {
        let buffer = self.buffer;
        let start = self.position;
        let rest = &buffer[start.min(buffer.len())..];
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::MalformedString { offset: start })?;
        let text = std::str::from_utf8(&rest[..len])
            .map_err(|_| DecodeError::MalformedString { offset: start })?;
        self.position += len + 1;
        Ok(text)
    }
}

/// Capacity to reserve for `count` elements of at least `min_size` bytes.
///
/// Clamped by what the buffer can still hold so a hostile count cannot force
/// a huge allocation before the reads fail.
#[inline]
#[must_use]
pub(crate) fn capacity_hint(count: usize, cursor: &ByteCursor<'_>, min_size: usize) -> usize {
    count.min(cursor.remaining() / min_size.max(1))
}
