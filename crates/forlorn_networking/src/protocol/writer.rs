//! # Byte Writer
//!
//! Little-endian writer producing the exact layout [`super::ByteCursor`] reads.
//!
//! The feed is server-to-client, so bots never need this on the hot path.
//! It exists for fixtures, captures and benchmarks.

use crate::error::{EncodeError, EncodeResult};

/// Byte writer - appends little-endian fields to a growable buffer.
///
/// Can be reused across messages via [`ByteWriter::reset`].
#[derive(Debug, Default)]
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buffer: Vec::with_capacity(capacity) }
    }

    /// Resets the writer for reuse.
    #[inline]
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Returns the number of bytes written.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no bytes have been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns a slice of the written data.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the writer, returning the written bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Writes raw bytes verbatim.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Writes a signed byte.
    #[inline]
    pub fn write_i8(&mut self, value: i8) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes a boolean as `0` or `1`.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Writes a u16 in little-endian format.
    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes an i16 in little-endian format.
    #[inline]
    pub fn write_i16(&mut self, value: i16) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes a u32 in little-endian format.
    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes an i32 in little-endian format.
    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes a u64 in little-endian format.
    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes an i64 in little-endian format.
    #[inline]
    pub fn write_i64(&mut self, value: i64) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes a f32 in little-endian format.
    #[inline]
    pub fn write_f32(&mut self, value: f32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes a f64 in little-endian format.
    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes an `i32` element count.
    pub fn write_count(&mut self, what: &'static str, len: usize) -> EncodeResult<()> {
        let count = i32::try_from(len).map_err(|_| EncodeError::LengthOverflow {
            what,
            len,
            max: i32::MAX as usize,
        })?;
        self.write_i32(count);
        Ok(())
    }

    /// Writes a string followed by a NUL terminator.
    pub fn write_cstr(&mut self, value: &str) -> EncodeResult<()> {
        if let Some(index) = value.bytes().position(|b| b == 0) {
            return Err(EncodeError::InteriorNul { index });
        }
        self.write_bytes(value.as_bytes());
        self.write_u8(0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ByteCursor;

    #[test]
    fn test_layout_is_little_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u16(0x1234);
        writer.write_i32(-2);
        writer.write_bool(true);
        assert_eq!(writer.as_slice(), &[0x34, 0x12, 0xFE, 0xFF, 0xFF, 0xFF, 0x01]);
    }

    #[test]
    fn test_cursor_reads_what_writer_wrote() {
        let mut writer = ByteWriter::with_capacity(64);
        writer.write_i8(-7);
        writer.write_u64(u64::MAX - 1);
        writer.write_f64(std::f64::consts::PI);
        writer.write_cstr("héllo").unwrap();
        writer.write_i64(i64::MIN);

        let bytes = writer.into_inner();
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.read_i8().unwrap(), -7);
        assert_eq!(cursor.read_u64().unwrap(), u64::MAX - 1);
        assert_eq!(cursor.read_f64().unwrap(), std::f64::consts::PI);
        assert_eq!(cursor.read_cstr().unwrap(), "héllo");
        assert_eq!(cursor.read_i64().unwrap(), i64::MIN);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_cstr_rejects_interior_nul() {
        let mut writer = ByteWriter::new();
        let err = writer.write_cstr("a\0b").unwrap_err();
        assert!(matches!(err, EncodeError::InteriorNul { index: 1 }));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_reset_reuses_buffer() {
        let mut writer = ByteWriter::new();
        writer.write_u32(7);
        writer.reset();
        assert!(writer.is_empty());
        writer.write_u8(9);
        assert_eq!(writer.len(), 1);
    }
}
