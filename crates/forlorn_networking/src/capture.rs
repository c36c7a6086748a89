//! # Feed Captures
//!
//! Recorded server frames for replay and regression tests.
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬─────
//! │ len u32 (LE) │ frame bytes  │ len u32 (LE) │ ...
//! └──────────────┴──────────────┴──────────────┴─────
//! ```

use std::path::Path;

use crate::error::CaptureError;
use crate::protocol::{ByteCursor, ByteWriter};

/// Appends one frame to a capture buffer.
pub fn write_frame(writer: &mut ByteWriter, frame: &[u8]) -> Result<(), CaptureError> {
    let len = u32::try_from(frame.len()).map_err(|_| CaptureError::FrameTooLarge(frame.len()))?;
    writer.write_u32(len);
    writer.write_bytes(frame);
    Ok(())
}

/// Splits a capture into its frames without copying them.
pub fn read_frames(data: &[u8]) -> Result<Vec<&[u8]>, CaptureError> {
    let mut cursor = ByteCursor::new(data);
    let mut frames = Vec::new();

    while !cursor.is_exhausted() {
        let offset = cursor.position();
        let truncated = |_| CaptureError::Truncated { frame: frames.len(), offset };
        let len = cursor.read_u32().map_err(truncated)?;
        let frame = cursor.read_bytes(len as usize).map_err(truncated)?;
        frames.push(frame);
    }

    Ok(frames)
}

/// Reads a capture file from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<u8>, CaptureError> {
    Ok(std::fs::read(path)?)
}

/// Writes frames to a capture file on disk.
pub fn save<'a>(
    path: impl AsRef<Path>,
    frames: impl IntoIterator<Item = &'a [u8]>,
) -> Result<(), CaptureError> {
    let mut writer = ByteWriter::new();
    for frame in frames {
        write_frame(&mut writer, frame)?;
    }
    std::fs::write(path, writer.as_slice())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_split_back_out() {
        let mut writer = ByteWriter::new();
        write_frame(&mut writer, &[5]).unwrap();
        write_frame(&mut writer, &[]).unwrap();
        write_frame(&mut writer, &[1, 2, 3]).unwrap();

        let data = writer.into_inner();
        let expected: [&[u8]; 3] = [&[5], &[], &[1, 2, 3]];
        assert_eq!(read_frames(&data).unwrap(), expected.to_vec());
    }

    #[test]
    fn test_truncated_capture() {
        let mut writer = ByteWriter::new();
        write_frame(&mut writer, &[5]).unwrap();
        write_frame(&mut writer, &[1, 2, 3]).unwrap();
        let mut data = writer.into_inner();
        data.pop();

        let err = read_frames(&data).unwrap_err();
        assert!(matches!(err, CaptureError::Truncated { frame: 1, offset: 5 }));

        let err = read_frames(&[1, 0]).unwrap_err();
        assert!(matches!(err, CaptureError::Truncated { frame: 0, offset: 0 }));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("forlorn_capture_{}.bin", std::process::id()));
        let frames: [&[u8]; 2] = [&[5], &[9, 9]];
        save(&path, frames).unwrap();

        let data = load(&path).unwrap();
        assert_eq!(read_frames(&data).unwrap(), frames.to_vec());
        std::fs::remove_file(&path).ok();
    }
}
