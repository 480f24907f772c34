//! glyphscan-io - Image I/O for glyphscan
//!
//! Reads glyph templates and pages from PNG files and writes binarized or
//! gray images back out. The format of an input is sniffed from its magic
//! bytes rather than its file name.

pub mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use png::{read_png, write_png};

use glyphscan_core::Pix;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for any format other than PNG.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let data = std::fs::read(path)?;
    read_image_mem(&data)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    match detect_format_from_bytes(data)? {
        ImageFormat::Png => read_png(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot decode {:?} images",
            other
        ))),
    }
}

/// Write an image to a file as PNG.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_png(pix, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image as PNG into a byte vector.
pub fn write_image_mem(pix: &Pix) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(pix, &mut buffer)?;
    Ok(buffer)
}
