//! glyphscan - Template-matching OCR for Rust
//!
//! Recognizes machine-rendered text by matching a library of glyph images
//! against a page, resolving overlapping matches and reading the survivors
//! row by row.
//!
//! # Overview
//!
//! - Image I/O (PNG) and binarization
//! - Font families loaded from directories of glyph images
//! - Binary correlation search over a page region
//! - Conflict resolution and reading-order reconstruction
//!
//! # Example
//!
//! ```
//! use glyphscan::{Pix, PixelDepth};
//! use glyphscan::recog::{Ocr, OcrOptions};
//!
//! let ocr = Ocr::new(OcrOptions::default()).unwrap();
//! let page = Pix::new(64, 16, PixelDepth::Bit1).unwrap();
//! // no fonts loaded, nothing to read
//! assert_eq!(ocr.recognize(&page).unwrap(), "");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphscan_io as io;
pub use glyphscan_recog as recog;
