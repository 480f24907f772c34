//! glyphscan-recog - Template-matching OCR
//!
//! Recognizes text by matching a library of pre-rendered glyph images
//! ("font symbols") against a binarized page:
//!
//! - **Search**: every symbol is correlated with every placement in a
//!   region of the page ([`detect`], [`search`])
//! - **Consolidation**: overlapping matches are resolved and the survivors
//!   sorted into reading order ([`reconstruct`])
//! - **Assembly**: symbol names are joined into lines ([`assemble_text`])
//!
//! # Quick Start
//!
//! ```no_run
//! use glyphscan_recog::{Ocr, OcrOptions};
//!
//! let mut ocr = Ocr::new(OcrOptions::default()).unwrap();
//! ocr.load_font("fonts/font_1").unwrap();
//! let page = glyphscan_io::read_image("page.png").unwrap();
//! println!("{}", ocr.recognize(&page).unwrap());
//! ```
//!
//! # Modules
//!
//! - [`symbol`]: font symbols and libraries
//! - [`loader`]: font directory loading
//! - [`search`]: the template search primitive
//! - [`consolidate`]: conflict resolution and reading order

pub mod consolidate;
mod detect;
mod error;
pub mod loader;
mod ocr;
pub mod search;
pub mod symbol;
mod symbol_match;
mod text;

pub use error::{RecogError, RecogResult};

pub use consolidate::{comes_before, preferred, reconstruct};
pub use detect::{detect, detect_with, find_all};
pub use loader::{load_font_dir, load_font_dir_with_threshold, symbol_name_from_file};
pub use ocr::{Ocr, OcrOptions};
pub use search::{CorrelationSearch, Hit, MatchSearch};
pub use symbol::{FontLibrary, FontSymbol};
pub use symbol_match::SymbolMatch;
pub use text::assemble_text;

// Re-export core for convenience
pub use glyphscan_core;
