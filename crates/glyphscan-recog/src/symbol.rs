//! Font symbols and font libraries
//!
//! A [`FontSymbol`] is one pre-rendered glyph: its name and a binary
//! template. Symbols are created when a library is loaded and never change
//! afterwards; every match found on a page borrows the symbol it came from.

use crate::{RecogError, RecogResult};
use glyphscan_core::{DEFAULT_BINARIZE_THRESHOLD, Pix};
use std::fmt;

/// An immutable glyph template
#[derive(Debug, Clone)]
pub struct FontSymbol {
    name: String,
    template: Pix,
    width: u32,
    height: u32,
    area: u64,
    foreground: u64,
}

impl FontSymbol {
    /// Create a symbol, binarizing the image with the default threshold.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidTemplate`] if the image has zero size or
    /// no foreground pixels after binarization.
    pub fn new(name: impl Into<String>, image: &Pix) -> RecogResult<Self> {
        Self::with_threshold(name, image, DEFAULT_BINARIZE_THRESHOLD)
    }

    /// Create a symbol, binarizing the image with `binarize_threshold`.
    ///
    /// 1 bpp images are used as they are; gray and color images become
    /// foreground wherever their gray value is below the threshold.
    pub fn with_threshold(
        name: impl Into<String>,
        image: &Pix,
        binarize_threshold: u8,
    ) -> RecogResult<Self> {
        let name = name.into();
        let (width, height) = (image.width(), image.height());
        let invalid = |name: String| RecogError::InvalidTemplate {
            name,
            width,
            height,
        };
        if width == 0 || height == 0 {
            return Err(invalid(name));
        }

        let template = image.convert_to_binary(binarize_threshold)?;
        let foreground = template.count_foreground();
        if foreground == 0 {
            return Err(invalid(name));
        }

        Ok(Self {
            name,
            template,
            width,
            height,
            area: u64::from(width) * u64::from(height),
            foreground,
        })
    }

    /// The glyph's logical identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The 1 bpp template
    pub fn template(&self) -> &Pix {
        &self.template
    }

    /// Template width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Template height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`
    pub fn area(&self) -> u64 {
        self.area
    }

    /// Number of foreground pixels in the template
    pub fn foreground(&self) -> u64 {
        self.foreground
    }
}

impl fmt::Display for FontSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named, ordered collection of font symbols
#[derive(Debug, Clone, Default)]
pub struct FontLibrary {
    name: String,
    symbols: Vec<FontSymbol>,
}

impl FontLibrary {
    /// Create an empty library
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: Vec::new(),
        }
    }

    /// Create a library from symbols, keeping their order
    pub fn from_symbols(name: impl Into<String>, symbols: Vec<FontSymbol>) -> Self {
        Self {
            name: name.into(),
            symbols,
        }
    }

    /// Library (font family) name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a symbol
    pub fn push(&mut self, symbol: FontSymbol) {
        self.symbols.push(symbol);
    }

    /// Symbols in insertion order
    pub fn symbols(&self) -> &[FontSymbol] {
        &self.symbols
    }

    /// Look up the first symbol with the given name
    pub fn get(&self, name: &str) -> Option<&FontSymbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the library has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over the symbols in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, FontSymbol> {
        self.symbols.iter()
    }
}

impl<'a> IntoIterator for &'a FontLibrary {
    type Item = &'a FontSymbol;
    type IntoIter = std::slice::Iter<'a, FontSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
