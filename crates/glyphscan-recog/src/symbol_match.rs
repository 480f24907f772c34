//! Symbol matches
//!
//! A [`SymbolMatch`] is one occurrence of a [`FontSymbol`] on a page. It
//! borrows its symbol, so the library must outlive every match found with
//! it.

use crate::symbol::FontSymbol;
use glyphscan_core::Box as PixBox;
use std::fmt;

/// A detected occurrence of a font symbol
#[derive(Debug, Clone, Copy)]
pub struct SymbolMatch<'a> {
    /// The symbol that was found
    pub symbol: &'a FontSymbol,
    /// Left edge in target coordinates
    pub x: i32,
    /// Top edge in target coordinates
    pub y: i32,
    /// Correlation score in [0, 1]
    pub quality: f64,
    /// The symbol's area, cached for conflict resolution
    pub area: u64,
}

impl<'a> SymbolMatch<'a> {
    /// Record `symbol` found at `(x, y)` with the given quality.
    pub fn new(symbol: &'a FontSymbol, x: i32, y: i32, quality: f64) -> Self {
        Self {
            symbol,
            x,
            y,
            quality,
            area: symbol.area(),
        }
    }

    /// Name of the matched symbol
    pub fn name(&self) -> &'a str {
        self.symbol.name()
    }

    /// Footprint of the match on the page
    pub fn rect(&self) -> PixBox {
        PixBox::new_unchecked(
            self.x,
            self.y,
            self.symbol.width() as i32,
            self.symbol.height() as i32,
        )
    }

    /// Whether the two footprints share at least one pixel.
    pub fn intersects(&self, other: &SymbolMatch<'_>) -> bool {
        self.rect().overlaps(&other.rect())
    }

    /// Whether the two matches sit on the same text row: their vertical
    /// spans touch or overlap, wherever they are horizontally.
    pub fn row_overlaps(&self, other: &SymbolMatch<'_>) -> bool {
        self.rect().overlaps_vertically(&other.rect())
    }
}

impl PartialEq for SymbolMatch<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.symbol, other.symbol)
            && self.x == other.x
            && self.y == other.y
            && self.quality == other.quality
            && self.area == other.area
    }
}

impl fmt::Display for SymbolMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@({},{}) q={:.3}",
            self.symbol.name(),
            self.x,
            self.y,
            self.quality
        )
    }
}
