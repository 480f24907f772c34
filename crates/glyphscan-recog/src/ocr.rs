//! Recognizer front end
//!
//! [`Ocr`] owns the loaded font families and the options, and runs the
//! whole pipeline on a page:
//!
//! ```text
//! page -> binarize -> search every symbol -> reconstruct -> text
//! ```

use crate::consolidate::reconstruct;
use crate::detect::find_all;
use crate::loader::load_font_dir_with_threshold;
use crate::search::CorrelationSearch;
use crate::symbol::{FontLibrary, FontSymbol};
use crate::symbol_match::SymbolMatch;
use crate::text::assemble_text;
use crate::{RecogError, RecogResult};
use glyphscan_core::{Box as PixBox, DEFAULT_BINARIZE_THRESHOLD, Pix};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;
use tracing::debug;

/// Options for template recognition
#[derive(Debug, Clone, PartialEq)]
pub struct OcrOptions {
    /// Minimum correlation for a placement to count as a match (default: 0.7)
    pub threshold: f64,

    /// Area difference from which the larger of two overlapping matches
    /// wins regardless of quality (default: 50)
    pub size_gap: u64,

    /// Gray level below which glyph and page pixels are ink (default: 128)
    pub binarize_threshold: u8,

    /// Search symbols on the rayon thread pool (default: true)
    pub parallel: bool,
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            threshold: 0.7,
            size_gap: 50,
            binarize_threshold: DEFAULT_BINARIZE_THRESHOLD,
            parallel: true,
        }
    }
}

impl OcrOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the size gap
    pub fn with_size_gap(mut self, size_gap: u64) -> Self {
        self.size_gap = size_gap;
        self
    }

    /// Set the binarization threshold
    pub fn with_binarize_threshold(mut self, threshold: u8) -> Self {
        self.binarize_threshold = threshold;
        self
    }

    /// Enable or disable the parallel search
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(RecogError::InvalidParameter(format!(
                "threshold must be in [0, 1], got {}",
                self.threshold
            )));
        }
        if self.binarize_threshold == 0 {
            return Err(RecogError::InvalidParameter(
                "binarize_threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Template-matching recognizer
#[derive(Debug, Clone, Default)]
pub struct Ocr {
    options: OcrOptions,
    families: BTreeMap<String, FontLibrary>,
}

impl Ocr {
    /// Create a recognizer with no fonts loaded
    pub fn new(options: OcrOptions) -> RecogResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            families: BTreeMap::new(),
        })
    }

    /// The recognizer's options
    pub fn options(&self) -> &OcrOptions {
        &self.options
    }

    /// Load a font directory as a family named after the directory.
    ///
    /// A family loaded earlier under the same name is replaced.
    pub fn load_font<P: AsRef<Path>>(&mut self, dir: P) -> RecogResult<&FontLibrary> {
        let library = load_font_dir_with_threshold(dir, self.options.binarize_threshold)?;
        Ok(self.add_library(library))
    }

    /// Register an already built library, replacing one with the same name.
    pub fn add_library(&mut self, library: FontLibrary) -> &FontLibrary {
        match self.families.entry(library.name().to_string()) {
            Entry::Occupied(mut slot) => {
                debug!(family = library.name(), "replacing font family");
                slot.insert(library);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(library),
        }
    }

    /// Look up a loaded family
    pub fn family(&self, name: &str) -> Option<&FontLibrary> {
        self.families.get(name)
    }

    /// Names of the loaded families, sorted
    pub fn family_names(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Number of symbols across all families
    pub fn total_symbols(&self) -> usize {
        self.families.values().map(FontLibrary::len).sum()
    }

    /// Recognize the text on a whole page using every loaded family.
    pub fn recognize(&self, image: &Pix) -> RecogResult<String> {
        let region = full_region(image);
        self.recognize_region(image, &region)
    }

    /// Recognize the text inside `region` using every loaded family.
    pub fn recognize_region(&self, image: &Pix, region: &PixBox) -> RecogResult<String> {
        let page = self.binarize(image)?;
        let matches = self.find_matches(&page, region, None)?;
        Ok(assemble_text(&matches))
    }

    /// Recognize a whole page using only the named family.
    pub fn recognize_with_family(&self, image: &Pix, family: &str) -> RecogResult<String> {
        let page = self.binarize(image)?;
        let matches = self.find_matches(&page, &full_region(&page), Some(family))?;
        Ok(assemble_text(&matches))
    }

    /// Search a binary page and return the conflict-free matches in
    /// reading order.
    ///
    /// With `family` set only that family is searched; otherwise all of
    /// them, in family name order.
    pub fn find_matches(
        &self,
        page: &Pix,
        region: &PixBox,
        family: Option<&str>,
    ) -> RecogResult<Vec<SymbolMatch<'_>>> {
        let symbols: Vec<&FontSymbol> = match family {
            Some(name) => self
                .families
                .get(name)
                .ok_or_else(|| RecogError::UnknownFamily(name.to_string()))?
                .iter()
                .collect(),
            None => self.families.values().flat_map(FontLibrary::iter).collect(),
        };

        let raw = find_all(
            &CorrelationSearch,
            &symbols,
            page,
            region,
            self.options.threshold,
            self.options.parallel,
        )?;
        let ordered = reconstruct(&raw, self.options.size_gap);
        debug!(
            region = ?region,
            raw = raw.len(),
            kept = ordered.len(),
            "recognized region"
        );
        Ok(ordered)
    }

    fn binarize(&self, image: &Pix) -> RecogResult<Pix> {
        Ok(image.convert_to_binary(self.options.binarize_threshold)?)
    }
}

fn full_region(pix: &Pix) -> PixBox {
    PixBox::new_unchecked(0, 0, pix.width() as i32, pix.height() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_and_builders() {
        let opts = OcrOptions::default();
        assert_eq!(opts.threshold, 0.7);
        assert_eq!(opts.size_gap, 50);
        assert_eq!(opts.binarize_threshold, 128);
        assert!(opts.parallel);

        let opts = OcrOptions::new()
            .with_threshold(0.9)
            .with_size_gap(10)
            .with_binarize_threshold(100)
            .with_parallel(false);
        assert_eq!(
            opts,
            OcrOptions {
                threshold: 0.9,
                size_gap: 10,
                binarize_threshold: 100,
                parallel: false,
            }
        );
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_options_validation() {
        assert!(OcrOptions::new().with_threshold(1.1).validate().is_err());
        assert!(OcrOptions::new().with_threshold(-0.5).validate().is_err());
        assert!(OcrOptions::new().with_threshold(f64::NAN).validate().is_err());
        assert!(OcrOptions::new().with_binarize_threshold(0).validate().is_err());
        assert!(Ocr::new(OcrOptions::new().with_threshold(2.0)).is_err());
    }

    #[test]
    fn test_unknown_family() {
        let ocr = Ocr::new(OcrOptions::default()).unwrap();
        let page = Pix::new(8, 8, glyphscan_core::PixelDepth::Bit1).unwrap();
        assert!(matches!(
            ocr.recognize_with_family(&page, "missing"),
            Err(RecogError::UnknownFamily(ref name)) if name == "missing"
        ));
        assert_eq!(ocr.recognize(&page).unwrap(), "");
        assert_eq!(ocr.total_symbols(), 0);
    }

    #[test]
    fn test_missing_font_dir() {
        let mut ocr = Ocr::new(OcrOptions::default()).unwrap();
        let result = ocr.load_font("/nonexistent/glyphscan/font_dir");
        assert!(matches!(result, Err(RecogError::Io(_))));
        assert_eq!(ocr.family_names().count(), 0);
    }
}
