//! Template search
//!
//! The [`MatchSearch`] trait is the seam between the recognizer and the
//! pixel-level similarity measure. [`CorrelationSearch`] is the default
//! implementation; tests and callers with their own measure can plug in
//! another one through [`crate::detect_with`].

mod correlation;

pub use correlation::CorrelationSearch;

use crate::RecogResult;
use glyphscan_core::{Box as PixBox, Pix};

/// A placement of a template reported by a search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Left edge of the placement in target coordinates
    pub x: i32,
    /// Top edge of the placement in target coordinates
    pub y: i32,
    /// Similarity in [0, 1]
    pub quality: f64,
}

/// Slides a binary template over a region of a binary target
///
/// Implementations must be `Sync`: one searcher is shared by all worker
/// threads when symbols are searched in parallel.
pub trait MatchSearch: Sync {
    /// Report every placement of `template` inside `region` of `target`
    /// whose quality is at least `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecogError::CorrelationFailure`] if the region or
    /// the images cannot be searched.
    fn search(
        &self,
        template: &Pix,
        target: &Pix,
        region: &PixBox,
        threshold: f64,
    ) -> RecogResult<Vec<Hit>>;
}
