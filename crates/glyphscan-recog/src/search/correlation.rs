//! Exhaustive binary-correlation search

use super::{Hit, MatchSearch};
use crate::{RecogError, RecogResult};
use glyphscan_core::{Box as PixBox, Pix, PixelDepth};

/// Scores every placement of the template with
/// [`Pix::correlation_at`](glyphscan_core::Pix::correlation_at).
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationSearch;

impl CorrelationSearch {
    /// Create the default searcher
    pub fn new() -> Self {
        Self
    }
}

fn check_inputs(template: &Pix, target: &Pix, region: &PixBox) -> RecogResult<()> {
    if target.depth() != PixelDepth::Bit1 {
        return Err(RecogError::CorrelationFailure(format!(
            "target must be 1 bpp, got {} bpp",
            target.depth().bits()
        )));
    }
    if template.depth() != PixelDepth::Bit1 {
        return Err(RecogError::CorrelationFailure(format!(
            "template must be 1 bpp, got {} bpp",
            template.depth().bits()
        )));
    }
    if region.is_empty() {
        return Err(RecogError::CorrelationFailure(format!(
            "empty search region {:?}",
            region
        )));
    }
    let bounds = PixBox::new_unchecked(0, 0, target.width() as i32, target.height() as i32);
    if region.x < 0 || region.y < 0 || !bounds.contains_box(region) {
        return Err(RecogError::CorrelationFailure(format!(
            "search region {:?} is outside the {}x{} target",
            region,
            target.width(),
            target.height()
        )));
    }
    Ok(())
}

impl MatchSearch for CorrelationSearch {
    fn search(
        &self,
        template: &Pix,
        target: &Pix,
        region: &PixBox,
        threshold: f64,
    ) -> RecogResult<Vec<Hit>> {
        check_inputs(template, target, region)?;

        let (tw, th) = (template.width() as i32, template.height() as i32);
        if tw > region.w || th > region.h {
            return Ok(Vec::new());
        }
        let template_count = template.count_foreground();

        let mut hits = Vec::new();
        for y in region.y..=region.bottom() - th {
            for x in region.x..=region.right() - tw {
                let quality = target
                    .correlation_at(template, x as u32, y as u32, template_count)
                    .map_err(|e| RecogError::CorrelationFailure(e.to_string()))?;
                if quality >= threshold {
                    hits.push(Hit { x, y, quality });
                }
            }
        }
        Ok(hits)
    }
}
