//! Binary image comparison
//!
//! Foreground counting and binary correlation. The correlation of two
//! binary images `A` and `B` is
//!
//! ```text
//!     |A ∧ B|² / (|A| · |B|)
//! ```
//!
//! which is 1.0 for identical images and 0.0 when they share no foreground.
//! It is the similarity score used to match glyph templates against windows
//! of a page.

use super::{Pix, PixelDepth};
use crate::error::{Error, Result};

/// Read `n` (1..=32) consecutive bits starting at bit `x`, MSB-aligned.
#[inline]
fn extract_bits(line: &[u32], x: u32, n: u32) -> u32 {
    let i = (x >> 5) as usize;
    let off = x & 31;
    let mut val = line[i] << off;
    if off > 0 && i + 1 < line.len() {
        val |= line[i + 1] >> (32 - off);
    }
    val & (u32::MAX << (32 - n))
}

/// Mask selecting the first `n` (1..=32) pixels of a word.
#[inline]
fn leading_mask(n: u32) -> u32 {
    u32::MAX << (32 - n)
}

fn require_binary(pix: &Pix) -> Result<()> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(Error::UnsupportedDepth(pix.depth().bits()));
    }
    Ok(())
}

impl Pix {
    /// Count the foreground (value 1) pixels of a 1 bpp image.
    ///
    /// Returns 0 for images of any other depth.
    pub fn count_foreground(&self) -> u64 {
        if self.depth() != PixelDepth::Bit1 {
            return 0;
        }
        let w = self.width();
        let full_words = (w >> 5) as usize;
        let tail = w & 31;
        (0..self.height())
            .map(|y| {
                let line = self.row_data(y);
                let mut sum: u64 = line[..full_words]
                    .iter()
                    .map(|word| u64::from(word.count_ones()))
                    .sum();
                if tail > 0 {
                    sum += u64::from((line[full_words] & leading_mask(tail)).count_ones());
                }
                sum
            })
            .sum()
    }

    /// Correlate a binary template against the window of this binary image
    /// whose top-left corner is `(x, y)`.
    ///
    /// `template_count` is the template's foreground count; callers sliding
    /// one template over many positions compute it once.
    ///
    /// # Errors
    ///
    /// Returns an error if either image is not 1 bpp or the window does not
    /// fit inside this image.
    pub fn correlation_at(&self, template: &Pix, x: u32, y: u32, template_count: u64) -> Result<f64> {
        require_binary(self)?;
        require_binary(template)?;
        let (tw, th) = (template.width(), template.height());
        if x.saturating_add(tw) > self.width() || y.saturating_add(th) > self.height() {
            return Err(Error::InvalidParameter(format!(
                "{}x{} window at ({}, {}) exceeds {}x{} image",
                tw,
                th,
                x,
                y,
                self.width(),
                self.height()
            )));
        }
        if template_count == 0 {
            return Ok(0.0);
        }

        let mut and_count: u64 = 0;
        let mut window_count: u64 = 0;
        for ty in 0..th {
            let tline = template.row_data(ty);
            let line = self.row_data(y + ty);
            let mut tx = 0;
            let mut k = 0usize;
            while tx < tw {
                let n = (tw - tx).min(32);
                let t = tline[k] & leading_mask(n);
                let win = extract_bits(line, x + tx, n);
                and_count += u64::from((t & win).count_ones());
                window_count += u64::from(win.count_ones());
                tx += 32;
                k += 1;
            }
        }

        if window_count == 0 {
            return Ok(0.0);
        }
        let and_count = and_count as f64;
        Ok(and_count * and_count / (template_count as f64 * window_count as f64))
    }
}
