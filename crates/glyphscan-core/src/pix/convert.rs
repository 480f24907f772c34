//! Depth conversion
//!
//! Decoded glyphs and pages arrive as 8 bpp gray or 32 bpp RGB(A) and are
//! reduced to 1 bpp before matching:
//!
//! - [`Pix::convert_to_gray`]: any depth to 8 bpp luminance
//! - [`Pix::threshold_to_binary`]: 8 bpp to 1 bpp
//! - [`Pix::convert_to_binary`]: any depth to 1 bpp

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

/// Perceptual luminance weights (red, green, blue).
pub const L_RED_WEIGHT: f32 = 0.3;
pub const L_GREEN_WEIGHT: f32 = 0.5;
pub const L_BLUE_WEIGHT: f32 = 0.2;

/// Default binarization threshold: gray values below it become foreground.
pub const DEFAULT_BINARIZE_THRESHOLD: u8 = 128;

impl Pix {
    /// Convert to 8 bpp grayscale.
    ///
    /// - 1 bpp: foreground becomes 0 (black), background 255 (white)
    /// - 8 bpp: returned as a shared clone
    /// - 32 bpp: luminance `0.3R + 0.5G + 0.2B`; with 4 samples per pixel the
    ///   color is first composited over a white background, so transparent
    ///   areas of a glyph image read as paper
    pub fn convert_to_gray(&self) -> Result<Pix> {
        match self.depth() {
            PixelDepth::Bit8 => Ok(self.clone()),
            PixelDepth::Bit1 => {
                let (w, h) = (self.width(), self.height());
                let mut gray = PixMut::new(w, h, PixelDepth::Bit8)?;
                for y in 0..h {
                    for x in 0..w {
                        let val = if self.get_pixel_unchecked(x, y) != 0 { 0 } else { 255 };
                        gray.set_pixel_unchecked(x, y, val);
                    }
                }
                Ok(gray.into())
            }
            PixelDepth::Bit32 => {
                let (w, h) = (self.width(), self.height());
                let has_alpha = self.spp() == 4;
                let mut gray = PixMut::new(w, h, PixelDepth::Bit8)?;
                for y in 0..h {
                    for x in 0..w {
                        let (r, g, b, a) = color::extract_rgba(self.get_pixel_unchecked(x, y));
                        let lum = L_RED_WEIGHT * r as f32
                            + L_GREEN_WEIGHT * g as f32
                            + L_BLUE_WEIGHT * b as f32;
                        let lum = if has_alpha {
                            let alpha = a as f32 / 255.0;
                            lum * alpha + 255.0 * (1.0 - alpha)
                        } else {
                            lum
                        };
                        gray.set_pixel_unchecked(x, y, ((lum + 0.5) as u32).min(255));
                    }
                }
                Ok(gray.into())
            }
        }
    }

    /// Threshold an 8 bpp image to 1 bpp.
    ///
    /// Pixels with a value strictly below `threshold` become foreground (1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 8 bpp.
    pub fn threshold_to_binary(&self, threshold: u8) -> Result<Pix> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let (w, h) = (self.width(), self.height());
        let mut binary = PixMut::new(w, h, PixelDepth::Bit1)?;
        let thresh = u32::from(threshold);
        for y in 0..h {
            for x in 0..w {
                if self.get_pixel_unchecked(x, y) < thresh {
                    binary.set_pixel_unchecked(x, y, 1);
                }
            }
        }
        Ok(binary.into())
    }

    /// Convert an image of any depth to 1 bpp.
    ///
    /// A 1 bpp input is returned as a shared clone; other depths go through
    /// [`Pix::convert_to_gray`] and [`Pix::threshold_to_binary`].
    pub fn convert_to_binary(&self, threshold: u8) -> Result<Pix> {
        match self.depth() {
            PixelDepth::Bit1 => Ok(self.clone()),
            _ => self.convert_to_gray()?.threshold_to_binary(threshold),
        }
    }
}
