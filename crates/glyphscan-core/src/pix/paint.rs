//! Painting
//!
//! ORs a binary image into another one at an offset, clipped to the
//! destination.

use super::{Pix, PixMut, PixelDepth};
use crate::Box;
use crate::error::{Error, Result};

impl PixMut {
    /// Paint the foreground of a 1 bpp image into this 1 bpp image.
    ///
    /// Source pixels land at `(dx + x, dy + y)`; destination foreground is
    /// never cleared (the `src OR dst` raster operation). Parts of the source
    /// falling outside the destination are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDepths`] unless both images are 1 bpp.
    pub fn paint(&mut self, src: &Pix, dx: i32, dy: i32) -> Result<()> {
        if self.depth() != PixelDepth::Bit1 || src.depth() != PixelDepth::Bit1 {
            return Err(Error::IncompatibleDepths(
                self.depth().bits(),
                src.depth().bits(),
            ));
        }
        let dst_box = Box::new_unchecked(0, 0, self.width() as i32, self.height() as i32);
        let src_box = Box::new_unchecked(dx, dy, src.width() as i32, src.height() as i32);
        let Some(overlap) = dst_box.intersect(&src_box) else {
            return Ok(());
        };

        for y in overlap.y..overlap.bottom() {
            for x in overlap.x..overlap.right() {
                if src.get_pixel_unchecked((x - dx) as u32, (y - dy) as u32) != 0 {
                    self.set_pixel_unchecked(x as u32, y as u32, 1);
                }
            }
        }
        Ok(())
    }
}
