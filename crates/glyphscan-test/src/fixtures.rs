//! Synthetic glyphs, pages and font directories
//!
//! Glyphs are drawn as ASCII art (`#` is ink, anything else is paper) so
//! that tests do not depend on binary image files checked into the tree.

use crate::error::{TestError, TestResult};
use glyphscan_core::{Pix, PixMut, PixelDepth};
use std::path::Path;

/// Width of the built-in glyphs.
pub const GLYPH_WIDTH: u32 = 5;
/// Height of the built-in glyphs.
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between glyphs on a rendered line.
pub const LETTER_SPACING: u32 = 2;
/// Blank rows between rendered lines.
pub const LINE_SPACING: u32 = 4;
/// Blank border around a rendered page.
pub const MARGIN: u32 = 4;

/// Build a 1 bpp image from ASCII art rows.
pub fn glyph(rows: &[&str]) -> TestResult<Pix> {
    let width = rows.first().map_or(0, |r| r.chars().count());
    if width == 0 {
        return Err(TestError::Fixture("glyph has no rows".to_string()));
    }
    if rows.iter().any(|r| r.chars().count() != width) {
        return Err(TestError::Fixture("glyph rows differ in length".to_string()));
    }

    let mut pm = PixMut::new(width as u32, rows.len() as u32, PixelDepth::Bit1)?;
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == '#' {
                pm.set_pixel(x as u32, y as u32, 1)?;
            }
        }
    }
    Ok(pm.into())
}

/// ASCII art for the built-in 5x7 font.
pub fn font_5x7(ch: char) -> Option<[&'static str; 7]> {
    let rows = match ch {
        'A' => [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'B' => ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
        'C' => [".####", "#....", "#....", "#....", "#....", "#....", ".####"],
        'H' => ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'I' => ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "#####"],
        'L' => ["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'T' => ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."],
        '1' => ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
        '2' => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        _ => return None,
    };
    Some(rows)
}

/// Characters available in the built-in font.
pub const FONT_5X7_CHARS: &str = "ABCHILOT12";

/// Render one built-in glyph.
pub fn font_glyph(ch: char) -> TestResult<Pix> {
    let rows = font_5x7(ch)
        .ok_or_else(|| TestError::Fixture(format!("no built-in glyph for {:?}", ch)))?;
    glyph(&rows)
}

/// Top-left corner of character `col` on line `line` of a rendered page.
pub fn glyph_origin(line: u32, col: u32) -> (i32, i32) {
    let x = MARGIN + col * (GLYPH_WIDTH + LETTER_SPACING);
    let y = MARGIN + line * (GLYPH_HEIGHT + LINE_SPACING);
    (x as i32, y as i32)
}

/// Render text with the built-in font onto a fresh 1 bpp page.
///
/// Lines are separated by `\n`; a space advances without drawing.
pub fn render_text(text: &str) -> TestResult<Pix> {
    let lines: Vec<&str> = text.split('\n').collect();
    let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    let width = 2 * MARGIN + cols.max(1) * (GLYPH_WIDTH + LETTER_SPACING);
    let height = 2 * MARGIN + lines.len() as u32 * (GLYPH_HEIGHT + LINE_SPACING);

    let mut page = PixMut::new(width, height, PixelDepth::Bit1)?;
    for (line, chars) in lines.iter().enumerate() {
        for (col, ch) in chars.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let (x, y) = glyph_origin(line as u32, col as u32);
            page.paint(&font_glyph(ch)?, x, y)?;
        }
    }
    Ok(page.into())
}

/// Convert a 1 bpp image to 32 bpp RGBA: ink opaque black, paper fully
/// transparent.
pub fn to_transparent_rgba(pix: &Pix) -> TestResult<Pix> {
    let mut out = PixMut::new(pix.width(), pix.height(), PixelDepth::Bit32)?;
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let alpha = if pix.get_pixel(x, y) == Some(1) { 255 } else { 0 };
            out.set_rgba(x, y, 0, 0, 0, alpha)?;
        }
    }
    Ok(out.into())
}

/// Write each `(file_name, image)` pair as a PNG into `dir`.
pub fn write_font_dir(dir: &Path, glyphs: &[(&str, &Pix)]) -> TestResult<()> {
    std::fs::create_dir_all(dir)?;
    for (file_name, pix) in glyphs {
        let path = dir.join(file_name);
        glyphscan_io::write_image(pix, &path).map_err(|e| TestError::ImageWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}

/// Write the built-in glyphs for `chars` into `dir` as `<char>.png`.
pub fn write_builtin_font(dir: &Path, chars: &str) -> TestResult<()> {
    let glyphs = chars
        .chars()
        .map(|ch| -> TestResult<(String, Pix)> { Ok((format!("{}.png", ch), font_glyph(ch)?)) })
        .collect::<TestResult<Vec<_>>>()?;
    let refs: Vec<(&str, &Pix)> = glyphs.iter().map(|(n, p)| (n.as_str(), p)).collect();
    write_font_dir(dir, &refs)
}
