//! Correlation regression test
//!
//! Paints glyphs onto a page, copies windows back out and checks the binary
//! correlation scores between them, including windows that straddle the
//! 32-pixel word boundaries of the packed rows.

use glyphscan_core::{Pix, PixMut, PixelDepth};
use glyphscan_test::RegParams;
use glyphscan_test::fixtures::{font_glyph, glyph};

#[test]
fn correlation_reg() {
    let mut rp = RegParams::new("correlation");

    let h = font_glyph('H').expect("glyph H");
    let o = font_glyph('O').expect("glyph O");
    let count_h = h.count_foreground();
    rp.compare_values(17.0, count_h as f64, 0.0);

    // --- Test 1: paint at offsets on both sides of a word boundary ---
    let mut page = PixMut::new(100, 20, PixelDepth::Bit1).expect("page");
    for &x in &[1, 29, 40, 61, 90] {
        page.paint(&h, x, 5).expect("paint");
    }
    let page: Pix = page.into();
    rp.compare_values(5.0 * count_h as f64, page.count_foreground() as f64, 0.0);

    for &x in &[1u32, 29, 40, 61, 90] {
        let q = page.correlation_at(&h, x, 5, count_h).expect("correlation");
        rp.compare_values(1.0, q, 0.0);
    }

    // --- Test 2: a glyph repainted at the origin equals the template ---
    let mut copy = PixMut::new(h.width(), h.height(), PixelDepth::Bit1).expect("copy");
    copy.paint(&page, -61, -5).expect("paint");
    let copy: Pix = copy.into();
    rp.compare_pix(&h, &copy);
    rp.compare_values(1.0, copy.correlation_at(&h, 0, 0, count_h).expect("corr"), 0.0);

    // --- Test 3: different glyphs correlate below the match threshold ---
    let q = o.correlation_at(&h, 0, 0, count_h).expect("corr");
    // 10 shared pixels of 17 and 16
    rp.compare_values(100.0 / (17.0 * 16.0), q, 1e-12);
    rp.compare_values(1.0, if q < 0.7 { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: a one-pixel shift scores lower but not zero ---
    let shifted = page.correlation_at(&h, 2, 5, count_h).expect("corr");
    rp.compare_values(1.0, if shifted > 0.0 && shifted < 1.0 { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: blank windows and templates score zero ---
    let blank = glyph(&[".....", "....."]).expect("blank");
    rp.compare_values(0.0, page.correlation_at(&h, 80, 5, count_h).expect("corr"), 0.0);
    rp.compare_values(0.0, page.correlation_at(&blank, 1, 5, 0).expect("corr"), 0.0);

    // --- Test 6: windows outside the page are rejected ---
    rp.compare_values(
        1.0,
        if page.correlation_at(&h, 96, 5, count_h).is_err() { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "correlation regression test failed");
}
