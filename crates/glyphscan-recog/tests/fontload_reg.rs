//! Font directory loading regression test
//!
//! Covers glyph name decoding, skipped entries, binarization of gray and
//! transparent glyph images, and the errors a broken font directory
//! produces.

use glyphscan_core::{Pix, PixMut, PixelDepth};
use glyphscan_recog::{Ocr, OcrOptions, RecogError, load_font_dir};
use glyphscan_test::RegParams;
use glyphscan_test::fixtures::{font_glyph, glyph, to_transparent_rgba, write_font_dir};
use std::fs;

/// Paint the glyph's ink with `level` on a white 8 bpp background.
fn gray_glyph(ch: char, level: u32) -> Pix {
    let bin = font_glyph(ch).expect("glyph");
    let mut pm = PixMut::new(bin.width(), bin.height(), PixelDepth::Bit8).expect("pix");
    for y in 0..bin.height() {
        for x in 0..bin.width() {
            let val = if bin.get_pixel(x, y) == Some(1) { level } else { 255 };
            pm.set_pixel(x, y, val).expect("set");
        }
    }
    pm.into()
}

fn flag(ok: bool) -> f64 {
    if ok { 1.0 } else { 0.0 }
}

#[test]
fn fontload_reg() {
    let mut rp = RegParams::new("fontload");
    let dir = tempfile::tempdir().expect("tempdir");

    // --- Test 1: names, order and skipped entries ---
    let font = dir.path().join("mixed");
    let a = font_glyph('A').expect("A");
    let slash = glyph(&["....#", "...#.", "..#..", ".#...", "#...."]).expect("slash");
    let t_rgba = to_transparent_rgba(&font_glyph('T').expect("T")).expect("rgba");
    let h = font_glyph('H').expect("H");
    let o = font_glyph('O').expect("O");
    write_font_dir(
        &font,
        &[
            ("A.png", &a),
            ("%2F.png", &slash),
            ("T.png", &t_rgba),
            ("Z\u{200b}.png", &h),
            ("a+b.png", &o),
        ],
    )
    .expect("write font");
    fs::write(font.join(".DS_Store"), b"not an image").expect("hidden file");
    fs::create_dir(font.join("nested")).expect("nested dir");

    let library = load_font_dir(&font).expect("load");
    rp.compare_strings("mixed", library.name());
    let names: Vec<&str> = library.iter().map(|s| s.name()).collect();
    rp.compare_strings("/|A|T|Z|a b", &names.join("|"));

    // --- Test 2: decoded templates match the originals ---
    rp.compare_pix(&a, library.get("A").expect("A").template());
    rp.compare_pix(&slash, library.get("/").expect("/").template());
    let t = font_glyph('T').expect("T");
    rp.compare_pix(&t, library.get("T").expect("T").template());
    rp.compare_values(35.0, library.get("a b").expect("a b").area() as f64, 0.0);

    // --- Test 3: light gray glyphs depend on the binarization threshold ---
    let light = dir.path().join("light");
    write_font_dir(&light, &[("L.png", &gray_glyph('L', 150))]).expect("write light");
    let result = load_font_dir(&light);
    rp.compare_values(
        1.0,
        flag(matches!(result, Err(RecogError::InvalidTemplate { ref name, .. }) if name == "L")),
        0.0,
    );
    let mut ocr = Ocr::new(OcrOptions::default().with_binarize_threshold(200)).expect("ocr");
    let loaded = ocr.load_font(&light).expect("load light");
    let l = font_glyph('L').expect("L");
    rp.compare_pix(&l, loaded.get("L").expect("L").template());

    // --- Test 4: broken directories ---
    let blank_dir = dir.path().join("blank");
    let blank = Pix::new(5, 7, PixelDepth::Bit1).expect("blank");
    write_font_dir(&blank_dir, &[("x.png", &blank)]).expect("write blank");
    rp.compare_values(
        1.0,
        flag(matches!(
            load_font_dir(&blank_dir),
            Err(RecogError::InvalidTemplate { .. })
        )),
        0.0,
    );

    let junk_dir = dir.path().join("junk");
    fs::create_dir(&junk_dir).expect("junk dir");
    fs::write(junk_dir.join("readme.png"), b"this is not a png").expect("junk");
    rp.compare_values(
        1.0,
        flag(matches!(load_font_dir(&junk_dir), Err(RecogError::Io(_)))),
        0.0,
    );

    let escape_dir = dir.path().join("escape");
    write_font_dir(&escape_dir, &[("%zz.png", &a)]).expect("write escape");
    rp.compare_values(
        1.0,
        flag(matches!(
            load_font_dir(&escape_dir),
            Err(RecogError::InvalidSymbolName { .. })
        )),
        0.0,
    );

    rp.compare_values(
        1.0,
        flag(matches!(
            load_font_dir(dir.path().join("does_not_exist")),
            Err(RecogError::Io(_))
        )),
        0.0,
    );

    // --- Test 5: an empty directory is an empty family ---
    let empty_dir = dir.path().join("empty");
    fs::create_dir(&empty_dir).expect("empty dir");
    let empty = load_font_dir(&empty_dir).expect("load empty");
    rp.compare_values(0.0, empty.len() as f64, 0.0);

    assert!(rp.cleanup(), "fontload regression test failed");
}
