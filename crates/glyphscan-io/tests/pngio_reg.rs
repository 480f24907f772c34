//! PNG I/O regression test
//!
//! Writes binary, gray and RGBA renderings of a text page to disk, reads
//! them back and checks that binarizing the decoded image reproduces the
//! original page.

use glyphscan_core::DEFAULT_BINARIZE_THRESHOLD;
use glyphscan_io::{ImageFormat, IoError, detect_format, read_image, read_image_mem, write_image};
use glyphscan_test::RegParams;
use glyphscan_test::fixtures::{render_text, to_transparent_rgba};

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");
    let dir = tempfile::tempdir().expect("tempdir");

    let page = render_text("HALT\n21").expect("render");

    // --- Test 1: 1 bpp page decodes as black-on-white gray ---
    let path = dir.path().join("page1.png");
    write_image(&page, &path).expect("write 1bpp");
    rp.compare_values(
        1.0,
        if detect_format(&path).expect("detect") == ImageFormat::Png { 1.0 } else { 0.0 },
        0.0,
    );
    let decoded = read_image(&path).expect("read 1bpp");
    rp.compare_values(8.0, decoded.depth().bits() as f64, 0.0);
    let binary = decoded
        .convert_to_binary(DEFAULT_BINARIZE_THRESHOLD)
        .expect("binarize");
    rp.compare_pix(&page, &binary);

    // --- Test 2: 8 bpp gray round trip ---
    let gray = page.convert_to_gray().expect("gray");
    let path = dir.path().join("page8.png");
    write_image(&gray, &path).expect("write 8bpp");
    let decoded = read_image(&path).expect("read 8bpp");
    rp.compare_pix(&gray, &decoded);

    // --- Test 3: RGBA with transparent paper ---
    let rgba = to_transparent_rgba(&page).expect("rgba");
    let path = dir.path().join("page32.png");
    write_image(&rgba, &path).expect("write 32bpp");
    let decoded = read_image(&path).expect("read 32bpp");
    rp.compare_values(32.0, decoded.depth().bits() as f64, 0.0);
    rp.compare_values(4.0, decoded.spp() as f64, 0.0);
    let binary = decoded
        .convert_to_binary(DEFAULT_BINARIZE_THRESHOLD)
        .expect("binarize rgba");
    rp.compare_pix(&page, &binary);

    // --- Test 4: other formats are recognized but not decoded ---
    let result = read_image_mem(b"BM\x00\x00\x00\x00\x00\x00");
    rp.compare_values(
        1.0,
        if matches!(result, Err(IoError::UnsupportedFormat(_))) { 1.0 } else { 0.0 },
        0.0,
    );
    let missing = read_image(dir.path().join("missing.png"));
    rp.compare_values(
        1.0,
        if matches!(missing, Err(IoError::Io(_))) { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "pngio regression test failed");
}
