//! Font directory loading
//!
//! A font family is a directory holding one image per glyph. The glyph's
//! name is its file name, query-escaped so that characters which cannot
//! appear in a path (`/`, `%`, ...) can still be named:
//!
//! | file name       | symbol |
//! |-----------------|--------|
//! | `A.png`         | `A`    |
//! | `%2F.png`       | `/`    |
//! | `a+b.png`       | `a b`  |
//! | `%E2%82%AC.png` | `€`    |
//!
//! Zero-width spaces (U+200B) are removed from names; some file systems
//! need them to tell apart names that differ only in case.

use crate::symbol::{FontLibrary, FontSymbol};
use crate::{RecogError, RecogResult};
use glyphscan_core::DEFAULT_BINARIZE_THRESHOLD;
use glyphscan_io::IoError;
use std::path::Path;
use tracing::{debug, info, warn};

const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Load every glyph image in `dir` into a library named after the directory.
pub fn load_font_dir<P: AsRef<Path>>(dir: P) -> RecogResult<FontLibrary> {
    load_font_dir_with_threshold(dir, DEFAULT_BINARIZE_THRESHOLD)
}

/// Load a font directory, binarizing glyphs with `binarize_threshold`.
///
/// Entries are visited in file name order. Sub-directories and hidden
/// files are skipped; any other file that is not a decodable image fails
/// the whole load.
pub fn load_font_dir_with_threshold<P: AsRef<Path>>(
    dir: P,
    binarize_threshold: u8,
) -> RecogResult<FontLibrary> {
    let dir = dir.as_ref();
    let family = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());

    let mut entries = std::fs::read_dir(dir)
        .map_err(IoError::from)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(IoError::from)?;
    entries.sort_by_key(|e| e.file_name());

    let mut library = FontLibrary::new(family);
    for entry in entries {
        let os_name = entry.file_name();
        let file_name = os_name
            .to_str()
            .ok_or_else(|| RecogError::InvalidSymbolName {
                file_name: os_name.to_string_lossy().into_owned(),
                message: "file name is not valid UTF-8".to_string(),
            })?;

        if file_name.starts_with('.') {
            debug!(file_name, "skipping hidden file");
            continue;
        }
        if entry.file_type().map_err(IoError::from)?.is_dir() {
            warn!(file_name, dir = %dir.display(), "skipping sub-directory in font directory");
            continue;
        }

        let name = symbol_name_from_file(file_name)?;
        let image = glyphscan_io::read_image(entry.path())?;
        let symbol = FontSymbol::with_threshold(name, &image, binarize_threshold)?;
        debug!(
            symbol = symbol.name(),
            width = symbol.width(),
            height = symbol.height(),
            "loaded glyph"
        );
        library.push(symbol);
    }

    info!(
        family = library.name(),
        symbols = library.len(),
        "loaded font library"
    );
    Ok(library)
}

/// Derive a symbol name from a glyph file name.
///
/// Query-unescapes the name, removes zero-width spaces and strips one
/// trailing `.png`.
pub fn symbol_name_from_file(file_name: &str) -> RecogResult<String> {
    let unescaped = query_unescape(file_name).map_err(|message| RecogError::InvalidSymbolName {
        file_name: file_name.to_string(),
        message,
    })?;
    let cleaned: String = unescaped.chars().filter(|&c| c != ZERO_WIDTH_SPACE).collect();
    Ok(match cleaned.strip_suffix(".png") {
        Some(stem) => stem.to_string(),
        None => cleaned,
    })
}

/// Decode `+` as a space and `%XX` as the byte `0xXX`.
///
/// `urlencoding` passes malformed escapes through untouched, so every `%`
/// is checked for two hex digits first.
fn query_unescape(s: &str) -> Result<String, String> {
    let bytes = s.as_bytes();
    let malformed = (0..bytes.len()).find(|&i| {
        bytes[i] == b'%'
            && !bytes
                .get(i + 1..i + 3)
                .is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit))
    });
    if let Some(i) = malformed {
        return Err(format!("invalid escape at byte {}", i));
    }
    urlencoding::decode(&s.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|_| "escaped bytes are not valid UTF-8".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        assert_eq!(symbol_name_from_file("A.png").unwrap(), "A");
        assert_eq!(symbol_name_from_file("ff.png").unwrap(), "ff");
        assert_eq!(symbol_name_from_file("noext").unwrap(), "noext");
        // only one suffix is stripped
        assert_eq!(symbol_name_from_file("x.png.png").unwrap(), "x.png");
    }

    #[test]
    fn test_escaped_names() {
        assert_eq!(symbol_name_from_file("%2F.png").unwrap(), "/");
        assert_eq!(symbol_name_from_file("a+b.png").unwrap(), "a b");
        assert_eq!(symbol_name_from_file("%25.png").unwrap(), "%");
        assert_eq!(symbol_name_from_file("%E2%82%AC.png").unwrap(), "€");
        assert_eq!(symbol_name_from_file("%2e.png").unwrap(), ".");
        // an escaped plus stays a plus
        assert_eq!(symbol_name_from_file("%2B+.png").unwrap(), "+ ");
    }

    #[test]
    fn test_zero_width_space_removed() {
        assert_eq!(symbol_name_from_file("a\u{200b}.png").unwrap(), "a");
        assert_eq!(symbol_name_from_file("%E2%80%8BA.png").unwrap(), "A");
    }

    #[test]
    fn test_bad_escapes() {
        for bad in ["%.png", "%4.png", "%zz.png", "%+F.png", "%FF.png"] {
            assert!(
                matches!(
                    symbol_name_from_file(bad),
                    Err(RecogError::InvalidSymbolName { .. })
                ),
                "{bad}"
            );
        }
    }
}
