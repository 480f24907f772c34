//! Text assembly

use crate::symbol_match::SymbolMatch;

/// Concatenate the symbol names of matches in reading order.
///
/// A newline separates two consecutive matches that are not on the same
/// row. No spaces are inserted.
pub fn assemble_text(ordered: &[SymbolMatch<'_>]) -> String {
    let mut text = String::new();
    let mut prev: Option<&SymbolMatch<'_>> = None;
    for m in ordered {
        if let Some(p) = prev
            && !p.row_overlaps(m)
        {
            text.push('\n');
        }
        text.push_str(m.name());
        prev = Some(m);
    }
    text
}
