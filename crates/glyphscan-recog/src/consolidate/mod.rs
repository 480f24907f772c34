//! Match consolidation
//!
//! Turns the raw, overlapping output of the search driver into the
//! sequence of glyphs a reader would see:
//!
//! ```text
//! raw matches -> conflict-free matches -> reading order
//! ```
//!
//! Both stages start from a canonical order of the input, so the result
//! depends only on the set of matches and not on the order they arrived in.

mod conflict;
mod order;

pub use conflict::preferred;
pub use order::comes_before;

use crate::symbol_match::SymbolMatch;
use tracing::debug;

/// Remove conflicting matches and sort the rest into reading order.
///
/// `size_gap` is the area difference from which the larger of two
/// intersecting matches wins regardless of quality (see [`preferred`]).
/// An empty input gives an empty output.
pub fn reconstruct<'a>(matches: &[SymbolMatch<'a>], size_gap: u64) -> Vec<SymbolMatch<'a>> {
    let mut canonical = matches.to_vec();
    canonical_sort(&mut canonical);

    let mut kept = conflict::resolve_conflicts(&canonical, size_gap);
    order::reading_order(&mut kept);

    debug!(
        raw = matches.len(),
        kept = kept.len(),
        size_gap,
        "reconstructed reading order"
    );
    kept
}

/// Sort by a total key: position, then area, quality and name.
///
/// Distinct symbols that agree on all of these (the same glyph loaded in
/// two families) are ordered by the symbol's address, which is fixed while
/// the libraries are borrowed.
pub(crate) fn canonical_sort(matches: &mut [SymbolMatch<'_>]) {
    matches.sort_by(|a, b| {
        (a.y, a.x, a.area)
            .cmp(&(b.y, b.x, b.area))
            .then_with(|| a.quality.total_cmp(&b.quality))
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| std::ptr::from_ref(a.symbol).cmp(&std::ptr::from_ref(b.symbol)))
    });
}

/// Stable insertion sort moving an element left while `before(elem, prev)`.
///
/// Unlike `sort_by` it only needs `before` to be asymmetric, not
/// transitive.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], before: F)
where
    F: Fn(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && before(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
