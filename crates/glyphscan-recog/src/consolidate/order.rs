//! Reading order
//!
//! Rows run top to bottom and matches within a row run left to right. Two
//! matches are on the same row when their vertical spans overlap (see
//! [`SymbolMatch::row_overlaps`]).

use super::insertion_sort;
use crate::symbol_match::SymbolMatch;

/// Whether `a` is read before `b`.
///
/// 1. On different rows: the smaller `y` first.
/// 2. On the same row: the smaller `x` first.
/// 3. Same `x`: the smaller `y` first.
pub fn comes_before(a: &SymbolMatch<'_>, b: &SymbolMatch<'_>) -> bool {
    if !a.row_overlaps(b) {
        return a.y < b.y;
    }
    if a.x != b.x {
        return a.x < b.x;
    }
    a.y < b.y
}

/// Sort canonically ordered matches into reading order, in place.
///
/// Row overlap is not transitive, so [`comes_before`] is not a total order
/// and cannot drive `sort_by`. Insertion sort only ever compares neighbors,
/// which leaves every adjacent pair ordered by [`comes_before`].
pub(crate) fn reading_order(matches: &mut [SymbolMatch<'_>]) {
    insertion_sort(matches, comes_before);
}
