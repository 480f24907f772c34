//! Match search driver
//!
//! Runs a [`MatchSearch`] for every symbol of a font set over one region of
//! a page and collects the hits as [`SymbolMatch`]es. Hits whose quality
//! is not in `[threshold, 1]` are dropped; nothing else is filtered or
//! ordered here, that is the job of [`crate::reconstruct`].

use crate::search::{CorrelationSearch, MatchSearch};
use crate::symbol::FontSymbol;
use crate::symbol_match::SymbolMatch;
use crate::{RecogError, RecogResult};
use glyphscan_core::{Box as PixBox, Pix};
use rayon::prelude::*;
use tracing::debug;

/// Find all matches of `symbols` in `region` of the binary `target` with
/// the default correlation search.
///
/// Matches are grouped by symbol, in symbol order; within a symbol they
/// follow the searcher's order.
pub fn detect<'a>(
    symbols: &'a [FontSymbol],
    target: &Pix,
    region: &PixBox,
    threshold: f64,
) -> RecogResult<Vec<SymbolMatch<'a>>> {
    detect_with(&CorrelationSearch, symbols, target, region, threshold)
}

/// Like [`detect`], with a caller-supplied search.
pub fn detect_with<'a, S: MatchSearch + ?Sized>(
    searcher: &S,
    symbols: &'a [FontSymbol],
    target: &Pix,
    region: &PixBox,
    threshold: f64,
) -> RecogResult<Vec<SymbolMatch<'a>>> {
    let refs: Vec<&'a FontSymbol> = symbols.iter().collect();
    find_all(searcher, &refs, target, region, threshold, true)
}

/// Search each symbol and concatenate the matches in symbol order.
///
/// With `parallel` set the symbols are searched on the rayon pool; the
/// output is the same as the sequential run.
pub fn find_all<'a, S: MatchSearch + ?Sized>(
    searcher: &S,
    symbols: &[&'a FontSymbol],
    target: &Pix,
    region: &PixBox,
    threshold: f64,
    parallel: bool,
) -> RecogResult<Vec<SymbolMatch<'a>>> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(RecogError::InvalidParameter(format!(
            "threshold must be in [0, 1], got {}",
            threshold
        )));
    }

    let search_one = |symbol: &&'a FontSymbol| -> RecogResult<Vec<SymbolMatch<'a>>> {
        let symbol: &'a FontSymbol = symbol;
        let hits = searcher.search(symbol.template(), target, region, threshold)?;
        Ok(hits
            .into_iter()
            // also rejects NaN
            .filter(|hit| hit.quality >= threshold && hit.quality <= 1.0)
            .map(|hit| SymbolMatch::new(symbol, hit.x, hit.y, hit.quality))
            .collect())
    };

    let per_symbol: Vec<Vec<SymbolMatch<'a>>> = if parallel {
        symbols.par_iter().map(search_one).collect::<RecogResult<_>>()?
    } else {
        symbols.iter().map(search_one).collect::<RecogResult<_>>()?
    };

    let matches: Vec<SymbolMatch<'a>> = per_symbol.into_iter().flatten().collect();
    debug!(
        symbols = symbols.len(),
        matches = matches.len(),
        threshold,
        "searched region"
    );
    Ok(matches)
}
