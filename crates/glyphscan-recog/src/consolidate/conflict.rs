//! Conflict resolution
//!
//! Two matches whose footprints intersect cannot both be real glyphs. The
//! [`preferred`] rule picks the winner of a pair and [`resolve_conflicts`]
//! applies it to a whole match set.

use super::insertion_sort;
use crate::symbol_match::SymbolMatch;
use std::cmp::Ordering;

/// Whether `a` wins a conflict against `b`.
///
/// 1. If the areas differ by at least `size_gap`, the larger area wins.
/// 2. Otherwise the higher quality wins.
/// 3. Equal quality: the larger area wins.
/// 4. Still tied: the smaller `y`, then the smaller `x`, then the smaller
///    symbol name.
///
/// For two matches that differ in position or symbol name exactly one of
/// `preferred(a, b)` and `preferred(b, a)` holds.
pub fn preferred(a: &SymbolMatch<'_>, b: &SymbolMatch<'_>, size_gap: u64) -> bool {
    let gap = a.area.abs_diff(b.area);
    if gap != 0 && gap >= size_gap {
        return a.area > b.area;
    }
    match a.quality.total_cmp(&b.quality) {
        Ordering::Greater => return true,
        Ordering::Less => return false,
        Ordering::Equal => {}
    }
    if a.area != b.area {
        return a.area > b.area;
    }
    (a.y, a.x, a.name()) < (b.y, b.x, b.name())
}

/// Drop every match that intersects a more preferred one.
///
/// Matches are split into clusters of transitively intersecting footprints.
/// Within a cluster they are ranked by [`preferred`] and kept greedily: a
/// match survives if it intersects none of the matches kept before it. The
/// input must already be in canonical order (see [`super::canonical_sort`]);
/// the survivors are returned in that order.
pub(crate) fn resolve_conflicts<'a>(
    matches: &[SymbolMatch<'a>],
    size_gap: u64,
) -> Vec<SymbolMatch<'a>> {
    let mut keep = vec![false; matches.len()];
    for mut cluster in clusters(matches) {
        insertion_sort(&mut cluster, |&i, &j| {
            preferred(&matches[i], &matches[j], size_gap)
        });
        let mut kept: Vec<usize> = Vec::with_capacity(cluster.len());
        for i in cluster {
            if kept.iter().all(|&k| !matches[k].intersects(&matches[i])) {
                kept.push(i);
                keep[i] = true;
            }
        }
    }

    matches
        .iter()
        .zip(keep)
        .filter_map(|(m, k)| k.then_some(*m))
        .collect()
}

/// Group indices of transitively intersecting matches.
///
/// Each cluster lists its indices in ascending order; clusters are ordered
/// by their smallest index.
fn clusters(matches: &[SymbolMatch<'_>]) -> Vec<Vec<usize>> {
    let n = matches.len();
    let mut parent: Vec<usize> = (0..n).collect();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    // sweep by left edge; only matches starting before `right` can intersect
    let mut by_x: Vec<usize> = (0..n).collect();
    by_x.sort_by_key(|&i| matches[i].x);
    for (pos, &i) in by_x.iter().enumerate() {
        let right = matches[i].rect().right();
        for &j in &by_x[pos + 1..] {
            if matches[j].x >= right {
                break;
            }
            if matches[i].intersects(&matches[j]) {
                let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
                if ri != rj {
                    parent[ri.max(rj)] = ri.min(rj);
                }
            }
        }
    }

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut slot: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        let root = find(&mut parent, i);
        match slot[root] {
            Some(g) => groups[g].push(i),
            None => {
                slot[root] = Some(groups.len());
                groups.push(vec![i]);
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::FontSymbol;
    use glyphscan_core::{Pix, PixMut, PixelDepth};

    fn symbol(name: &str, w: u32, h: u32) -> FontSymbol {
        let mut pm = PixMut::new(w, h, PixelDepth::Bit1).unwrap();
        pm.set_pixel(0, 0, 1).unwrap();
        FontSymbol::new(name, &Pix::from(pm)).unwrap()
    }

    #[test]
    fn test_area_gap_dominates_quality() {
        let big = symbol("A", 20, 10);
        let small = symbol("B", 10, 5);
        let a = SymbolMatch::new(&big, 10, 10, 0.9);
        let b = SymbolMatch::new(&small, 11, 11, 0.95);
        assert!(preferred(&a, &b, 50));
        assert!(!preferred(&b, &a, 50));
        // a wider gap threshold lets quality decide
        assert!(preferred(&b, &a, 200));
    }

    #[test]
    fn test_quality_decides_at_same_scale() {
        let sa = symbol("A", 10, 10);
        let sb = symbol("B", 19, 5);
        let a = SymbolMatch::new(&sa, 10, 10, 0.9);
        let b = SymbolMatch::new(&sb, 12, 11, 0.95);
        assert!(preferred(&b, &a, 50));
        assert!(!preferred(&a, &b, 50));
    }

    #[test]
    fn test_equal_quality_prefers_larger_area() {
        let sa = symbol("A", 10, 10);
        let sb = symbol("B", 10, 9);
        let a = SymbolMatch::new(&sa, 5, 5, 0.8);
        let b = SymbolMatch::new(&sb, 0, 0, 0.8);
        assert!(preferred(&a, &b, 50));
        assert!(!preferred(&b, &a, 50));
    }

    #[test]
    fn test_full_tie_is_broken_by_position_then_name() {
        let sa = symbol("a", 4, 4);
        let sb = symbol("b", 4, 4);
        let a = SymbolMatch::new(&sa, 3, 3, 0.8);
        let b = SymbolMatch::new(&sb, 3, 3, 0.8);
        assert!(preferred(&a, &b, 50) && !preferred(&b, &a, 50));
        let higher = SymbolMatch::new(&sb, 5, 2, 0.8);
        assert!(preferred(&higher, &a, 50) && !preferred(&a, &higher, 50));
        assert!(!preferred(&a, &a, 50));
    }

    #[test]
    fn test_zero_gap_means_area_always_wins() {
        let sa = symbol("A", 3, 3);
        let sb = symbol("B", 3, 2);
        let a = SymbolMatch::new(&sa, 0, 0, 0.1);
        let b = SymbolMatch::new(&sb, 0, 0, 1.0);
        assert!(preferred(&a, &b, 0));
    }

    #[test]
    fn test_clusters_follow_chains() {
        let s = symbol("s", 4, 4);
        let matches = vec![
            SymbolMatch::new(&s, 0, 0, 1.0),
            SymbolMatch::new(&s, 20, 0, 1.0),
            SymbolMatch::new(&s, 3, 0, 1.0),
            SymbolMatch::new(&s, 6, 3, 1.0),
            SymbolMatch::new(&s, 23, 4, 1.0),
        ];
        assert_eq!(clusters(&matches), vec![vec![0, 2, 3], vec![1], vec![4]]);
    }

    #[test]
    fn test_resolve_keeps_disjoint_winners() {
        let s = symbol("s", 4, 4);
        // 1 beats 0 and 2; 0 and 2 do not touch each other
        let matches = vec![
            SymbolMatch::new(&s, 0, 0, 0.8),
            SymbolMatch::new(&s, 3, 0, 0.9),
            SymbolMatch::new(&s, 6, 0, 0.8),
        ];
        let kept = resolve_conflicts(&matches, 50);
        assert_eq!(kept, vec![matches[1]]);
    }
}
