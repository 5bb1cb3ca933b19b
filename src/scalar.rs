//! Ordered and case-insensitive operations over raw scalar sequences.
//!
//! These are pure and allocation-free. Sequence lengths are explicit slice
//! lengths; there is no sentinel termination, and ties up through `limit`
//! are reported as `Equal` — callers settle them by sequence length.

use std::cmp::Ordering;

use crate::casefold;

/// Lexicographic comparison over the first `limit` scalars of each sequence.
pub fn compare(a: &[u32], b: &[u32], limit: usize) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()).take(limit) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Like [`compare`], with each scalar passed through the uppercase mapping
/// before comparison.
pub fn compare_case_folded(a: &[u32], b: &[u32], limit: usize) -> Ordering {
    for (&x, &y) in a.iter().zip(b.iter()).take(limit) {
        match casefold::to_upper(x).cmp(&casefold::to_upper(y)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Position of the first occurrence of `target` within the first `limit`
/// scalars of `seq`.
pub fn find(seq: &[u32], limit: usize, target: u32) -> Option<usize> {
    seq.iter().take(limit).position(|&v| v == target)
}

/// Like [`find`], but both `target` and every candidate are case folded
/// first.
pub fn find_case_folded(seq: &[u32], limit: usize, target: u32) -> Option<usize> {
    let target = casefold::to_upper(target);
    seq.iter()
        .take(limit)
        .position(|&v| casefold::to_upper(v) == target)
}

/// Applies the uppercase mapping to every scalar in place.
pub fn fold_in_place(seq: &mut [u32]) {
    for v in seq {
        *v = casefold::to_upper(*v);
    }
}
