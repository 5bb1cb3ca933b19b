//! Adapter over the canonical decomposition/composition tables.
//!
//! The tables themselves live in `unicode-normalization` and are compiled
//! in, so there is no runtime initialization step. Scalars outside the
//! `char` range (the extended encoding admits values up to `0x7FFF_FFFF`)
//! have no canonical equivalents and pass through untouched; runs of
//! in-range scalars on either side are normalized independently, which is
//! sound because such a scalar can neither compose with nor reorder around
//! its neighbors.

use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;

type CharRun = SmallVec<[char; 16]>;

fn apply_runs<F>(scalars: &[u32], mut normalize_run: F) -> Vec<u32>
where
    F: FnMut(&[char], &mut Vec<u32>),
{
    let mut out = Vec::with_capacity(scalars.len());
    let mut run = CharRun::new();
    for &v in scalars {
        match char::from_u32(v) {
            Some(ch) => run.push(ch),
            None => {
                if !run.is_empty() {
                    normalize_run(&run, &mut out);
                    run.clear();
                }
                out.push(v);
            }
        }
    }
    if !run.is_empty() {
        normalize_run(&run, &mut out);
    }
    out
}

/// Canonical decomposition (NFD) of a scalar sequence.
pub(crate) fn decompose(scalars: &[u32]) -> Vec<u32> {
    apply_runs(scalars, |run, out| {
        out.extend(run.iter().copied().nfd().map(|c| c as u32))
    })
}

/// Canonical recomposition of a decomposed sequence, yielding NFC.
pub(crate) fn compose(decomposed: &[u32]) -> Vec<u32> {
    apply_runs(decomposed, |run, out| {
        out.extend(run.iter().copied().nfc().map(|c| c as u32))
    })
}
