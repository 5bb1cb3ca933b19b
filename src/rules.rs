//! The matching-rule seam consumed by the attribute-value layer.
//!
//! A schema selects one [`MatchingRule`] per attribute type; when an
//! attribute carries no rule-specific hooks, the generic Unicode string
//! rules below are the fallback. The engine itself stays rule-agnostic:
//! these are thin capabilities over [`normalize`](crate::normalize) and
//! [`compare_with`](crate::compare_with).

use std::cmp::Ordering;

use bstr::BString;

use crate::error::NormalizeError;
use crate::{compare_with, normalize, CompareFlags};

/// A normalize/compare capability for one attribute matching rule.
pub trait MatchingRule {
    /// Whether values compare case-insensitively under this rule.
    fn casefold(&self) -> bool;

    /// Produces the canonical stored form of a value.
    fn normalize(&self, value: &[u8]) -> Result<BString, NormalizeError> {
        normalize(value, self.casefold())
    }

    /// Orders two raw values.
    fn compare(&self, a: &[u8], b: &[u8]) -> Result<Ordering, NormalizeError> {
        compare_with(
            Some(a),
            Some(b),
            CompareFlags {
                casefold: self.casefold(),
                ..CompareFlags::default()
            },
        )
    }

    /// Whether two raw values match under this rule.
    fn is_match(&self, a: &[u8], b: &[u8]) -> Result<bool, NormalizeError> {
        Ok(self.compare(a, b)? == Ordering::Equal)
    }
}

/// Case-insensitive Unicode string matching (`caseIgnoreMatch`).
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseIgnoreMatch;

impl MatchingRule for CaseIgnoreMatch {
    fn casefold(&self) -> bool {
        true
    }
}

/// Case-sensitive Unicode string matching (`caseExactMatch`).
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseExactMatch;

impl MatchingRule for CaseExactMatch {
    fn casefold(&self) -> bool {
        false
    }
}

/// Finds `target` in a stored value set by linear scan, short-circuiting on
/// the first match.
///
/// The probe is normalized once up front and flagged pre-normalized for
/// every comparison, so each stored value costs one normalization at most.
pub fn find_value<R: MatchingRule>(
    rule: &R,
    values: &[BString],
    target: &[u8],
) -> Result<Option<usize>, NormalizeError> {
    let probe = rule.normalize(target)?;
    let flags = CompareFlags {
        casefold: rule.casefold(),
        rhs_normalized: true,
        ..CompareFlags::default()
    };
    for (idx, value) in values.iter().enumerate() {
        if compare_with(Some(value.as_slice()), Some(probe.as_slice()), flags)? == Ordering::Equal {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}
