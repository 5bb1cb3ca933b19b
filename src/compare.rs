//! The comparison engine: ordered, optionally case-insensitive comparison
//! of UTF-8 byte strings under canonical equivalence.
//!
//! A common-ASCII-prefix walk settles most comparisons without touching the
//! scalar machinery. Only when a non-ASCII byte is in play does the engine
//! rewind one character, decode both remaining suffixes and compare their
//! normalized scalar sequences. A caller that knows an operand is already
//! in canonical composed form can say so and skip its renormalization.

use std::cmp::Ordering;

use crate::error::NormalizeError;
use crate::{canon, casefold, scalar, utf8};

/// Options for [`compare_with`].
///
/// The `*_normalized` members certify that an operand is already in
/// canonical composed form, exactly as produced by
/// [`normalize`](crate::normalize); the engine then uses its decoded
/// scalars as-is. Certifying a value that is not actually normalized
/// yields unspecified (but safe) orderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareFlags {
    /// Compare case-insensitively, via the uppercase mapping.
    pub casefold: bool,
    /// The left operand is already in canonical composed form.
    pub lhs_normalized: bool,
    /// The right operand is already in canonical composed form.
    pub rhs_normalized: bool,
}

/// Compares two byte strings under canonical equivalence.
///
/// Equivalent to normalizing both operands with [`normalize`](crate::normalize)
/// and comparing the results, but avoids normalization entirely when the
/// operands decide the ordering within pure ASCII.
///
/// ```
/// use std::cmp::Ordering;
/// use ucnorm::compare;
///
/// assert_eq!(
///     compare("caf\u{E9}".as_bytes(), "cafe\u{301}".as_bytes(), false),
///     Ok(Ordering::Equal)
/// );
/// assert_eq!(compare(b"apple", b"APRICOT", true), Ok(Ordering::Less));
/// ```
pub fn compare(a: &[u8], b: &[u8], casefold: bool) -> Result<Ordering, NormalizeError> {
    compare_with(
        Some(a),
        Some(b),
        CompareFlags {
            casefold,
            ..CompareFlags::default()
        },
    )
}

/// Full-control form of [`compare`]: absent operands are admitted (an
/// absent operand orders before any present one) and operands may be
/// flagged pre-normalized.
///
/// Fails on malformed UTF-8 in either operand once the slow path is
/// reached; an ordering is never guessed from partially decoded data.
pub fn compare_with(
    lhs: Option<&[u8]>,
    rhs: Option<&[u8]>,
    flags: CompareFlags,
) -> Result<Ordering, NormalizeError> {
    let (s1, s2) = match (lhs, rhs) {
        (None, None) => return Ok(Ordering::Equal),
        (None, Some(_)) => return Ok(Ordering::Less),
        (Some(_), None) => return Ok(Ordering::Greater),
        (Some(a), Some(b)) => (a, b),
    };
    let (l1, l2) = (s1.len(), s2.len());
    let len = l1.min(l2);
    if len == 0 {
        return Ok(l1.cmp(&l2));
    }

    // Walk the common prefix while both current bytes are ASCII.
    let mut i = 0;
    let mut res = Ordering::Equal;
    while i < len && utf8::is_ascii(s1[i]) && utf8::is_ascii(s2[i]) {
        res = if flags.casefold {
            casefold::ascii_to_upper(s1[i]).cmp(&casefold::ascii_to_upper(s2[i]))
        } else {
            s1[i].cmp(&s2[i])
        };
        i += 1;
        if res != Ordering::Equal {
            // The mismatch settles it unless the character after it on
            // either side is non-ASCII: a following mark can still combine
            // with the mismatching character under decomposition.
            if i < len {
                if !utf8::is_ascii(s1[i]) || !utf8::is_ascii(s2[i]) {
                    break;
                }
            } else if (l1 > len && !utf8::is_ascii(s1[i]))
                || (l2 > len && !utf8::is_ascii(s2[i]))
            {
                break;
            }
            return Ok(res);
        }
    }

    if i > 0 {
        if res == Ordering::Equal
            && i == len
            && (l1 == len || utf8::is_ascii(s1[i]))
            && (l2 == len || utf8::is_ascii(s2[i]))
        {
            // Both sides ASCII and equal through the shorter length.
            return Ok(l1.cmp(&l2));
        }
        // Rewind one character: the last compared ASCII character may
        // combine with what follows.
        i -= 1;
    }

    let u1 = decode_suffix(&s1[i..], flags.casefold, flags.lhs_normalized)?;
    let u2 = decode_suffix(&s2[i..], flags.casefold, flags.rhs_normalized)?;

    let limit = u1.len().min(u2.len());
    let res = if flags.casefold {
        scalar::compare_case_folded(&u1, &u2, limit)
    } else {
        scalar::compare(&u1, &u2, limit)
    };
    if res != Ordering::Equal {
        return Ok(res);
    }
    Ok(u1.len().cmp(&u2.len()))
}

/// Decodes a byte-string suffix into scalars and, unless the operand was
/// certified pre-normalized, runs it through the same fold + decompose +
/// compose sequence the normalization pipeline uses.
fn decode_suffix(
    s: &[u8],
    casefold: bool,
    pre_normalized: bool,
) -> Result<Vec<u32>, NormalizeError> {
    let mut scalars = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        let (scalar, consumed) = utf8::decode_run(s, i)?;
        scalars.push(scalar);
        i += consumed;
    }
    if pre_normalized {
        return Ok(scalars);
    }
    if casefold {
        scalar::fold_in_place(&mut scalars);
    }
    Ok(canon::compose(&canon::decompose(&scalars)))
}
