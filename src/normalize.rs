//! The normalization pipeline: UTF-8 bytes in, canonically composed (NFC)
//! UTF-8 bytes out, with optional case folding.
//!
//! Pure-ASCII input takes a byte-copy fast path. Mixed input alternates
//! between verbatim/folded ASCII copying and decode + decompose + compose +
//! re-encode over each non-ASCII span. ASCII copying trails the scan cursor
//! by one character: the last character of an ASCII run is flushed only once
//! the run's end is confirmed, because at a non-ASCII transition that
//! character belongs to the span instead (it may combine with the marks
//! that follow it).

use std::ffi::CString;

use bstr::BString;
use smallvec::SmallVec;

use crate::buffer::OutBuf;
use crate::error::NormalizeError;
use crate::{canon, casefold, utf8};

pub(crate) type ScalarVec = SmallVec<[u32; 16]>;

#[inline]
fn fold_ascii(b: u8, casefold: bool) -> u8 {
    if casefold {
        casefold::ascii_to_upper(b)
    } else {
        b
    }
}

/// Normalizes `s` into canonically composed UTF-8, uppercasing every
/// character when `casefold` is set.
///
/// Returns the owned, length-counted result. Fails on malformed UTF-8, in
/// which case nothing is returned: partial output is discarded, never
/// patched up with replacement characters.
///
/// ```
/// use ucnorm::normalize;
///
/// let composed = normalize("e\u{301}tude".as_bytes(), false).unwrap();
/// assert_eq!(composed, "étude".as_bytes());
/// assert_eq!(normalize(b"widget", true).unwrap(), &b"WIDGET"[..]);
/// ```
pub fn normalize(s: &[u8], casefold: bool) -> Result<BString, NormalizeError> {
    // Pure ASCII (or empty): copy, optionally uppercased, and skip the
    // scalar machinery entirely.
    if s.iter().all(|&b| utf8::is_ascii(b)) {
        let out: Vec<u8> = if casefold {
            s.iter().map(|&b| casefold::ascii_to_upper(b)).collect()
        } else {
            s.to_vec()
        };
        return Ok(BString::from(out));
    }

    let len = s.len();
    let mut out = OutBuf::with_capacity(len + utf8::MAX_BYTE_COUNT + 1);
    let mut span = ScalarVec::new();
    let mut i = 0;

    // Leading ASCII run, trailing the cursor by one byte.
    if utf8::is_ascii(s[0]) {
        i = 1;
        while i < len && utf8::is_ascii(s[i]) {
            out.push_byte(fold_ascii(s[i - 1], casefold));
            i += 1;
        }
        // Not all-ASCII, so s[i] starts a span; the run's final character
        // joins it since it may combine with a following mark.
        span.push(fold_ascii(s[i - 1], casefold) as u32);
    }

    loop {
        // s[i] is non-ASCII: decode code units into the span until the next
        // ASCII byte or end of input. Any defect aborts the whole call.
        while i < len && !utf8::is_ascii(s[i]) {
            let (scalar, consumed) = utf8::decode_run(s, i)?;
            span.push(if casefold {
                casefold::to_upper(scalar)
            } else {
                scalar
            });
            i += consumed;
        }

        let composed = canon::compose(&canon::decompose(&span));
        for &code in &composed {
            out.encode_scalar(code);
        }

        if i == len {
            break;
        }

        // s[i] is ASCII: copy the run, again trailing by one.
        i += 1;
        while i < len && utf8::is_ascii(s[i]) {
            out.push_byte(fold_ascii(s[i - 1], casefold));
            i += 1;
        }
        if i == len {
            out.push_byte(fold_ascii(s[len - 1], casefold));
            break;
        }
        span.clear();
        span.push(fold_ascii(s[i - 1], casefold) as u32);
    }

    Ok(out.into_bstring())
}

/// Boundary adapter for callers that require a NUL-terminated result.
///
/// Identical to [`normalize`], but hands back a [`CString`]. A normalized
/// value containing an interior NUL byte has no terminated representation
/// and is rejected.
pub fn normalize_cstr(s: &[u8], casefold: bool) -> Result<CString, NormalizeError> {
    let out = normalize(s, casefold)?;
    CString::new(Vec::from(out)).map_err(|e| NormalizeError::InteriorNul {
        offset: e.nul_position(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_ascii_roundtrip() {
        assert_eq!(
            normalize(b"hello, world", false).unwrap(),
            &b"hello, world"[..]
        );
        assert_eq!(
            normalize(b"Hello, World", true).unwrap(),
            &b"HELLO, WORLD"[..]
        );
        assert_eq!(normalize(b"", false).unwrap(), &b""[..]);
        assert_eq!(normalize(b"", true).unwrap(), &b""[..]);
    }

    #[test]
    fn test_combining_mark_composes() {
        assert_eq!(
            normalize("e\u{301}".as_bytes(), false).unwrap(),
            "\u{E9}".as_bytes()
        );
        assert_eq!(
            normalize("\u{E9}".as_bytes(), false).unwrap(),
            "\u{E9}".as_bytes()
        );
    }

    #[test]
    fn test_mark_after_ascii_run_takes_trailing_character() {
        // The 'e' ends an ASCII run but must combine with the mark after it.
        assert_eq!(
            normalize("cafe\u{301}".as_bytes(), false).unwrap(),
            "caf\u{E9}".as_bytes()
        );
        assert_eq!(
            normalize("cafe\u{301} au lait".as_bytes(), false).unwrap(),
            "caf\u{E9} au lait".as_bytes()
        );
    }

    #[test]
    fn test_alternating_runs() {
        assert_eq!(
            normalize("e\u{301}xe\u{301}x".as_bytes(), false).unwrap(),
            "\u{E9}x\u{E9}x".as_bytes()
        );
        assert_eq!(
            normalize("xe\u{301}xe\u{301}".as_bytes(), true).unwrap(),
            "X\u{C9}X\u{C9}".as_bytes()
        );
    }

    #[test]
    fn test_casefold_applies_before_composition() {
        assert_eq!(
            normalize("e\u{301}".as_bytes(), true).unwrap(),
            "\u{C9}".as_bytes()
        );
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert_eq!(
            normalize(&[0xC2, 0x41], false),
            Err(NormalizeError::InvalidContinuation {
                byte: 0x41,
                offset: 1
            })
        );
        // Defect deep in the string, after valid output was staged.
        let mut s = b"prefix ".to_vec();
        s.extend_from_slice("\u{E9}".as_bytes());
        s.push(0xC2);
        s.push(0x41);
        assert!(normalize(&s, false).is_err());
    }

    #[test]
    fn test_buffer_growth_long_astral_run() {
        let input: String = std::iter::repeat('\u{10400}').take(1000).collect();
        let out = normalize(input.as_bytes(), false).unwrap();
        assert_eq!(out, input.as_bytes());
        assert_eq!(out.len(), 4000);
    }

    #[test]
    fn test_normalize_cstr() {
        let out = normalize_cstr("cafe\u{301}".as_bytes(), false).unwrap();
        assert_eq!(out.as_bytes(), "caf\u{E9}".as_bytes());
        assert_eq!(
            normalize_cstr(b"a\x00b", false),
            Err(NormalizeError::InteriorNul { offset: 1 })
        );
    }

    #[quickcheck]
    fn prop_ascii_is_identity(s: String) -> bool {
        let ascii: String = s.chars().filter(char::is_ascii).collect();
        normalize(ascii.as_bytes(), false).unwrap() == ascii.as_bytes()
            && normalize(ascii.as_bytes(), true).unwrap() == ascii.to_ascii_uppercase().as_bytes()
    }

    #[quickcheck]
    fn prop_idempotent(s: String) -> bool {
        [false, true].into_iter().all(|fold| {
            let once = normalize(s.as_bytes(), fold).unwrap();
            let twice = normalize(&once, fold).unwrap();
            once == twice
        })
    }
}
