//! Byte-sequence codec for the extended (1..=6 byte) UTF-8 encoding used by
//! directory string values. Scalar values up to `0x7FFF_FFFF` are
//! representable; decoding validates structure and never produces a partial
//! scalar.

use crate::error::NormalizeError;

pub(crate) const MAX_BYTE_COUNT: usize = 6;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const TAG_FIVE_B: u8 = 0b1111_1000;
const TAG_SIX_B: u8 = 0b1111_1100;
const END_ONE_B: u32 = 0x80;
const END_TWO_B: u32 = 0x800;
const END_THREE_B: u32 = 0x10000;
const END_FOUR_B: u32 = 0x20_0000;
const END_FIVE_B: u32 = 0x400_0000;
const END_SIX_B: u32 = 0x8000_0000;

/// Whether `b` is a plain ASCII byte (high bit clear).
#[inline]
pub(crate) fn is_ascii(b: u8) -> bool {
    b < 0x80
}

/// The number of bytes needed to encode `code`.
pub(crate) fn scalar_len(code: u32) -> usize {
    if code < END_ONE_B {
        1
    } else if code < END_TWO_B {
        2
    } else if code < END_THREE_B {
        3
    } else if code < END_FOUR_B {
        4
    } else if code < END_FIVE_B {
        5
    } else if code < END_SIX_B {
        6
    } else {
        unreachable!()
    }
}

/// The byte length of the code unit started by `lead`, or `None` if `lead`
/// cannot start a code unit (a continuation byte, or `0xFE`/`0xFF`).
pub(crate) fn char_len(lead: u8) -> Option<usize> {
    if lead < 0x80 {
        Some(1)
    } else if lead & !0x01 == TAG_SIX_B {
        Some(6)
    } else if lead & !0x03 == TAG_FIVE_B {
        Some(5)
    } else if lead & !0x07 == TAG_FOUR_B {
        Some(4)
    } else if lead & !0x0F == TAG_THREE_B {
        Some(3)
    } else if lead & !0x1F == TAG_TWO_B {
        Some(2)
    } else {
        None
    }
}

const CONT_PREFIX_MASK: u8 = 0b1100_0000;
const CONT_VALUE_MASK: u8 = 0b0011_1111;

#[inline]
pub(crate) fn is_cont_byte(v: u8) -> bool {
    (v & CONT_PREFIX_MASK) == TAG_CONT
}

#[inline]
fn first_byte_payload(byte: u8, cont_len: u32) -> u32 {
    // The tag bit adjacent to the payload is zero, so a shifted 0x7F mask
    // extracts exactly the payload bits for every code-unit length.
    (byte & (0x7F >> cont_len)) as u32
}

#[inline]
fn acc_cont_byte(ch: u32, byte: u8) -> u32 {
    (ch << 6) | (byte & CONT_VALUE_MASK) as u32
}

/// Decodes the code unit starting at `s[offset]`, returning the scalar value
/// and the number of bytes consumed.
///
/// Any structural defect fails the caller's whole operation: an invalid lead
/// byte, a continuation byte outside `10xxxxxx`, or an input that ends
/// mid-unit.
pub(crate) fn decode_run(s: &[u8], offset: usize) -> Result<(u32, usize), NormalizeError> {
    let lead = s[offset];
    let len = match char_len(lead) {
        Some(len) => len,
        None => return Err(NormalizeError::InvalidLeadByte { byte: lead, offset }),
    };
    if len == 1 {
        return Ok((lead as u32, 1));
    }
    if offset + len > s.len() {
        return Err(NormalizeError::TruncatedSequence { offset });
    }
    let cont = &s[offset + 1..offset + len];
    let mut v = first_byte_payload(lead, cont.len() as u32);
    for (j, &b) in cont.iter().enumerate() {
        if !is_cont_byte(b) {
            return Err(NormalizeError::InvalidContinuation {
                byte: b,
                offset: offset + 1 + j,
            });
        }
        v = acc_cont_byte(v, b);
    }
    Ok((v, len))
}

/// Encodes `code` into `buf`, returning the number of bytes written (1..=6).
pub(crate) fn encode_scalar(code: u32, buf: &mut [u8; MAX_BYTE_COUNT]) -> usize {
    let len = scalar_len(code);
    match (len, &mut buf[..]) {
        (1, [a, ..]) => {
            *a = code as u8;
        }
        (2, [a, b, ..]) => {
            *a = (code >> 6 & 0x1F) as u8 | TAG_TWO_B;
            *b = (code & 0x3F) as u8 | TAG_CONT;
        }
        (3, [a, b, c, ..]) => {
            *a = (code >> 12 & 0x0F) as u8 | TAG_THREE_B;
            *b = (code >> 6 & 0x3F) as u8 | TAG_CONT;
            *c = (code & 0x3F) as u8 | TAG_CONT;
        }
        (4, [a, b, c, d, ..]) => {
            *a = (code >> 18 & 0x07) as u8 | TAG_FOUR_B;
            *b = (code >> 12 & 0x3F) as u8 | TAG_CONT;
            *c = (code >> 6 & 0x3F) as u8 | TAG_CONT;
            *d = (code & 0x3F) as u8 | TAG_CONT;
        }
        (5, [a, b, c, d, e, ..]) => {
            *a = (code >> 24 & 0x03) as u8 | TAG_FIVE_B;
            *b = (code >> 18 & 0x3F) as u8 | TAG_CONT;
            *c = (code >> 12 & 0x3F) as u8 | TAG_CONT;
            *d = (code >> 6 & 0x3F) as u8 | TAG_CONT;
            *e = (code & 0x3F) as u8 | TAG_CONT;
        }
        (6, [a, b, c, d, e, f]) => {
            *a = (code >> 30 & 0x01) as u8 | TAG_SIX_B;
            *b = (code >> 24 & 0x3F) as u8 | TAG_CONT;
            *c = (code >> 18 & 0x3F) as u8 | TAG_CONT;
            *d = (code >> 12 & 0x3F) as u8 | TAG_CONT;
            *e = (code >> 6 & 0x3F) as u8 | TAG_CONT;
            *f = (code & 0x3F) as u8 | TAG_CONT;
        }
        _ => unreachable!(),
    };
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(code: u32) {
        let mut buf = [0u8; MAX_BYTE_COUNT];
        let len = encode_scalar(code, &mut buf);
        assert_eq!(len, scalar_len(code));
        let (decoded, consumed) = decode_run(&buf[..len], 0).unwrap();
        assert_eq!(decoded, code);
        assert_eq!(consumed, len);
    }

    #[test]
    fn test_roundtrip_all_widths() {
        for code in [
            0x00, 0x41, 0x7F, 0x80, 0x3B1, 0x7FF, 0x800, 0x20AC, 0xFFFF, 0x10000, 0x10400,
            0x1F_FFFF, 0x20_0000, 0x3FF_FFFF, 0x400_0000, 0x7FFF_FFFF,
        ] {
            roundtrip(code);
        }
    }

    #[test]
    fn test_decode_at_offset() {
        let s = b"a\xC3\xA9b";
        assert_eq!(decode_run(s, 0).unwrap(), (b'a' as u32, 1));
        assert_eq!(decode_run(s, 1).unwrap(), (0xE9, 2));
        assert_eq!(decode_run(s, 3).unwrap(), (b'b' as u32, 1));
    }

    #[test]
    fn test_stray_continuation_lead() {
        assert_eq!(
            decode_run(&[0x80], 0),
            Err(NormalizeError::InvalidLeadByte {
                byte: 0x80,
                offset: 0
            })
        );
        assert_eq!(char_len(0xFE), None);
        assert_eq!(char_len(0xFF), None);
    }

    #[test]
    fn test_bad_continuation() {
        // 2-byte lead followed by an ASCII byte.
        assert_eq!(
            decode_run(&[0xC2, 0x41], 0),
            Err(NormalizeError::InvalidContinuation {
                byte: 0x41,
                offset: 1
            })
        );
    }

    #[test]
    fn test_truncated_unit() {
        assert_eq!(
            decode_run(&[0x61, 0xE2, 0x82], 1),
            Err(NormalizeError::TruncatedSequence { offset: 1 })
        );
    }
}
