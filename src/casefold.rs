//! Scalar-to-scalar uppercase mapping used for case-insensitive matching.
//!
//! This is the simple (one-to-one) mapping: scalars whose full uppercase
//! expands to more than one character, such as `ß`, are left unchanged, and
//! so are values outside the `char` range. Matching rules that need the full
//! expansion are a schema-layer concern, not this engine's.

/// Maps `v` to its uppercase form, or returns it unchanged when no
/// one-to-one mapping exists.
#[inline]
pub(crate) fn to_upper(v: u32) -> u32 {
    let Some(ch) = char::from_u32(v) else {
        return v;
    };
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u as u32,
        _ => v,
    }
}

/// ASCII-only variant for the byte-oriented fast paths.
#[inline]
pub(crate) fn ascii_to_upper(b: u8) -> u8 {
    b.to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_mapping() {
        assert_eq!(to_upper('a' as u32), 'A' as u32);
        assert_eq!(to_upper('A' as u32), 'A' as u32);
        assert_eq!(to_upper('é' as u32), 'É' as u32);
        assert_eq!(to_upper('σ' as u32), 'Σ' as u32);
    }

    #[test]
    fn test_multichar_expansion_is_identity() {
        // ß uppercases to "SS" under the full mapping; the simple mapping
        // keeps it as-is.
        assert_eq!(to_upper('ß' as u32), 'ß' as u32);
    }

    #[test]
    fn test_out_of_char_range_is_identity() {
        assert_eq!(to_upper(0x7FFF_FFFF), 0x7FFF_FFFF);
        assert_eq!(to_upper(0xD800), 0xD800);
    }
}
