//! Owned growable byte buffer used by the normalization pipeline.
//!
//! Capacity and length are tracked separately; every encode step goes
//! through [`OutBuf::encode_scalar`], which first guarantees room for a
//! maximal code unit plus a terminator slot so the encoder never observes a
//! short buffer.

use bstr::BString;

use crate::utf8;

pub(crate) struct OutBuf {
    bytes: Vec<u8>,
}

impl OutBuf {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        OutBuf {
            bytes: Vec::with_capacity(capacity),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Grows the buffer so at least `additional` spare bytes are available,
    /// doubling when that is larger than the shortfall. Written bytes are
    /// never disturbed.
    pub(crate) fn ensure_capacity(&mut self, additional: usize) {
        let spare = self.bytes.capacity() - self.bytes.len();
        if spare < additional {
            self.bytes.reserve(additional.max(self.bytes.capacity()));
        }
    }

    pub(crate) fn push_byte(&mut self, b: u8) {
        self.bytes.push(b);
    }

    /// Appends the encoding of `code`, making room for up to
    /// `MAX_BYTE_COUNT` bytes plus one terminator slot first.
    pub(crate) fn encode_scalar(&mut self, code: u32) {
        self.ensure_capacity(utf8::MAX_BYTE_COUNT + 1);
        let mut unit = [0u8; utf8::MAX_BYTE_COUNT];
        let len = utf8::encode_scalar(code, &mut unit);
        self.bytes.extend_from_slice(&unit[..len]);
    }

    pub(crate) fn into_bstring(self) -> BString {
        BString::from(self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_preserves_contents() {
        let mut buf = OutBuf::with_capacity(4);
        for b in 0..64u8 {
            buf.push_byte(b);
        }
        for _ in 0..64 {
            buf.encode_scalar(0x10400);
        }
        let out = buf.into_bstring();
        assert_eq!(out.len(), 64 + 64 * 4);
        assert_eq!(&out[..4], &[0, 1, 2, 3]);
        assert_eq!(&out[64..68], "\u{10400}".as_bytes());
    }

    #[test]
    fn test_ensure_capacity_is_monotone() {
        let mut buf = OutBuf::with_capacity(0);
        buf.ensure_capacity(7);
        let len_before = buf.len();
        buf.ensure_capacity(7);
        assert_eq!(buf.len(), len_before);
    }
}
