use thiserror::Error;

/// The error type for normalization and comparison operations.
///
/// Any of these aborts the whole operation: no partial output is returned
/// and no ordering is guessed from partially decoded data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// A byte that cannot start a UTF-8 code unit, such as a stray
    /// continuation byte.
    #[error("invalid utf-8 lead byte {byte:#04x} at offset {offset}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Byte offset within the operand where it was found.
        offset: usize,
    },
    /// A multi-byte code unit whose continuation byte does not match the
    /// `10xxxxxx` pattern.
    #[error("invalid utf-8 continuation byte {byte:#04x} at offset {offset}")]
    InvalidContinuation {
        /// The offending byte.
        byte: u8,
        /// Byte offset within the operand where it was found.
        offset: usize,
    },
    /// The input ends in the middle of a multi-byte code unit.
    #[error("truncated utf-8 sequence starting at offset {offset}")]
    TruncatedSequence {
        /// Byte offset of the lead byte of the truncated code unit.
        offset: usize,
    },
    /// A normalized result contains a NUL byte and therefore has no
    /// NUL-terminated representation. Only returned by the terminated-form
    /// boundary adapter.
    #[error("normalized value contains an interior nul byte at offset {offset}")]
    InteriorNul {
        /// Byte offset of the first NUL byte in the normalized output.
        offset: usize,
    },
}
