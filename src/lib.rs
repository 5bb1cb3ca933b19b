#![deny(missing_docs, missing_debug_implementations)]
//! Unicode-aware string normalization and ordering comparison for directory
//! attribute values.
//!
//! Directory matching rules need to decide whether two attribute values are
//! "the same" under locale-independent, case-insensitive, accent-aware
//! rules. This crate provides the engine behind that decision:
//! [`normalize`] turns an arbitrary UTF-8 byte string into its canonically
//! composed (NFC) form with optional case folding, and [`compare`] /
//! [`compare_with`] order two byte strings under canonical equivalence
//! without materializing normalized copies when an ASCII fast path can
//! settle the answer.
//!
//! Inputs are length-counted byte strings (`&[u8]`); owned results are
//! [`bstr::BString`]s. The encoding is the extended six-byte form of UTF-8,
//! so scalar values up to `0x7FFF_FFFF` round-trip through the codec.
//! Values outside the Unicode `char` range have no canonical equivalents or
//! case mappings and pass through normalization untouched.
//!
//! Malformed input fails the whole operation: no replacement characters, no
//! partial output, no guessed orderings.
//!
//! The engine holds no cross-call state. The decomposition, composition and
//! case-mapping tables are compiled in, so calls are freely reentrant and
//! need no initialization step.
//!
//! ```
//! use std::cmp::Ordering;
//!
//! let stored = ucnorm::normalize("Caf\u{E9}".as_bytes(), true).unwrap();
//! assert_eq!(stored, "CAF\u{C9}".as_bytes());
//!
//! // A decomposed probe still matches the stored composed form.
//! assert_eq!(
//!     ucnorm::compare("cafe\u{301}".as_bytes(), "CAF\u{C9}".as_bytes(), true),
//!     Ok(Ordering::Equal)
//! );
//! ```

pub(crate) mod buffer;

pub(crate) mod canon;

pub(crate) mod casefold;

pub(crate) mod compare;

pub(crate) mod error;

pub(crate) mod normalize;

pub mod rules;

pub mod scalar;

pub(crate) mod utf8;

pub use compare::{compare, compare_with, CompareFlags};

pub use error::NormalizeError;

pub use normalize::{normalize, normalize_cstr};
