//! Error types for conversion, policy parsing, and registry population.
//!
//! Uses [`thiserror`] for error derivation. [`DecodeError`] and [`EncodeError`]
//! are only produced under [`ErrorPolicy::Strict`](crate::ErrorPolicy::Strict);
//! the `ignore` and `replace` policies never fail on unmappable data.
//! [`TranscodeError`] gathers all of them for callers that mix operations.

use thiserror::Error;

/// A byte with no character mapping in the active decode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("cannot decode byte 0x{byte:02X} at position {position}")]
pub struct DecodeError {
    /// The offending byte value.
    pub byte: u8,
    /// Offset of the byte in the input (also the number of bytes consumed
    /// successfully before the failure).
    pub position: usize,
}

/// A character with no byte mapping in the active encode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error(
    "cannot encode character {character:?} (U+{code:04X}) at position {position}",
    code = code_point(.character)
)]
pub struct EncodeError {
    /// The offending character.
    pub character: char,
    /// Index of the character in the input, counted in characters.
    pub position: usize,
}

fn code_point(ch: impl std::borrow::Borrow<char>) -> u32 {
    u32::from(*ch.borrow())
}

/// An error-policy name outside `strict`, `ignore`, `replace`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error policy: '{0}' (expected strict, ignore or replace)")]
pub struct UnknownPolicyError(pub String);

/// A transcoder could not be added to a [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Another transcoder is already registered under this name.
    #[error("a transcoder named '{0}' is already registered")]
    DuplicateName(String),

    /// Another transcoder is already registered under this alphabet number.
    #[error("alphabet {0} is already registered")]
    DuplicateAlphabet(u32),
}

/// Any failure a caller of this crate may need to surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscodeError {
    /// Strict decoding hit an unmapped byte.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Strict encoding hit an unmappable character.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// An unrecognised policy name was supplied.
    #[error(transparent)]
    Policy(#[from] UnknownPolicyError),

    /// Registry population failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
