//! Bidirectional byte/text conversion over a built table.
//!
//! A [`Transcoder`] is either table-driven (one byte per character in both
//! directions) or a UTF-8 pass-through with no remapping. Both honour the
//! three [`ErrorPolicy`] values.

use std::ops::RangeInclusive;

use crate::error::{DecodeError, EncodeError};
use crate::policy::{ConvertOptions, ENCODE_REPLACEMENT_BYTE, ErrorPolicy};
use crate::table::{CharTable, DecodeTable, EncodeTable, REPLACEMENT_CHARACTER};

/// The conversion machinery behind a [`Transcoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Codec {
    /// Single-byte conversion through a decode/encode table pair.
    Table(CharTable),
    /// Unicode-transparent conversion using UTF-8.
    Utf8,
}

/// A named, numbered encoding with `decode` and `encode` operations.
///
/// Immutable once built, so a shared reference can be used from any number
/// of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoder {
    alphabet: u32,
    name: String,
    codec: Codec,
}

impl Transcoder {
    /// A table-driven transcoder.
    pub fn new(alphabet: u32, name: impl Into<String>, table: CharTable) -> Self {
        Self {
            alphabet,
            name: name.into(),
            codec: Codec::Table(table),
        }
    }

    /// A pass-through transcoder that delegates to UTF-8.
    pub fn utf8(alphabet: u32, name: impl Into<String>) -> Self {
        Self {
            alphabet,
            name: name.into(),
            codec: Codec::Utf8,
        }
    }

    /// The alphabet number.
    pub fn alphabet(&self) -> u32 {
        self.alphabet
    }

    /// The encoding name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying codec.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Whether this is the UTF-8 pass-through.
    pub fn is_passthrough(&self) -> bool {
        matches!(self.codec, Codec::Utf8)
    }

    /// The decode table, if table-driven.
    pub fn decode_table(&self) -> Option<&DecodeTable> {
        match &self.codec {
            Codec::Table(table) => Some(table.decode_table()),
            Codec::Utf8 => None,
        }
    }

    /// The encode table, if table-driven.
    pub fn encode_table(&self) -> Option<&EncodeTable> {
        match &self.codec {
            Codec::Table(table) => Some(table.encode_table()),
            Codec::Utf8 => None,
        }
    }

    /// Decode a single byte. The pass-through only answers for ASCII.
    pub fn decode_char(&self, byte: u8) -> Option<char> {
        match &self.codec {
            Codec::Table(table) => table.decode_table().get(byte),
            Codec::Utf8 => byte.is_ascii().then(|| char::from(byte)),
        }
    }

    /// Encode a single character. The pass-through only answers for ASCII.
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        match &self.codec {
            Codec::Table(table) => table.encode_table().get(ch),
            Codec::Utf8 => ch.is_ascii().then_some(ch as u8),
        }
    }

    /// Bytes in `range` with no character mapping; `None` for the pass-through.
    pub fn unmapped_bytes(&self, range: RangeInclusive<u8>) -> Option<Vec<u8>> {
        self.decode_table().map(|table| table.unmapped_in(range))
    }

    /// Convert bytes to text.
    ///
    /// Only [`ErrorPolicy::Strict`] can fail. The error carries the first
    /// unmapped byte and its offset.
    pub fn decode(&self, bytes: &[u8], policy: ErrorPolicy) -> Result<String, DecodeError> {
        match &self.codec {
            Codec::Table(table) => decode_table(table.decode_table(), bytes, policy),
            Codec::Utf8 => decode_utf8(bytes, policy),
        }
    }

    /// Convert text to bytes.
    ///
    /// Only [`ErrorPolicy::Strict`] can fail. Positions in the error count
    /// characters, not bytes.
    pub fn encode(&self, text: &str, policy: ErrorPolicy) -> Result<Vec<u8>, EncodeError> {
        match &self.codec {
            Codec::Table(table) => encode_table(table.encode_table(), text, policy),
            Codec::Utf8 => Ok(text.as_bytes().to_vec()),
        }
    }

    /// [`decode`](Self::decode) with the policy from `options`.
    pub fn decode_with(
        &self,
        bytes: &[u8],
        options: &ConvertOptions,
    ) -> Result<String, DecodeError> {
        self.decode(bytes, options.decode_policy)
    }

    /// [`encode`](Self::encode) with the policy from `options`.
    pub fn encode_with(
        &self,
        text: &str,
        options: &ConvertOptions,
    ) -> Result<Vec<u8>, EncodeError> {
        self.encode(text, options.encode_policy)
    }
}

fn decode_table(
    table: &DecodeTable,
    bytes: &[u8],
    policy: ErrorPolicy,
) -> Result<String, DecodeError> {
    let mut text = String::with_capacity(bytes.len());
    for (position, &byte) in bytes.iter().enumerate() {
        match table.get(byte) {
            Some(ch) => text.push(ch),
            None => match policy {
                ErrorPolicy::Strict => return Err(DecodeError { byte, position }),
                ErrorPolicy::Ignore => {}
                ErrorPolicy::Replace => text.push(REPLACEMENT_CHARACTER),
            },
        }
    }
    Ok(text)
}

fn encode_table(
    table: &EncodeTable,
    text: &str,
    policy: ErrorPolicy,
) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        match table.get(character) {
            Some(byte) => bytes.push(byte),
            None => match policy {
                ErrorPolicy::Strict => return Err(EncodeError { character, position }),
                ErrorPolicy::Ignore => {}
                ErrorPolicy::Replace => bytes.push(ENCODE_REPLACEMENT_BYTE),
            },
        }
    }
    Ok(bytes)
}

// Each maximal invalid subsequence counts as one error unit.
fn decode_utf8(bytes: &[u8], policy: ErrorPolicy) -> Result<String, DecodeError> {
    let mut text = String::with_capacity(bytes.len());
    let mut offset = 0;
    for chunk in bytes.utf8_chunks() {
        let valid = chunk.valid();
        let invalid = chunk.invalid();
        text.push_str(valid);
        offset += valid.len();
        if let Some(&byte) = invalid.first() {
            match policy {
                ErrorPolicy::Strict => {
                    return Err(DecodeError {
                        byte,
                        position: offset,
                    });
                }
                ErrorPolicy::Ignore => {}
                ErrorPolicy::Replace => text.push(REPLACEMENT_CHARACTER),
            }
        }
        offset += invalid.len();
    }
    Ok(text)
}
