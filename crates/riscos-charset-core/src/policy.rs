//! Error-handling policies for conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownPolicyError;

/// Byte written by [`ErrorPolicy::Replace`] in place of an unencodable character.
pub const ENCODE_REPLACEMENT_BYTE: u8 = b'?';

/// How a conversion reacts to data with no mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ErrorPolicy {
    /// Fail the whole call at the first unmappable unit.
    Strict,
    /// Drop unmappable units and carry on.
    Ignore,
    /// Substitute U+FFFD when decoding, `?` when encoding.
    Replace,
}

impl ErrorPolicy {
    /// All policies, in their conventional order.
    pub const ALL: [ErrorPolicy; 3] = [
        ErrorPolicy::Strict,
        ErrorPolicy::Ignore,
        ErrorPolicy::Replace,
    ];

    /// Returns the lowercase policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Strict => "strict",
            ErrorPolicy::Ignore => "ignore",
            ErrorPolicy::Replace => "replace",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = UnknownPolicyError;

    /// Parses one of `strict`, `ignore`, `replace` (exact, lowercase).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ErrorPolicy::Strict),
            "ignore" => Ok(ErrorPolicy::Ignore),
            "replace" => Ok(ErrorPolicy::Replace),
            other => Err(UnknownPolicyError(other.to_string())),
        }
    }
}

/// Policy defaults for each conversion direction.
///
/// The default decodes with [`ErrorPolicy::Strict`] and encodes with
/// [`ErrorPolicy::Replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Policy used by [`Transcoder::decode_with`](crate::Transcoder::decode_with).
    pub decode_policy: ErrorPolicy,
    /// Policy used by [`Transcoder::encode_with`](crate::Transcoder::encode_with).
    pub encode_policy: ErrorPolicy,
}

impl ConvertOptions {
    /// Use the same policy in both directions.
    pub fn uniform(policy: ErrorPolicy) -> Self {
        Self {
            decode_policy: policy,
            encode_policy: policy,
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            decode_policy: ErrorPolicy::Strict,
            encode_policy: ErrorPolicy::Replace,
        }
    }
}
