//! Reports of byte positions with no character mapping.

use std::ops::RangeInclusive;

use riscos_charset_core::{Registry, Transcoder};

/// Bytes examined by [`coverage`]: everything above the C0 controls.
pub const CHECKED_RANGE: RangeInclusive<u8> = 0x20..=0xFF;

/// Unmapped positions of one transcoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    /// Alphabet number.
    pub alphabet: u32,
    /// Encoding name.
    pub name: String,
    /// Unmapped bytes in [`CHECKED_RANGE`], ascending; `None` when the
    /// transcoder has no table (UTF-8 pass-through).
    pub unmapped: Option<Vec<u8>>,
}

impl Coverage {
    /// Inspect one transcoder.
    pub fn of(transcoder: &Transcoder) -> Self {
        Self {
            alphabet: transcoder.alphabet(),
            name: transcoder.name().to_string(),
            unmapped: transcoder.unmapped_bytes(CHECKED_RANGE),
        }
    }

    /// Whether the transcoder was skipped.
    pub fn is_skipped(&self) -> bool {
        self.unmapped.is_none()
    }
}

/// Coverage of every registered transcoder, in registration order.
pub fn coverage(registry: &Registry) -> Vec<Coverage> {
    registry.iter().map(Coverage::of).collect()
}
