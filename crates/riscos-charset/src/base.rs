//! Base ISO-8859 decode tables.
//!
//! Parts 2–8, 10 and 13–16 are taken from `encoding_rs` by decoding all 256
//! byte values. `encoding_rs` follows the WHATWG labels, where "ISO-8859-1"
//! and "ISO-8859-9" name the Windows code pages, so those two parts are
//! built here instead: part 1 is the identity mapping and part 9 patches six
//! Turkish letters over it.

use encoding_rs::Encoding;
use riscos_charset_core::{DecodeTable, OverrideLayer, REPLACEMENT_CHARACTER};

/// An ISO-8859 part used as the starting point of an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseEncoding {
    /// Latin-1, Western European.
    Iso8859_1,
    /// Latin-2, Central European.
    Iso8859_2,
    /// Latin-3, South European.
    Iso8859_3,
    /// Latin-4, North European.
    Iso8859_4,
    /// Latin/Cyrillic.
    Iso8859_5,
    /// Latin/Arabic.
    Iso8859_6,
    /// Latin/Greek.
    Iso8859_7,
    /// Latin/Hebrew.
    Iso8859_8,
    /// Latin-5, Turkish.
    Iso8859_9,
    /// Latin-6, Nordic.
    Iso8859_10,
    /// Latin-7, Baltic Rim.
    Iso8859_13,
    /// Latin-8, Celtic.
    Iso8859_14,
    /// Latin-9, Latin-1 with euro.
    Iso8859_15,
    /// Latin-10, South-Eastern European.
    Iso8859_16,
}

// Differences between ISO-8859-9 and ISO-8859-1.
const LATIN5_DIFFERENCES: OverrideLayer<'static> = OverrideLayer::new(
    "iso-8859-9",
    &[
        (0xD0, Some('\u{011E}')), // Ğ
        (0xDD, Some('\u{0130}')), // İ
        (0xDE, Some('\u{015E}')), // Ş
        (0xF0, Some('\u{011F}')), // ğ
        (0xFD, Some('\u{0131}')), // ı
        (0xFE, Some('\u{015F}')), // ş
    ],
);

impl BaseEncoding {
    /// Every supported part.
    pub const ALL: [BaseEncoding; 14] = [
        BaseEncoding::Iso8859_1,
        BaseEncoding::Iso8859_2,
        BaseEncoding::Iso8859_3,
        BaseEncoding::Iso8859_4,
        BaseEncoding::Iso8859_5,
        BaseEncoding::Iso8859_6,
        BaseEncoding::Iso8859_7,
        BaseEncoding::Iso8859_8,
        BaseEncoding::Iso8859_9,
        BaseEncoding::Iso8859_10,
        BaseEncoding::Iso8859_13,
        BaseEncoding::Iso8859_14,
        BaseEncoding::Iso8859_15,
        BaseEncoding::Iso8859_16,
    ];

    /// The standard's label, e.g. `ISO-8859-5`.
    pub fn label(&self) -> &'static str {
        match self {
            BaseEncoding::Iso8859_1 => "ISO-8859-1",
            BaseEncoding::Iso8859_2 => "ISO-8859-2",
            BaseEncoding::Iso8859_3 => "ISO-8859-3",
            BaseEncoding::Iso8859_4 => "ISO-8859-4",
            BaseEncoding::Iso8859_5 => "ISO-8859-5",
            BaseEncoding::Iso8859_6 => "ISO-8859-6",
            BaseEncoding::Iso8859_7 => "ISO-8859-7",
            BaseEncoding::Iso8859_8 => "ISO-8859-8",
            BaseEncoding::Iso8859_9 => "ISO-8859-9",
            BaseEncoding::Iso8859_10 => "ISO-8859-10",
            BaseEncoding::Iso8859_13 => "ISO-8859-13",
            BaseEncoding::Iso8859_14 => "ISO-8859-14",
            BaseEncoding::Iso8859_15 => "ISO-8859-15",
            BaseEncoding::Iso8859_16 => "ISO-8859-16",
        }
    }

    /// The `encoding_rs` encoding for parts whose WHATWG definition is the
    /// ISO one. `None` for parts 1 and 9.
    pub fn encoding(&self) -> Option<&'static Encoding> {
        match self {
            BaseEncoding::Iso8859_1 | BaseEncoding::Iso8859_9 => None,
            BaseEncoding::Iso8859_2 => Some(encoding_rs::ISO_8859_2),
            BaseEncoding::Iso8859_3 => Some(encoding_rs::ISO_8859_3),
            BaseEncoding::Iso8859_4 => Some(encoding_rs::ISO_8859_4),
            BaseEncoding::Iso8859_5 => Some(encoding_rs::ISO_8859_5),
            BaseEncoding::Iso8859_6 => Some(encoding_rs::ISO_8859_6),
            BaseEncoding::Iso8859_7 => Some(encoding_rs::ISO_8859_7),
            BaseEncoding::Iso8859_8 => Some(encoding_rs::ISO_8859_8),
            BaseEncoding::Iso8859_10 => Some(encoding_rs::ISO_8859_10),
            BaseEncoding::Iso8859_13 => Some(encoding_rs::ISO_8859_13),
            BaseEncoding::Iso8859_14 => Some(encoding_rs::ISO_8859_14),
            BaseEncoding::Iso8859_15 => Some(encoding_rs::ISO_8859_15),
            BaseEncoding::Iso8859_16 => Some(encoding_rs::ISO_8859_16),
        }
    }

    /// The 256-entry decode table. Positions the standard leaves undefined
    /// are unmapped.
    pub fn decode_table(&self) -> DecodeTable {
        match self {
            BaseEncoding::Iso8859_1 => DecodeTable::latin1(),
            BaseEncoding::Iso8859_9 => {
                let mut table = DecodeTable::latin1();
                LATIN5_DIFFERENCES.apply_to(&mut table);
                table
            }
            _ => match self.encoding() {
                Some(encoding) => decode_all(encoding),
                None => DecodeTable::empty(),
            },
        }
    }
}

/// Decode every byte value with a single-byte `encoding_rs` encoding.
///
/// Single-byte decoders emit exactly one character per byte, U+FFFD for
/// undefined positions.
fn decode_all(encoding: &'static Encoding) -> DecodeTable {
    let bytes: [u8; 256] = std::array::from_fn(|i| i as u8);
    let (text, _had_errors) = encoding.decode_without_bom_handling(&bytes);
    let mut chars = text.chars();
    let table: [char; 256] =
        std::array::from_fn(|_| chars.next().unwrap_or(REPLACEMENT_CHARACTER));
    DecodeTable::from_chars(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_c1_are_identity_in_every_part() {
        for base in BaseEncoding::ALL {
            let table = base.decode_table();
            for byte in 0x00..=0x9Fu8 {
                assert_eq!(
                    table.get(byte),
                    Some(char::from(byte)),
                    "{} byte 0x{byte:02X}",
                    base.label()
                );
            }
        }
    }

    #[test]
    fn latin1_upper_half() {
        let table = BaseEncoding::Iso8859_1.decode_table();
        assert_eq!(table.get(0xA0), Some('\u{00A0}'));
        assert_eq!(table.get(0xE9), Some('é'));
        assert_eq!(table.get(0xFF), Some('ÿ'));
    }

    #[test]
    fn latin5_differs_from_latin1_in_six_places() {
        let latin1 = BaseEncoding::Iso8859_1.decode_table();
        let latin5 = BaseEncoding::Iso8859_9.decode_table();
        let differing: Vec<u8> = (0..=255u8)
            .filter(|&b| latin1.get(b) != latin5.get(b))
            .collect();
        assert_eq!(differing, [0xD0, 0xDD, 0xDE, 0xF0, 0xFD, 0xFE]);
        assert_eq!(latin5.get(0xDD), Some('İ'));
        assert_eq!(latin5.get(0xFD), Some('ı'));
    }

    #[test]
    fn characteristic_letters() {
        let cases = [
            (BaseEncoding::Iso8859_2, 0xA1, 'Ą'),
            (BaseEncoding::Iso8859_3, 0xA1, 'Ħ'),
            (BaseEncoding::Iso8859_4, 0xA2, 'ĸ'),
            (BaseEncoding::Iso8859_5, 0xB0, 'А'),
            (BaseEncoding::Iso8859_6, 0xC7, 'ا'),
            (BaseEncoding::Iso8859_7, 0xC1, 'Α'),
            (BaseEncoding::Iso8859_8, 0xE0, 'א'),
            (BaseEncoding::Iso8859_10, 0xBD, '―'),
            (BaseEncoding::Iso8859_13, 0xA1, '”'),
            (BaseEncoding::Iso8859_14, 0xA1, 'Ḃ'),
            (BaseEncoding::Iso8859_15, 0xA4, '€'),
            (BaseEncoding::Iso8859_16, 0xAA, 'Ș'),
        ];
        for (base, byte, expected) in cases {
            assert_eq!(
                base.decode_table().get(byte),
                Some(expected),
                "{} byte 0x{byte:02X}",
                base.label()
            );
        }
    }

    #[test]
    fn undefined_positions_are_unmapped() {
        let latin3 = BaseEncoding::Iso8859_3.decode_table();
        assert_eq!(
            latin3.unmapped_in(0xA0..=0xFF),
            [0xA5, 0xAE, 0xBE, 0xC3, 0xD0, 0xE3, 0xF0]
        );
        let arabic = BaseEncoding::Iso8859_6.decode_table();
        assert!(!arabic.is_mapped(0xA1));
        assert!(!arabic.is_mapped(0xFF));
    }

    #[test]
    fn only_parts_1_and_9_are_built_locally() {
        let local: Vec<&str> = BaseEncoding::ALL
            .iter()
            .filter(|b| b.encoding().is_none())
            .map(|b| b.label())
            .collect();
        assert_eq!(local, ["ISO-8859-1", "ISO-8859-9"]);
    }
}
