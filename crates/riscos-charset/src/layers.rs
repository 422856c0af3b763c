//! Static override layers for the RISC OS alphabets.
//!
//! Every alphabet except UTF-8 starts with [`C1`], which fills the
//! 0x80–0x9F control region with the characters RISC OS draws there. The
//! remaining layers are per-alphabet corrections. The Arabic, Greek and
//! Hebrew layers only mark positions whose RISC OS glyphs have not been
//! mapped yet; filling them in needs no change beyond these entries.

use riscos_charset_core::OverrideLayer;

/// Characters in the 0x80–0x9F region.
///
/// 0x84 (the window close icon, U+1FBC0) and 0x87 have no single-character
/// mapping and are left unmapped.
pub const C1: OverrideLayer<'static> = OverrideLayer::new(
    "c1",
    &[
        (0x80, Some('\u{20AC}')), // euro
        (0x81, Some('\u{0174}')), // W circumflex
        (0x82, Some('\u{0175}')), // w circumflex
        (0x83, Some('\u{25F0}')), // resize icon
        (0x84, None), // close icon
        (0x85, Some('\u{0176}')), // Y circumflex
        (0x86, Some('\u{0177}')), // y circumflex
        (0x87, None),
        (0x88, Some('\u{21E6}')), // left arrow
        (0x89, Some('\u{21E8}')), // right arrow
        (0x8A, Some('\u{21E9}')), // down arrow
        (0x8B, Some('\u{21E7}')), // up arrow
        (0x8C, Some('\u{2026}')), // ellipsis
        (0x8D, Some('\u{2122}')), // trade mark
        (0x8E, Some('\u{2030}')), // per mille
        (0x8F, Some('\u{2022}')), // bullet
        (0x90, Some('\u{2018}')), // left single quote
        (0x91, Some('\u{2019}')), // right single quote
        (0x92, Some('\u{2039}')), // left single guillemet
        (0x93, Some('\u{203A}')), // right single guillemet
        (0x94, Some('\u{201C}')), // left double quote
        (0x95, Some('\u{201D}')), // right double quote
        (0x96, Some('\u{201E}')), // low double quote
        (0x97, Some('\u{2013}')), // en dash
        (0x98, Some('\u{2014}')), // em dash
        (0x99, Some('\u{2212}')), // minus
        (0x9A, Some('\u{0152}')), // OE ligature
        (0x9B, Some('\u{0153}')), // oe ligature
        (0x9C, Some('\u{2020}')), // dagger
        (0x9D, Some('\u{2021}')), // double dagger
        (0x9E, Some('\u{FB01}')), // fi ligature
        (0x9F, Some('\u{FB02}')), // fl ligature
    ],
);

/// Welsh letters over ISO-8859-1 (ISO-IR-182).
pub const WELSH: OverrideLayer<'static> = OverrideLayer::new(
    "welsh",
    &[
        (0xA8, Some('\u{1E80}')), // W grave
        (0xAA, Some('\u{1E82}')), // W acute
        (0xAC, Some('\u{1EF2}')), // Y grave
        (0xAF, Some('\u{0178}')), // Y diaeresis
        (0xB8, Some('\u{1E81}')), // w grave
        (0xBA, Some('\u{1E83}')), // w acute
        (0xBC, Some('\u{1EF3}')), // y grave
        (0xBD, Some('\u{1E84}')), // W diaeresis
        (0xBE, Some('\u{1E85}')), // w diaeresis
        (0xD0, Some('\u{0174}')), // W circumflex
        (0xDE, Some('\u{0176}')), // Y circumflex
        (0xF1, Some('\u{0175}')), // w circumflex
        (0xFE, Some('\u{0177}')), // y circumflex
    ],
);

/// Positions ISO-8859-3 leaves undefined but RISC OS populates
/// (see ECMA-94).
pub const LATIN3_FILL: OverrideLayer<'static> = OverrideLayer::new(
    "iso-8859-3-fill",
    &[
        (0xA5, Some('\u{00A5}')), // yen
        (0xAE, Some('\u{00AE}')), // registered
        (0xBE, Some('\u{00BE}')), // three quarters
        (0xC3, Some('\u{00C3}')), // A tilde
        (0xD0, Some('\u{00D0}')), // Eth
        (0xE3, Some('\u{00E3}')), // a tilde
        (0xF0, Some('\u{00F0}')), // eth
    ],
);

/// ISO-8859-6 positions still awaiting their RISC OS characters (ECMA-114).
pub const ARABIC_PENDING: OverrideLayer<'static> = OverrideLayer::new(
    "arabic-pending",
    &[
        (0xA1, None),
        (0xA2, None),
        (0xA3, None),
        (0xA5, None),
        (0xA6, None),
        (0xA7, None),
        (0xA8, None),
        (0xA9, None),
        (0xAA, None),
        (0xAB, None),
        (0xAE, None),
        (0xAF, None),
        (0xB0, None),
        (0xB1, None),
        (0xB2, None),
        (0xB3, None),
        (0xB4, None),
        (0xB5, None),
        (0xB6, None),
        (0xB7, None),
        (0xB8, None),
        (0xB9, None),
        (0xBA, None),
        (0xBC, None),
        (0xBD, None),
        (0xBE, None),
        (0xC0, None),
        (0xDB, None),
        (0xDC, None),
        (0xDD, None),
        (0xDE, None),
        (0xDF, None),
        (0xF3, None),
        (0xF4, None),
        (0xF5, None),
        (0xF6, None),
        (0xF7, None),
        (0xF8, None),
        (0xF9, None),
        (0xFA, None),
        (0xFB, None),
        (0xFC, None),
        (0xFD, None),
        (0xFE, None),
        (0xFF, None),
    ],
);

/// ISO-8859-7 positions still awaiting their RISC OS characters (ECMA-118).
pub const GREEK_PENDING: OverrideLayer<'static> = OverrideLayer::new(
    "greek-pending",
    &[
        (0xAA, None),
        (0xAE, None),
        (0xD2, None),
        (0xFF, None),
    ],
);

/// ISO-8859-8 positions still awaiting their RISC OS characters (ECMA-121).
pub const HEBREW_PENDING: OverrideLayer<'static> = OverrideLayer::new(
    "hebrew-pending",
    &[
        (0xA1, None),
        (0xBF, None),
        (0xC0, None),
        (0xC1, None),
        (0xC2, None),
        (0xC3, None),
        (0xC4, None),
        (0xC5, None),
        (0xC6, None),
        (0xC7, None),
        (0xC8, None),
        (0xC9, None),
        (0xCA, None),
        (0xCB, None),
        (0xCC, None),
        (0xCD, None),
        (0xCE, None),
        (0xCF, None),
        (0xD0, None),
        (0xD1, None),
        (0xD2, None),
        (0xD3, None),
        (0xD4, None),
        (0xD5, None),
        (0xD6, None),
        (0xD7, None),
        (0xD8, None),
        (0xD9, None),
        (0xDA, None),
        (0xDB, None),
        (0xDC, None),
        (0xDD, None),
        (0xDE, None),
        (0xFB, None),
        (0xFC, None),
        (0xFF, None),
    ],
);
