//! The RISC OS alphabet catalogue and registry construction.
//!
//! Each [`Alphabet`] names its RISC OS alphabet number, its encoding name
//! (`riscos-<territory name>`), and either a base ISO-8859 part with the
//! override layers applied on top of it, or the UTF-8 pass-through.

use riscos_charset_core::{OverrideLayer, Registry, RegistryError, TableBuilder, Transcoder};

use crate::base::BaseEncoding;
use crate::layers::{ARABIC_PENDING, C1, GREEK_PENDING, HEBREW_PENDING, LATIN3_FILL, WELSH};

/// Where an alphabet's mapping comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetSource {
    /// A base table with layers applied in order.
    Table {
        /// Starting table.
        base: BaseEncoding,
        /// Layers applied over `base`, later entries winning.
        layers: &'static [OverrideLayer<'static>],
    },
    /// UTF-8 with no remapping.
    Utf8,
}

/// One entry of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    /// RISC OS alphabet number.
    pub number: u32,
    /// Encoding name.
    pub name: &'static str,
    /// Mapping source.
    pub source: AlphabetSource,
}

const fn table(
    number: u32,
    name: &'static str,
    base: BaseEncoding,
    layers: &'static [OverrideLayer<'static>],
) -> Alphabet {
    Alphabet {
        number,
        name,
        source: AlphabetSource::Table { base, layers },
    }
}

/// Every alphabet, in alphabet-number order. Alphabet 100 (BBC font) is
/// not provided.
pub static ALPHABETS: [Alphabet; 16] = [
    table(101, "riscos-latin1", BaseEncoding::Iso8859_1, &[C1]),
    table(102, "riscos-latin2", BaseEncoding::Iso8859_2, &[C1]),
    table(103, "riscos-latin3", BaseEncoding::Iso8859_3, &[C1, LATIN3_FILL]),
    table(104, "riscos-latin4", BaseEncoding::Iso8859_4, &[C1]),
    table(105, "riscos-cyrillic", BaseEncoding::Iso8859_5, &[C1]),
    table(106, "riscos-arabic", BaseEncoding::Iso8859_6, &[C1, ARABIC_PENDING]),
    table(107, "riscos-greek", BaseEncoding::Iso8859_7, &[C1, GREEK_PENDING]),
    table(108, "riscos-hebrew", BaseEncoding::Iso8859_8, &[C1, HEBREW_PENDING]),
    table(109, "riscos-latin5", BaseEncoding::Iso8859_9, &[C1]),
    // ISO-IR-182
    table(110, "riscos-welsh", BaseEncoding::Iso8859_1, &[C1, WELSH]),
    // No hyphen in "utf8", after the other alphabet names.
    Alphabet {
        number: 111,
        name: "riscos-utf8",
        source: AlphabetSource::Utf8,
    },
    table(112, "riscos-latin9", BaseEncoding::Iso8859_15, &[C1]),
    table(113, "riscos-latin6", BaseEncoding::Iso8859_10, &[C1]),
    table(114, "riscos-latin7", BaseEncoding::Iso8859_13, &[C1]),
    table(115, "riscos-latin8", BaseEncoding::Iso8859_14, &[C1]),
    table(116, "riscos-latin10", BaseEncoding::Iso8859_16, &[C1]),
];

impl Alphabet {
    /// Label of the base table, or `UTF-8` for the pass-through.
    pub fn base_label(&self) -> &'static str {
        match self.source {
            AlphabetSource::Table { base, .. } => base.label(),
            AlphabetSource::Utf8 => "UTF-8",
        }
    }

    /// Names of the layers applied, in order.
    pub fn layer_names(&self) -> Vec<&'static str> {
        match self.source {
            AlphabetSource::Table { layers, .. } => layers.iter().map(|l| l.name()).collect(),
            AlphabetSource::Utf8 => Vec::new(),
        }
    }

    /// Build the transcoder for this alphabet.
    pub fn transcoder(&self) -> Transcoder {
        match self.source {
            AlphabetSource::Table { base, layers } => {
                let table = TableBuilder::new(base.decode_table()).layers(layers).build();
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    alphabet = self.number,
                    name = self.name,
                    base = base.label(),
                    layers = ?self.layer_names(),
                    collisions = table.collisions(),
                    "built alphabet table"
                );
                Transcoder::new(self.number, self.name, table)
            }
            AlphabetSource::Utf8 => Transcoder::utf8(self.number, self.name),
        }
    }
}

/// The alphabet catalogue.
pub fn alphabets() -> &'static [Alphabet] {
    &ALPHABETS
}

/// Find a catalogue entry by exact name.
pub fn alphabet_by_name(name: &str) -> Option<&'static Alphabet> {
    ALPHABETS.iter().find(|a| a.name == name)
}

/// Find a catalogue entry by alphabet number.
pub fn alphabet_by_number(number: u32) -> Option<&'static Alphabet> {
    ALPHABETS.iter().find(|a| a.number == number)
}

/// Build every alphabet and register it by name and number.
///
/// Call once at startup and share the result; nothing is registered
/// globally.
pub fn build_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    for alphabet in &ALPHABETS {
        registry.register(alphabet.transcoder())?;
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(alphabets = registry.len(), "alphabet registry built");
    Ok(registry)
}
