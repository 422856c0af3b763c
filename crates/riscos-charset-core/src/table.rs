//! Decode/encode tables and the layered table builder.
//!
//! A [`DecodeTable`] holds one slot per byte value; a slot is either a
//! mapped character or unmapped. [`TableBuilder`] starts from a base table,
//! applies [`OverrideLayer`]s in order (later layers win), and inverts the
//! result into an [`EncodeTable`].

use std::collections::HashMap;

/// U+FFFD, the sentinel that stands for "no mapping" at the API boundary.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Byte value → character mapping for one single-byte encoding.
///
/// Index `i` always describes byte value `i`. `None` means the byte has no
/// character; the replacement character is never stored as a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeTable {
    slots: [Option<char>; 256],
}

impl DecodeTable {
    /// Create a table from explicit slots.
    ///
    /// Any slot holding [`REPLACEMENT_CHARACTER`] is stored as unmapped.
    pub fn from_slots(slots: [Option<char>; 256]) -> Self {
        Self {
            slots: slots.map(normalize),
        }
    }

    /// Create a table from one character per byte, treating
    /// [`REPLACEMENT_CHARACTER`] as unmapped.
    ///
    /// This is the shape produced by decoding all 256 byte values with a
    /// replacing single-byte decoder.
    pub fn from_chars(chars: [char; 256]) -> Self {
        Self {
            slots: chars.map(|c| normalize(Some(c))),
        }
    }

    /// ISO-8859-1: every byte decodes to the code point of the same value.
    pub fn latin1() -> Self {
        let mut slots = [None; 256];
        for (byte, slot) in slots.iter_mut().enumerate() {
            *slot = Some(char::from(byte as u8));
        }
        Self { slots }
    }

    /// A table with every byte unmapped.
    pub fn empty() -> Self {
        Self { slots: [None; 256] }
    }

    /// Look up the character for a byte.
    pub fn get(&self, byte: u8) -> Option<char> {
        self.slots[byte as usize]
    }

    /// Replace the slot for a byte. Writing [`REPLACEMENT_CHARACTER`] unmaps it.
    pub fn set(&mut self, byte: u8, slot: Option<char>) {
        self.slots[byte as usize] = normalize(slot);
    }

    /// Whether the byte has a character mapping.
    pub fn is_mapped(&self, byte: u8) -> bool {
        self.slots[byte as usize].is_some()
    }

    /// Iterate `(byte, slot)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Option<char>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(byte, &slot)| (byte as u8, slot))
    }

    /// Bytes in `range` that have no mapping, in ascending order.
    pub fn unmapped_in(&self, range: std::ops::RangeInclusive<u8>) -> Vec<u8> {
        range.filter(|&b| !self.is_mapped(b)).collect()
    }

    /// Render the table as 256 characters, unmapped slots as U+FFFD.
    pub fn to_chars(&self) -> [char; 256] {
        self.slots.map(|slot| slot.unwrap_or(REPLACEMENT_CHARACTER))
    }
}

fn normalize(slot: Option<char>) -> Option<char> {
    slot.filter(|&c| c != REPLACEMENT_CHARACTER)
}

/// Character → byte value mapping derived from a [`DecodeTable`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodeTable {
    map: HashMap<char, u8>,
}

impl EncodeTable {
    /// Invert a decode table.
    ///
    /// Bytes are visited in ascending order and each mapped byte overwrites
    /// any earlier byte with the same character, so a character that several
    /// bytes decode to encodes to the highest of those bytes. Unmapped slots
    /// contribute nothing.
    pub fn invert(decode: &DecodeTable) -> Self {
        Self::invert_counting(decode).0
    }

    /// Like [`invert`](Self::invert), also returning how many earlier
    /// mappings were overwritten.
    pub fn invert_counting(decode: &DecodeTable) -> (Self, usize) {
        let mut map = HashMap::with_capacity(256);
        let mut overwritten = 0;
        for (byte, slot) in decode.iter() {
            if let Some(ch) = slot {
                if map.insert(ch, byte).is_some() {
                    overwritten += 1;
                }
            }
        }
        (Self { map }, overwritten)
    }

    /// Look up the byte for a character.
    pub fn get(&self, ch: char) -> Option<u8> {
        self.map.get(&ch).copied()
    }

    /// Number of encodable characters.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no character is encodable.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether the character has a byte mapping.
    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }
}

/// A named, ordered patch applied on top of a base table.
///
/// Each entry is `(byte, slot)`; a `None` slot explicitly unmaps the byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideLayer<'a> {
    name: &'a str,
    entries: &'a [(u8, Option<char>)],
}

impl<'a> OverrideLayer<'a> {
    /// Create a layer. Usable in `const`/`static` items.
    pub const fn new(name: &'a str, entries: &'a [(u8, Option<char>)]) -> Self {
        Self { name, entries }
    }

    /// The layer's name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The layer's entries, in declaration order.
    pub fn entries(&self) -> &'a [(u8, Option<char>)] {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the layer has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write this layer's entries into `table`.
    pub fn apply_to(&self, table: &mut DecodeTable) {
        for &(byte, slot) in self.entries {
            table.set(byte, slot);
        }
    }
}

/// A finished decode table together with its derived encode table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharTable {
    decode: DecodeTable,
    encode: EncodeTable,
    collisions: usize,
}

impl CharTable {
    /// Build from a decode table, deriving the encode table.
    pub fn from_decode(decode: DecodeTable) -> Self {
        let (encode, collisions) = EncodeTable::invert_counting(&decode);
        Self {
            decode,
            encode,
            collisions,
        }
    }

    /// The decode side.
    pub fn decode_table(&self) -> &DecodeTable {
        &self.decode
    }

    /// The encode side.
    pub fn encode_table(&self) -> &EncodeTable {
        &self.encode
    }

    /// How many bytes lost their encode mapping to a higher byte that
    /// decodes to the same character.
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}

/// Composes a base table with override layers.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    table: DecodeTable,
}

impl TableBuilder {
    /// Start from a copy of `base`.
    pub fn new(base: DecodeTable) -> Self {
        Self { table: base }
    }

    /// Apply one layer on top of everything applied so far.
    pub fn layer(mut self, layer: &OverrideLayer<'_>) -> Self {
        layer.apply_to(&mut self.table);
        self
    }

    /// Apply layers in order.
    pub fn layers<'l, 'a: 'l>(
        mut self,
        layers: impl IntoIterator<Item = &'l OverrideLayer<'a>>,
    ) -> Self {
        for layer in layers {
            layer.apply_to(&mut self.table);
        }
        self
    }

    /// The decode table as composed so far.
    pub fn decode_table(&self) -> &DecodeTable {
        &self.table
    }

    /// Finish, deriving the encode table.
    pub fn build(self) -> CharTable {
        CharTable::from_decode(self.table)
    }
}

/// Apply `layers` to `base` in order and derive the encode table.
pub fn build(base: DecodeTable, layers: &[OverrideLayer<'_>]) -> CharTable {
    TableBuilder::new(base).layers(layers).build()
}
