//! Name and number lookup of transcoders.
//!
//! A [`Registry`] is populated once, then only read. Lookups are exact and
//! case-sensitive. Numeric keys follow the `alphabet-<N>` convention (also
//! accepted as `riscos-alphabet-<N>`), parsed by [`parse_alphabet_key`].

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::transcoder::Transcoder;

/// Prefixes that introduce a numeric alphabet key, longest first.
const ALPHABET_KEY_PREFIXES: [&str; 2] = ["riscos-alphabet-", "alphabet-"];

/// Parse `alphabet-<N>` or `riscos-alphabet-<N>` into `N`.
///
/// Returns `None` for other shapes, an empty or non-decimal suffix, or a
/// number that does not fit `u32`.
pub fn parse_alphabet_key(key: &str) -> Option<u32> {
    let digits = ALPHABET_KEY_PREFIXES
        .iter()
        .find_map(|prefix| key.strip_prefix(prefix))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Whether `key` uses a numeric alphabet prefix, valid number or not.
fn has_alphabet_prefix(key: &str) -> bool {
    ALPHABET_KEY_PREFIXES
        .iter()
        .any(|prefix| key.starts_with(prefix))
}

/// Transcoders keyed by name and by alphabet number.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    transcoders: Vec<Transcoder>,
    by_name: HashMap<String, usize>,
    by_number: HashMap<u32, usize>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transcoder.
    ///
    /// Fails without modifying the registry if the name or alphabet number
    /// is already taken.
    pub fn register(&mut self, transcoder: Transcoder) -> Result<&Transcoder, RegistryError> {
        if self.by_name.contains_key(transcoder.name()) {
            return Err(RegistryError::DuplicateName(transcoder.name().to_string()));
        }
        if self.by_number.contains_key(&transcoder.alphabet()) {
            return Err(RegistryError::DuplicateAlphabet(transcoder.alphabet()));
        }

        let index = self.transcoders.len();
        self.by_name.insert(transcoder.name().to_string(), index);
        self.by_number.insert(transcoder.alphabet(), index);
        self.transcoders.push(transcoder);
        Ok(&self.transcoders[index])
    }

    /// Exact, case-sensitive name lookup.
    pub fn lookup_by_name(&self, name: &str) -> Option<&Transcoder> {
        self.by_name.get(name).map(|&i| &self.transcoders[i])
    }

    /// Alphabet number lookup.
    pub fn lookup_by_number(&self, alphabet: u32) -> Option<&Transcoder> {
        self.by_number.get(&alphabet).map(|&i| &self.transcoders[i])
    }

    /// Resolve either key convention.
    ///
    /// Keys with an alphabet prefix resolve by number only; a malformed
    /// number is a miss. Anything else is an exact name lookup.
    pub fn lookup(&self, key: &str) -> Option<&Transcoder> {
        if has_alphabet_prefix(key) {
            return parse_alphabet_key(key).and_then(|n| self.lookup_by_number(n));
        }
        self.lookup_by_name(key)
    }

    /// Transcoders in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Transcoder> {
        self.transcoders.iter()
    }

    /// Number of registered transcoders.
    pub fn len(&self) -> usize {
        self.transcoders.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.transcoders.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Transcoder;
    type IntoIter = std::slice::Iter<'a, Transcoder>;

    fn into_iter(self) -> Self::IntoIter {
        self.transcoders.iter()
    }
}
