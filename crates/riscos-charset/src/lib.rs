//! riscos-charset: the RISC OS alphabets as bidirectional transcoders.
//!
//! This crate supplies the alphabet data and ties it to the engine in
//! riscos-charset-core, which it re-exports.
//!
//! # Architecture
//!
//! - **riscos-charset-core**: tables, layer composition, transcoder, registry
//! - **riscos-charset** (this crate): ISO-8859 base tables, RISC OS override
//!   layers, the alphabet catalogue, and [`build_registry`]
//!
//! # Example
//!
//! ```
//! use riscos_charset::{ErrorPolicy, build_registry};
//!
//! let registry = build_registry().unwrap();
//! let latin1 = registry.lookup("alphabet-101").unwrap();
//! let text = latin1.decode(b"\x8cdone\x99", ErrorPolicy::Strict).unwrap();
//! assert_eq!(text, "\u{2026}done\u{2212}");
//! ```

pub mod alphabets;
pub mod base;
pub mod coverage;
pub mod layers;

pub use alphabets::{
    ALPHABETS, Alphabet, AlphabetSource, alphabet_by_name, alphabet_by_number, alphabets,
    build_registry,
};
pub use base::BaseEncoding;
pub use coverage::{CHECKED_RANGE, Coverage, coverage};
pub use riscos_charset_core;
pub use riscos_charset_core::{
    CharTable, Codec, ConvertOptions, DecodeError, DecodeTable, ENCODE_REPLACEMENT_BYTE,
    EncodeError, EncodeTable, ErrorPolicy, OverrideLayer, REPLACEMENT_CHARACTER, Registry,
    RegistryError, TableBuilder, TranscodeError, Transcoder, UnknownPolicyError,
    parse_alphabet_key,
};
