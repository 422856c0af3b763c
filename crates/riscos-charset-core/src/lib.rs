//! riscos-charset-core: table-driven single-byte transcoding.
//!
//! This crate provides the building blocks shared by every alphabet:
//! 256-slot decode tables, ordered override layers, the table builder that
//! composes them and derives the encode table, the [`Transcoder`] with its
//! three error policies, and the name/number [`Registry`]. It carries no
//! alphabet data of its own.

pub mod error;
pub mod policy;
pub mod registry;
pub mod table;
pub mod transcoder;

pub use error::{DecodeError, EncodeError, RegistryError, TranscodeError, UnknownPolicyError};
pub use policy::{ConvertOptions, ENCODE_REPLACEMENT_BYTE, ErrorPolicy};
pub use registry::{Registry, parse_alphabet_key};
pub use table::{
    CharTable, DecodeTable, EncodeTable, OverrideLayer, REPLACEMENT_CHARACTER, TableBuilder, build,
};
pub use transcoder::{Codec, Transcoder};
