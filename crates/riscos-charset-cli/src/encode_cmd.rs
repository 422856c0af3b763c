use std::path::Path;

use riscos_charset::{ConvertOptions, Registry};

use crate::cli::PolicyArg;
use crate::shared::{read_input, resolve_alphabet, write_output};

pub fn run(
    registry: &Registry,
    alphabet: &str,
    errors: Option<PolicyArg>,
    file: Option<&Path>,
) -> Result<(), i32> {
    let transcoder = resolve_alphabet(registry, alphabet)?;
    let policy = errors
        .map(PolicyArg::to_policy)
        .unwrap_or(ConvertOptions::default().encode_policy);
    let input = read_input(file)?;
    let text = String::from_utf8(input).map_err(|e| {
        eprintln!(
            "Error: input is not valid UTF-8 (byte offset {})",
            e.utf8_error().valid_up_to()
        );
        1
    })?;

    tracing::debug!(
        alphabet = transcoder.alphabet(),
        policy = policy.as_str(),
        chars = text.chars().count(),
        "encoding"
    );

    let bytes = transcoder.encode(&text, policy).map_err(|e| {
        eprintln!("Error: {}: {e}", transcoder.name());
        1
    })?;
    write_output(&bytes)
}
