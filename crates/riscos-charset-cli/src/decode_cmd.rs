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
        .unwrap_or(ConvertOptions::default().decode_policy);
    let input = read_input(file)?;

    tracing::debug!(
        alphabet = transcoder.alphabet(),
        policy = policy.as_str(),
        bytes = input.len(),
        "decoding"
    );

    let text = transcoder.decode(&input, policy).map_err(|e| {
        eprintln!("Error: {}: {e}", transcoder.name());
        1
    })?;
    write_output(text.as_bytes())
}
