use std::io::{Read, Write};
use std::path::Path;

use riscos_charset::{Registry, Transcoder};

/// Resolve an alphabet key to a registered transcoder.
///
/// Accepts everything [`Registry::lookup`] does, plus a bare alphabet
/// number such as `105`.
pub fn resolve_alphabet<'r>(registry: &'r Registry, key: &str) -> Result<&'r Transcoder, i32> {
    let found = match key.parse::<u32>() {
        Ok(number) => registry.lookup_by_number(number),
        Err(_) => registry.lookup(key),
    };
    found.ok_or_else(|| {
        eprintln!("Error: unknown alphabet: '{key}'");
        1
    })
}

/// Read the whole input, from `file` when given, otherwise from stdin.
pub fn read_input(file: Option<&Path>) -> Result<Vec<u8>, i32> {
    match file {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: file not found: {}", path.display());
                return Err(1);
            }
            std::fs::read(path).map_err(|e| {
                eprintln!("Error: failed to read {}: {e}", path.display());
                1
            })
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf).map_err(|e| {
                eprintln!("Error: failed to read standard input: {e}");
                1
            })?;
            Ok(buf)
        }
    }
}

/// Write converted output to stdout.
pub fn write_output(bytes: &[u8]) -> Result<(), i32> {
    let mut out = std::io::stdout().lock();
    out.write_all(bytes).and_then(|()| out.flush()).map_err(|e| {
        eprintln!("Error: failed to write output: {e}");
        1
    })
}
