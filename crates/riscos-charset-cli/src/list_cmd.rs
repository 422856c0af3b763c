use riscos_charset::{Alphabet, alphabets};

use crate::cli::OutputFormat;

pub fn run(format: &OutputFormat) -> Result<(), i32> {
    match format {
        OutputFormat::Text => write_text(alphabets()),
        OutputFormat::Json => write_json(alphabets()),
    }
}

fn write_text(alphabets: &[Alphabet]) -> Result<(), i32> {
    println!("number\tname\tbase\tlayers");
    for alphabet in alphabets {
        println!(
            "{}\t{}\t{}\t{}",
            alphabet.number,
            alphabet.name,
            alphabet.base_label(),
            alphabet.layer_names().join(",")
        );
    }
    Ok(())
}

fn alphabet_to_json(alphabet: &Alphabet) -> serde_json::Value {
    serde_json::json!({
        "number": alphabet.number,
        "name": alphabet.name,
        "base": alphabet.base_label(),
        "layers": alphabet.layer_names(),
    })
}

fn write_json(alphabets: &[Alphabet]) -> Result<(), i32> {
    let entries: Vec<serde_json::Value> = alphabets.iter().map(alphabet_to_json).collect();
    let json = serde_json::to_string_pretty(&entries).map_err(|e| {
        eprintln!("Error: failed to serialize JSON: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}
