use riscos_charset::{Coverage, Registry, coverage};

use crate::cli::OutputFormat;
use crate::shared::resolve_alphabet;

pub fn run(registry: &Registry, alphabet: Option<&str>, format: &OutputFormat) -> Result<(), i32> {
    let reports = match alphabet {
        Some(key) => vec![Coverage::of(resolve_alphabet(registry, key)?)],
        None => coverage(registry),
    };

    match format {
        OutputFormat::Text => write_text(&reports),
        OutputFormat::Json => write_json(&reports),
    }
}

fn write_text(reports: &[Coverage]) -> Result<(), i32> {
    for report in reports {
        println!("Checking {} (alphabet {})", report.name, report.alphabet);
        match &report.unmapped {
            None => println!("  skipped: no byte table"),
            Some(bytes) => {
                for byte in bytes {
                    println!("  &{byte:02X}: no character mapping");
                }
            }
        }
    }
    Ok(())
}

fn coverage_to_json(report: &Coverage) -> serde_json::Value {
    let unmapped: Option<Vec<String>> = report
        .unmapped
        .as_ref()
        .map(|bytes| bytes.iter().map(|b| format!("0x{b:02X}")).collect());
    serde_json::json!({
        "number": report.alphabet,
        "name": report.name,
        "skipped": report.is_skipped(),
        "unmapped": unmapped,
    })
}

fn write_json(reports: &[Coverage]) -> Result<(), i32> {
    let entries: Vec<serde_json::Value> = reports.iter().map(coverage_to_json).collect();
    let json = serde_json::to_string_pretty(&entries).map_err(|e| {
        eprintln!("Error: failed to serialize JSON: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use riscos_charset::build_registry;

    #[test]
    fn json_lists_hex_bytes() {
        let registry = build_registry().unwrap();
        let report = Coverage::of(registry.lookup_by_number(101).unwrap());
        let value = coverage_to_json(&report);
        assert_eq!(value["name"], "riscos-latin1");
        assert_eq!(value["skipped"], false);
        assert_eq!(value["unmapped"], serde_json::json!(["0x84", "0x87"]));
    }

    #[test]
    fn json_for_skipped_alphabet_has_null_unmapped() {
        let registry = build_registry().unwrap();
        let report = Coverage::of(registry.lookup_by_number(111).unwrap());
        let value = coverage_to_json(&report);
        assert_eq!(value["skipped"], true);
        assert!(value["unmapped"].is_null());
    }
}
