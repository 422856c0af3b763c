//! Integration tests for layered table construction and conversion.

use riscos_charset_core::*;

static C1_LIKE: [(u8, Option<char>); 4] = [
    (0x80, Some('€')),
    (0x81, Some('Ŵ')),
    (0x84, None),
    (0x87, None),
];

static WELSH_LIKE: [(u8, Option<char>); 2] = [(0xD0, Some('Ŵ')), (0xF1, Some('ŵ'))];

fn layered() -> Transcoder {
    let table = TableBuilder::new(DecodeTable::latin1())
        .layer(&OverrideLayer::new("c1", &C1_LIKE))
        .layer(&OverrideLayer::new("welsh", &WELSH_LIKE))
        .build();
    Transcoder::new(110, "layered", table)
}

#[test]
fn conflicting_layers_last_wins_for_every_pair() {
    let candidates = ['x', 'y', '€', 'Ω'];
    for &first in &candidates {
        for &second in &candidates {
            let a = [(0x80, Some(first))];
            let b = [(0x80, Some(second))];
            let table = build(
                DecodeTable::latin1(),
                &[OverrideLayer::new("a", &a), OverrideLayer::new("b", &b)],
            );
            assert_eq!(table.decode_table().get(0x80), Some(second));
        }
    }
}

#[test]
fn unmapped_layer_entry_beats_mapped_base() {
    let t = layered();
    assert!(t.decode(&[0x84], ErrorPolicy::Strict).is_err());
    assert_eq!(t.decode(&[0x84], ErrorPolicy::Replace).unwrap(), "\u{FFFD}");
}

#[test]
fn duplicate_char_encodes_to_highest_byte() {
    let t = layered();
    assert_eq!(t.decode(&[0x81], ErrorPolicy::Strict).unwrap(), "Ŵ");
    assert_eq!(t.decode(&[0xD0], ErrorPolicy::Strict).unwrap(), "Ŵ");
    assert_eq!(t.encode("Ŵ", ErrorPolicy::Strict).unwrap(), [0xD0]);
}

#[test]
fn mapped_bytes_round_trip_to_canonical_byte() {
    let t = layered();
    let decode = t.decode_table().unwrap();
    for (byte, slot) in decode.iter() {
        let Some(ch) = slot else { continue };
        let canonical = decode
            .iter()
            .filter(|&(_, other)| other == Some(ch))
            .map(|(b, _)| b)
            .max()
            .unwrap();
        let text = t.decode(&[byte], ErrorPolicy::Strict).unwrap();
        assert_eq!(t.encode(&text, ErrorPolicy::Strict).unwrap(), [canonical]);
    }
}

#[test]
fn replace_never_shortens_output() {
    let t = layered();
    let input: Vec<u8> = (0..=255).collect();
    let text = t.decode(&input, ErrorPolicy::Replace).unwrap();
    assert_eq!(text.chars().count(), input.len());
}

#[test]
fn ignore_drops_only_unmapped_bytes() {
    let t = layered();
    assert_eq!(t.decode(&[0x41, 0x87, 0x42], ErrorPolicy::Ignore).unwrap(), "AB");
}

#[test]
fn encode_is_one_byte_per_char() {
    let t = layered();
    let text = "Ŵŵ€ abc ÿ";
    let bytes = t.encode(text, ErrorPolicy::Replace).unwrap();
    assert_eq!(bytes.len(), text.chars().count());
}

#[test]
fn transcoders_are_read_concurrently() {
    let mut registry = Registry::new();
    registry.register(layered()).unwrap();
    let registry = &registry;

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(move || {
                let t = registry.lookup("alphabet-110").unwrap();
                for _ in 0..100 {
                    assert_eq!(t.decode(b"\x80A", ErrorPolicy::Strict).unwrap(), "€A");
                }
            });
        }
    });
}
