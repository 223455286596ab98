#![no_main]

use libfuzzer_sys::fuzz_target;
use mpack_codec::{Item, Packer, Unpacker};

/// Turns an arbitrary byte stream into a small sequence of items by reading
/// a selector byte followed by however many payload bytes that kind needs.
/// Short on input simply means a short sequence; nothing here can panic.
fn items_from(data: &[u8]) -> Vec<(u8, u64, i64)> {
    let mut items = Vec::new();
    let mut pos = 0;
    while pos < data.len() && items.len() < 64 {
        let selector = data[pos] % 4;
        pos += 1;
        let mut raw = [0u8; 8];
        let n = (data.len() - pos).min(8);
        raw[..n].copy_from_slice(&data[pos..pos + n]);
        pos += n;
        let v = u64::from_le_bytes(raw);
        items.push((selector, v, v as i64));
    }
    items
}

fuzz_target!(|data: &[u8]| {
    let items = items_from(data);
    let mut buf = [0u8; 4096];
    let mut packer = match Packer::new(&mut buf) {
        Ok(p) => p,
        Err(_) => return,
    };

    let mut packed_any = false;
    for &(selector, v, s) in &items {
        let result = match selector {
            0 => packer.pack_uint(v),
            1 => packer.pack_int(s),
            2 => packer.pack_bool(v % 2 == 0),
            _ => packer.pack_str(&v.to_le_bytes()),
        };
        if result.is_err() {
            break;
        }
        packed_any = true;
    }
    if !packed_any {
        return;
    }

    let written = packer.written().len();
    let mut unpacker = Unpacker::new(&buf[..written]).unwrap();
    while let Ok(item) = unpacker.next() {
        match item {
            Item::PositiveInt(_) | Item::NegativeInt(_) | Item::Bool(_) | Item::Str(_) => {}
            other => panic!("unexpected item kind round-tripped: {other}"),
        }
    }
});
