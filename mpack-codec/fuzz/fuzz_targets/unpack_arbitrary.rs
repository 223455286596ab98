#![no_main]

use libfuzzer_sys::fuzz_target;
use mpack_codec::Unpacker;

fuzz_target!(|data: &[u8]| {
    let Ok(mut unpacker) = Unpacker::new(data) else {
        return;
    };
    loop {
        match unpacker.next() {
            Ok(_) => continue,
            Err(_) => break,
        }
    }
});
