#![no_main]

use cbot::dump;
use cbot::outline::{self, OutlineConfig};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Read the dump; any token sequence it yields must outline without panicking
        if let Ok(tokens) = dump::read(s) {
            let _ = outline::outline(&tokens, &OutlineConfig::default());

            // Recovery from every position must stay on the stream
            let mut cursor = tokens.cursor();
            while !cursor.is_at_end() {
                let mut probe = cursor;
                probe.skip_class_or_function();
                assert!(probe.position() < tokens.len());
                cursor.advance();
            }
        }
    }
});
