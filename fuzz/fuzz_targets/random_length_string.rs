#![no_main]

use fuzzdata::DataCursor;
use libfuzzer_sys::fuzz_target;

// Fuzz target: escaped variable-length strings.
//
// The result never exceeds the bound, the raw and lossy forms consume the
// same bytes, and the whole input drains without looping forever.
fuzz_target!(|input: &[u8]| {
    let Some((&bound, rest)) = input.split_first() else {
        return;
    };
    let bound = usize::from(bound);

    let mut raw = DataCursor::new(rest);
    let mut text = DataCursor::new(rest);
    while !raw.is_empty() {
        let before = raw.remaining_bytes();
        let bytes = raw.consume_random_length_bytes(bound);
        assert!(bytes.len() <= bound);

        text.consume_random_length_string(bound);
        assert_eq!(raw.remaining_bytes(), text.remaining_bytes());

        if before == raw.remaining_bytes() {
            // Only a zero bound can make no progress.
            assert_eq!(bound, 0);
            break;
        }
    }
});
