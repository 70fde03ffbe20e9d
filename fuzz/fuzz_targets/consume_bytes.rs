#![no_main]

use fuzzdata::DataCursor;
use libfuzzer_sys::fuzz_target;

// Fuzz target: front extraction length law.
//
// The first byte picks the request sizes; every request must return
// min(n, remaining) bytes and shrink the view by exactly that much.
fuzz_target!(|input: &[u8]| {
    let Some((&step, rest)) = input.split_first() else {
        return;
    };
    let mut data = DataCursor::new(rest);
    let n = usize::from(step % 17);

    let mut seen = Vec::new();
    while !data.is_empty() {
        let before = data.remaining_bytes();
        let taken = data.consume_bytes(n);
        assert_eq!(taken.len(), n.min(before));
        assert_eq!(data.remaining_bytes(), before - taken.len());
        seen.extend_from_slice(&taken);
        if n == 0 {
            break;
        }
    }

    assert_eq!(seen, &rest[..seen.len()]);
});
