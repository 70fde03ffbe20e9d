#![no_main]

use arbitrary::Arbitrary;
use fuzzdata::DataCursor;
use libfuzzer_sys::fuzz_target;

// Fuzz target: ranged integer decodes on every width.
//
// Bounds come from the fuzzer, get ordered, and every decode must land
// inside them. Also checks that only the back of the buffer is consumed.
#[derive(Debug, Arbitrary)]
struct Input {
    u8_bounds: (u8, u8),
    u32_bounds: (u32, u32),
    u64_bounds: (u64, u64),
    i16_bounds: (i16, i16),
    i64_bounds: (i64, i64),
    isize_bounds: (isize, isize),
    data: Vec<u8>,
}

macro_rules! check {
    ($data:expr, $bounds:expr, $method:ident) => {{
        let (a, b) = $bounds;
        let (min, max) = (a.min(b), a.max(b));
        let value = $data.$method(min, max);
        assert!((min..=max).contains(&value));
    }};
}

fuzz_target!(|input: Input| {
    let mut data = DataCursor::new(input.data.clone());

    check!(data, input.u8_bounds, consume_u8_in_range);
    check!(data, input.u32_bounds, consume_u32_in_range);
    check!(data, input.u64_bounds, consume_u64_in_range);
    check!(data, input.i16_bounds, consume_i16_in_range);
    check!(data, input.i64_bounds, consume_i64_in_range);
    check!(data, input.isize_bounds, consume_isize_in_range);

    let left = data.remaining_bytes();
    assert_eq!(data.remaining_slice(), &input.data[..left]);

    // Unordered bounds are reported, never decoded.
    let (a, b) = input.i64_bounds;
    if a != b {
        assert!(data.try_consume_integral_in_range(a.max(b), a.min(b)).is_err());
    }
});
