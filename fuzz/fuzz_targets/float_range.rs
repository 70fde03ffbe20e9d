#![no_main]

use arbitrary::Arbitrary;
use fuzzdata::DataCursor;
use libfuzzer_sys::fuzz_target;

// Fuzz target: ranged and unranged float decodes.
//
// Catches bugs in:
// - Ranges wider than f64::MAX (the split path)
// - Rounding past the upper bound
// - NaN or infinite bounds slipping through
#[derive(Debug, Arbitrary)]
struct Input {
    a: f64,
    b: f64,
    c: f32,
    d: f32,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let mut data = DataCursor::new(input.data);

    if input.a.is_finite() && input.b.is_finite() {
        let (min, max) = (input.a.min(input.b), input.a.max(input.b));
        let value = data.consume_f64_in_range(min, max);
        assert!((min..=max).contains(&value), "{value} not in [{min}, {max}]");
    } else {
        // NaN and infinite bounds are rejected, never decoded.
        assert!(data.try_consume_float_in_range(input.a, input.b).is_err());
    }

    if input.c.is_finite() && input.d.is_finite() {
        let (min, max) = (input.c.min(input.d), input.c.max(input.d));
        let value = data.consume_f32_in_range(min, max);
        assert!((min..=max).contains(&value), "{value} not in [{min}, {max}]");
    }

    assert!(data.consume_f64().is_finite());
    assert!(data.consume_f32().is_finite());
    assert!((0.0..=1.0).contains(&data.consume_probability_f64()));
});
