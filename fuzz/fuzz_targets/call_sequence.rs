#![no_main]

use arbitrary::Arbitrary;
use fuzzdata::DataCursor;
use libfuzzer_sys::fuzz_target;

// Fuzz target: arbitrary call sequences are deterministic.
//
// Runs the same sequence against two cursors over the same bytes and
// requires identical transcripts, then drains both.
#[derive(Debug, Arbitrary)]
enum Call {
    Bytes(u8),
    RandomString(u8),
    U16,
    I32InRange(i32, i32),
    F64,
    F32InRange(i16, i16),
    Bool,
    Probability,
    Pick,
}

#[derive(Debug, Arbitrary)]
struct Input {
    calls: Vec<Call>,
    data: Vec<u8>,
}

fn apply(call: &Call, data: &mut DataCursor) -> String {
    match *call {
        Call::Bytes(n) => format!("{:?}", data.consume_bytes(n.into())),
        Call::RandomString(n) => format!("{:?}", data.consume_random_length_string(n.into())),
        Call::U16 => data.consume_u16().to_string(),
        Call::I32InRange(a, b) => data.consume_i32_in_range(a.min(b), a.max(b)).to_string(),
        Call::F64 => data.consume_f64().to_bits().to_string(),
        Call::F32InRange(a, b) => {
            let (min, max) = (f32::from(a.min(b)), f32::from(a.max(b)));
            data.consume_f32_in_range(min, max).to_bits().to_string()
        }
        Call::Bool => data.consume_bool().to_string(),
        Call::Probability => data.consume_probability_f32().to_bits().to_string(),
        Call::Pick => format!("{:?}", data.pick_value_in_slice(&[1, 2, 3])),
    }
}

fuzz_target!(|input: Input| {
    let mut first = DataCursor::new(input.data.clone());
    let mut second = DataCursor::new(input.data);

    for call in &input.calls {
        assert_eq!(apply(call, &mut first), apply(call, &mut second));
        assert_eq!(first.remaining_bytes(), second.remaining_bytes());
    }

    assert_eq!(first.consume_remaining_bytes(), second.consume_remaining_bytes());
});
