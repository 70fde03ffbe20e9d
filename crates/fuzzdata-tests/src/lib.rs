#![warn(clippy::pedantic)]

//! Shared fixtures for the fuzzdata integration suites and benches.

use fuzzdata::DataCursor;

/// The eight-byte input most vector tests start from.
pub const DEADBEEF: [u8; 8] = [0xba, 0xad, 0xf0, 0x0d, 0xde, 0xad, 0xbe, 0xef];

/// Seed shared by property loops so failures reproduce.
pub const SEED: u64 = 0x00f0_220d;

/// A random input of `0..max_len` bytes.
pub fn random_input(rng: &mut fastrand::Rng, max_len: usize) -> Vec<u8> {
    let len = rng.usize(0..max_len);
    std::iter::repeat_with(|| rng.u8(..)).take(len).collect()
}

/// One decode call, chosen at random by the property suites so that front
/// and back consumption interleave in every order.
#[derive(Clone, Copy, Debug)]
pub enum Call {
    Bytes(usize),
    RandomString(usize),
    U8,
    I16InRange(i16, i16),
    U64,
    F32InRange(f32, f32),
    F64,
    Bool,
    Probability,
}

impl Call {
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        match rng.u8(0..9) {
            0 => Self::Bytes(rng.usize(0..6)),
            1 => Self::RandomString(rng.usize(0..12)),
            2 => Self::U8,
            3 => {
                let a = rng.i16(..);
                let b = rng.i16(..);
                Self::I16InRange(a.min(b), a.max(b))
            }
            4 => Self::U64,
            5 => Self::F32InRange(-1.5, rng.f32() * 1000.0),
            6 => Self::F64,
            7 => Self::Bool,
            _ => Self::Probability,
        }
    }

    /// Run the call and render its result for comparison.
    pub fn apply(self, data: &mut DataCursor) -> String {
        match self {
            Self::Bytes(n) => format!("{:?}", data.consume_bytes(n)),
            Self::RandomString(n) => format!("{:?}", data.consume_random_length_string(n)),
            Self::U8 => data.consume_u8().to_string(),
            Self::I16InRange(min, max) => data.consume_i16_in_range(min, max).to_string(),
            Self::U64 => data.consume_u64().to_string(),
            Self::F32InRange(min, max) => data.consume_f32_in_range(min, max).to_string(),
            Self::F64 => data.consume_f64().to_string(),
            Self::Bool => data.consume_bool().to_string(),
            Self::Probability => data.consume_probability_f64().to_string(),
        }
    }
}
