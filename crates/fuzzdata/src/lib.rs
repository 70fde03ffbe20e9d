#![warn(clippy::pedantic)]

//! Deterministic decoding of fuzzer-supplied bytes into typed values.
//!
//! A [`DataCursor`] wraps one fuzz input and hands out integers, floats,
//! booleans, byte strings and escaped strings on demand. The same buffer
//! driven by the same call sequence always yields the same values.
//!
//! ```text
//!   front ──►                                     ◄── back
//!   ┌──────────────────────────────────────────────────────┐
//!   │ bytes / strings consume here   numbers consume here  │
//!   └──────────────────────────────────────────────────────┘
//! ```
//!
//! Byte and string extraction eat the buffer from the front while every
//! numeric decode eats it from the back, so a fuzzer inserting or
//! deleting a byte inside a string does not shift every number decoded
//! after it.
//!
//! # Example
//!
//! ```rust
//! use fuzzdata::DataCursor;
//!
//! let mut data = DataCursor::new(vec![0xba, 0xad, 0xf0, 0x0d, 0xde, 0xad, 0xbe, 0xef]);
//!
//! assert_eq!(data.consume_u32(), 0xefbe_adde);
//! assert_eq!(data.consume_bytes(2), vec![0xba, 0xad]);
//! assert_eq!(data.remaining_bytes(), 2);
//! ```

pub mod cursor;
pub mod error;
pub mod float;
pub mod integral;
pub mod probability;
pub mod string;

pub use cursor::DataCursor;
pub use error::RangeError;
pub use float::FloatingPoint;
pub use integral::Integral;
