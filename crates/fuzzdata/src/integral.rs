use std::fmt::Display;

use crate::cursor::DataCursor;
use crate::error::RangeError;

mod sealed {
    pub trait Sealed {}
}

/// Integer types the range engine can decode.
///
/// Every implementor round-trips through a `u64` bit pattern: signed
/// values are sign-extended on the way in and truncated on the way out,
/// so the engine does all of its arithmetic in wrapping `u64`.
///
/// Sealed: implemented for `u8 u16 u32 u64 usize i8 i16 i32 i64 isize`.
pub trait Integral: sealed::Sealed + Copy + PartialOrd + Display {
    /// Smallest value of the type.
    const MIN: Self;
    /// Largest value of the type.
    const MAX: Self;
    /// Width of the type in bits. Bounds how many bytes one decode reads.
    const BITS: u32;

    /// Sign-extending conversion to a `u64` bit pattern.
    fn to_wrapping_u64(self) -> u64;

    /// Truncating conversion back from a `u64` bit pattern.
    fn from_wrapping_u64(value: u64) -> Self;
}

macro_rules! impl_integral {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Integral for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const BITS: u32 = <$t>::BITS;

            #[allow(clippy::cast_sign_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
            fn to_wrapping_u64(self) -> u64 {
                self as u64
            }

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::unnecessary_cast
            )]
            fn from_wrapping_u64(value: u64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_integral!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl DataCursor {
    /// Decode a value in `[min, max]` from the back of the buffer.
    ///
    /// # Algorithm
    ///
    /// ```text
    ///   range  = max - min                    (wrapping u64)
    ///   result = 0
    ///   while bits_read < T::BITS and range >> bits_read != 0:
    ///       result = result << 8 | pop_back()  (stop if empty)
    ///   if range != u64::MAX:
    ///       result %= range + 1
    ///   return min + result                   (wrapping, truncated to T)
    /// ```
    ///
    /// Only as many bytes as the range needs are read, at most
    /// `T::BITS / 8`. An exhausted buffer contributes nothing, so the
    /// result is `min`. The modulo reduction is slightly biased; that is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Unordered`] if `min > max`. Nothing is
    /// consumed in that case.
    pub fn try_consume_integral_in_range<T: Integral>(
        &mut self,
        min: T,
        max: T,
    ) -> Result<T, RangeError> {
        if min > max {
            return Err(RangeError::unordered(min, max));
        }

        let range = max.to_wrapping_u64().wrapping_sub(min.to_wrapping_u64());

        let mut result: u64 = 0;
        let mut offset: u32 = 0;
        while offset < T::BITS && (range >> offset) > 0 {
            let Some(byte) = self.pop_back() else {
                break;
            };
            result = (result << 8) | u64::from(byte);
            offset += 8;
        }

        // A full-width u64 range has no representable modulus.
        if range != u64::MAX {
            result %= range + 1;
        }

        Ok(T::from_wrapping_u64(
            min.to_wrapping_u64().wrapping_add(result),
        ))
    }

    /// Decode a value in `[min, max]` from the back of the buffer.
    ///
    /// See [`try_consume_integral_in_range`](Self::try_consume_integral_in_range)
    /// for the algorithm. Returns `min` once the buffer is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. That is a bug in the calling harness, not
    /// something a fuzz input can trigger.
    pub fn consume_integral_in_range<T: Integral>(&mut self, min: T, max: T) -> T {
        match self.try_consume_integral_in_range(min, max) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Decode a value over the full range of `T`.
    ///
    /// Returns `T::MIN` once the buffer is exhausted.
    pub fn consume_integral<T: Integral>(&mut self) -> T {
        self.consume_integral_in_range(T::MIN, T::MAX)
    }

    /// Pick one element of `values` using a ranged index decode.
    ///
    /// Returns `None`, consuming nothing, when `values` is empty. An
    /// exhausted buffer picks the first element.
    pub fn pick_value_in_slice<'a, T>(&mut self, values: &'a [T]) -> Option<&'a T> {
        let last = values.len().checked_sub(1)?;
        let index = self.consume_integral_in_range(0, last);
        values.get(index)
    }
}

macro_rules! named_integrals {
    ($($t:ty => $plain:ident, $ranged:ident;)*) => {
        impl DataCursor {$(
            #[doc = concat!("Decode a `", stringify!($t), "` over its full range.")]
            ///
            #[doc = concat!("Returns `", stringify!($t), "::MIN` once the buffer is exhausted.")]
            pub fn $plain(&mut self) -> $t {
                self.consume_integral::<$t>()
            }

            #[doc = concat!("Decode a `", stringify!($t), "` in `[min, max]`.")]
            ///
            /// Returns `min` once the buffer is exhausted.
            ///
            /// # Panics
            ///
            /// Panics if `min > max`.
            pub fn $ranged(&mut self, min: $t, max: $t) -> $t {
                self.consume_integral_in_range(min, max)
            }
        )*}
    };
}

named_integrals! {
    u8 => consume_u8, consume_u8_in_range;
    u16 => consume_u16, consume_u16_in_range;
    u32 => consume_u32, consume_u32_in_range;
    u64 => consume_u64, consume_u64_in_range;
    usize => consume_usize, consume_usize_in_range;
    i8 => consume_i8, consume_i8_in_range;
    i16 => consume_i16, consume_i16_in_range;
    i32 => consume_i32, consume_i32_in_range;
    i64 => consume_i64, consume_i64_in_range;
    isize => consume_isize, consume_isize_in_range;
}
