use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::cursor::DataCursor;
use crate::error::RangeError;

mod sealed {
    pub trait Sealed {}
}

/// Floating-point types the range engine can decode.
///
/// Each width pairs with the unsigned integer of the same width for its
/// probability draw: `f32` with `u32`, `f64` with `u64`.
///
/// Sealed: implemented for `f32` and `f64`.
pub trait FloatingPoint:
    sealed::Sealed
    + Copy
    + PartialOrd
    + Display
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Largest finite value of the type.
    const MAX: Self;
    const ZERO: Self;
    const TWO: Self;

    /// `false` for NaN and both infinities.
    fn is_finite(self) -> bool;

    /// Draw a value in `[0.0, 1.0]` of this width.
    fn consume_probability(data: &mut DataCursor) -> Self;
}

impl sealed::Sealed for f32 {}

impl FloatingPoint for f32 {
    const MAX: Self = f32::MAX;
    const ZERO: Self = 0.0;
    const TWO: Self = 2.0;

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn consume_probability(data: &mut DataCursor) -> Self {
        data.consume_probability_f32()
    }
}

impl sealed::Sealed for f64 {}

impl FloatingPoint for f64 {
    const MAX: Self = f64::MAX;
    const ZERO: Self = 0.0;
    const TWO: Self = 2.0;

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn consume_probability(data: &mut DataCursor) -> Self {
        data.consume_probability_f64()
    }
}

impl DataCursor {
    /// Decode a value in `[min, max]` from the back of the buffer.
    ///
    /// # Algorithm
    ///
    /// A range wider than `T::MAX` that straddles zero cannot have its
    /// width computed directly. It is split in two halves first:
    ///
    /// ```text
    ///   if max > 0 and min < 0 and max > min + T::MAX:
    ///       width = max / 2 - min / 2
    ///       base  = min + width   if consume_bool()
    ///               min           otherwise
    ///   else:
    ///       width = max - min
    ///       base  = min
    ///   return base + width * consume_probability()
    /// ```
    ///
    /// `max / 2 - min / 2` is evaluated exactly in that form; it is not
    /// bit-identical to `(max - min) / 2` near the limits of the type.
    /// A sum that rounds above `max` is pulled back to `max`.
    ///
    /// An exhausted buffer yields `min`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Unordered`] if `min > max` or either bound is
    /// NaN, and [`RangeError::NonFinite`] if a bound is infinite. Nothing
    /// is consumed in either case.
    pub fn try_consume_float_in_range<T: FloatingPoint>(
        &mut self,
        min: T,
        max: T,
    ) -> Result<T, RangeError> {
        if !matches!(min.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal)) {
            return Err(RangeError::unordered(min, max));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::non_finite(min, max));
        }

        let mut result = min;
        let width;
        if max > T::ZERO && min < T::ZERO && max > min + T::MAX {
            width = max / T::TWO - min / T::TWO;
            if self.consume_bool() {
                result += width;
            }
        } else {
            width = max - min;
        }

        let value = result + width * self.consume_probability::<T>();

        // `min + (max - min)` can round past `max` when the probability
        // is 1.0 and the bounds differ wildly in magnitude.
        Ok(if value > max { max } else { value })
    }

    /// Decode a value in `[min, max]` from the back of the buffer.
    ///
    /// See [`try_consume_float_in_range`](Self::try_consume_float_in_range)
    /// for the algorithm. Returns `min` once the buffer is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or either bound is NaN or infinite.
    pub fn consume_float_in_range<T: FloatingPoint>(&mut self, min: T, max: T) -> T {
        match self.try_consume_float_in_range(min, max) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Decode a value in `[-T::MAX, T::MAX]`.
    ///
    /// The range is always split: one tail byte picks the half, the
    /// probability draw places the value inside it. Returns `-T::MAX`
    /// once the buffer is exhausted.
    pub fn consume_float<T: FloatingPoint>(&mut self) -> T {
        let max = T::MAX;
        self.consume_float_in_range(T::ZERO - max, max)
    }

    /// Decode an `f32` in `[-f32::MAX, f32::MAX]`.
    pub fn consume_f32(&mut self) -> f32 {
        self.consume_float()
    }

    /// Decode an `f64` in `[-f64::MAX, f64::MAX]`.
    pub fn consume_f64(&mut self) -> f64 {
        self.consume_float()
    }

    /// Decode an `f32` in `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or either bound is NaN or infinite.
    pub fn consume_f32_in_range(&mut self, min: f32, max: f32) -> f32 {
        self.consume_float_in_range(min, max)
    }

    /// Decode an `f64` in `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or either bound is NaN or infinite.
    pub fn consume_f64_in_range(&mut self, min: f64, max: f64) -> f64 {
        self.consume_float_in_range(min, max)
    }
}
