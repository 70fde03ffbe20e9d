use std::fmt::Display;

/// A ranged decode was called with bounds that do not form a range.
///
/// This is a harness bug, never a property of the fuzz input. Running
/// out of bytes is not an error anywhere in this crate; every decode has
/// a defined fallback value for an exhausted buffer.
///
/// ```text
///   RangeError
///   ├── Unordered   ← min > max, or a float bound is NaN
///   └── NonFinite   ← a float bound is infinite
/// ```
///
/// The panicking decoders (`consume_integral_in_range`,
/// `consume_float_in_range` and the named per-width methods) panic with
/// this error's `Display` output. The `try_` forms return it instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// `min` is not less than or equal to `max`.
    ///
    /// Bounds are stored pre-formatted so one error type covers every
    /// integer and float width.
    #[error("invalid range: min {min} is not <= max {max}")]
    Unordered { min: String, max: String },

    /// A float bound is infinite, so the range has no finite width.
    #[error("invalid range: bounds {min} and {max} must be finite")]
    NonFinite { min: String, max: String },
}

impl RangeError {
    pub(crate) fn unordered(min: impl Display, max: impl Display) -> Self {
        Self::Unordered {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub(crate) fn non_finite(min: impl Display, max: impl Display) -> Self {
        Self::NonFinite {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
