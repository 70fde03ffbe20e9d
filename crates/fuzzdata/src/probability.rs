use crate::cursor::DataCursor;
use crate::float::FloatingPoint;

impl DataCursor {
    /// Decode one byte from the back and return its lowest bit.
    ///
    /// Returns `false` once the buffer is exhausted.
    pub fn consume_bool(&mut self) -> bool {
        self.consume_u8() & 1 == 1
    }

    /// Decode a full-width `u32` and scale it into `[0.0, 1.0]`.
    ///
    /// Returns `0.0` once the buffer is exhausted.
    #[allow(clippy::cast_precision_loss)]
    pub fn consume_probability_f32(&mut self) -> f32 {
        self.consume_u32() as f32 / u32::MAX as f32
    }

    /// Decode a full-width `u64` and scale it into `[0.0, 1.0]`.
    ///
    /// Returns `0.0` once the buffer is exhausted.
    #[allow(clippy::cast_precision_loss)]
    pub fn consume_probability_f64(&mut self) -> f64 {
        self.consume_u64() as f64 / u64::MAX as f64
    }

    /// Width-generic form of the probability decoders.
    pub fn consume_probability<T: FloatingPoint>(&mut self) -> T {
        T::consume_probability(self)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const DEADBEEF: [u8; 8] = [0xba, 0xad, 0xf0, 0x0d, 0xde, 0xad, 0xbe, 0xef];

    #[test]
    fn bool_takes_low_bit_of_each_tail_byte() {
        let mut data = DataCursor::new([0xba, 0xad, 0xf0, 0x0d]);
        assert!(data.consume_bool()); // 0x0d
        assert!(!data.consume_bool()); // 0xf0
        assert!(data.consume_bool()); // 0xad
        assert!(!data.consume_bool()); // 0xba
        assert!(!data.consume_bool());
    }

    #[test]
    fn probability_f32_uses_four_bytes() {
        let mut data = DataCursor::new(DEADBEEF);
        assert_eq!(data.consume_probability_f32(), 0.936_503_3);
        assert_eq!(data.consume_probability_f32(), 0.054_453_716);
        assert_eq!(data.consume_probability_f32(), 0.0);
    }

    #[test]
    fn probability_f64_uses_eight_bytes() {
        let mut data = DataCursor::new(DEADBEEF);
        assert_eq!(data.consume_probability_f64(), 0.936_503_283_226_502_6);
        assert_eq!(data.consume_probability_f64(), 0.0);
    }

    #[test]
    fn probability_of_all_ones_is_one() {
        let mut data = DataCursor::new([0xff; 12]);
        assert_eq!(data.consume_probability_f64(), 1.0);
        assert_eq!(data.consume_probability_f32(), 1.0);
    }

    #[test]
    fn generic_probability_dispatches_by_width() {
        let mut narrow = DataCursor::new(DEADBEEF);
        let mut wide = DataCursor::new(DEADBEEF);
        assert_eq!(
            narrow.consume_probability::<f32>(),
            DataCursor::new(DEADBEEF).consume_probability_f32()
        );
        assert_eq!(
            wide.consume_probability::<f64>(),
            DataCursor::new(DEADBEEF).consume_probability_f64()
        );
        assert_eq!(narrow.remaining_bytes(), 4);
        assert!(wide.is_empty());
    }
}
