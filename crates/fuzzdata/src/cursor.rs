/// A shrinking view over one fuzz input.
///
/// The cursor owns the input buffer and tracks the unconsumed region with
/// two indices. Bytes and strings are taken from the front; numeric
/// decodes take their bytes from the back. Neither side ever moves the
/// other's boundary, and the region only ever shrinks.
///
/// ```text
///   data:   ┌────┬────┬────┬────┬────┬────┬────┬────┐
///           │ ba │ ad │ f0 │ 0d │ de │ ad │ be │ ef │
///           └────┴────┴────┴────┴────┴────┴────┴────┘
///             ▲                                       ▲
///           front                                   back
///
///   consume_bytes(2)  → [ba, ad]      front = 2
///   consume_u16()     → 0xefbe        back  = 6
///   remaining_bytes() → 4             (f0 0d de ad)
/// ```
///
/// One cursor serves one decoding session, normally one fuzz iteration.
/// There is no reset: build a new cursor for the next input.
#[derive(Clone, Debug)]
pub struct DataCursor {
    data: Vec<u8>,
    front: usize,
    back: usize,
}

impl DataCursor {
    /// Wrap a fuzz input. Any byte sequence is valid, including an empty one.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let back = data.len();
        Self {
            data,
            front: 0,
            back,
        }
    }

    /// Number of bytes not yet consumed from either end.
    pub fn remaining_bytes(&self) -> usize {
        self.back - self.front
    }

    /// `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Borrow the unconsumed region without consuming it.
    pub fn remaining_slice(&self) -> &[u8] {
        &self.data[self.front..self.back]
    }

    /// Copy out the first `n` remaining bytes and advance past them.
    ///
    /// When fewer than `n` bytes remain, returns everything that is left.
    /// An exhausted cursor yields an empty vector.
    pub fn consume_bytes(&mut self, n: usize) -> Vec<u8> {
        let n = n.min(self.remaining_bytes());
        let out = self.data[self.front..self.front + n].to_vec();
        self.front += n;
        out
    }

    /// Copy out every remaining byte.
    pub fn consume_remaining_bytes(&mut self) -> Vec<u8> {
        self.consume_bytes(self.remaining_bytes())
    }

    /// Take the first `n` remaining bytes as text.
    ///
    /// Exactly the same bytes are consumed as by [`consume_bytes`]; any
    /// invalid UTF-8 sequence is replaced with `U+FFFD` rather than
    /// rejected.
    ///
    /// [`consume_bytes`]: Self::consume_bytes
    pub fn consume_bytes_as_string(&mut self, n: usize) -> String {
        String::from_utf8_lossy(&self.consume_bytes(n)).into_owned()
    }

    /// Fill `dst` from the front of the buffer.
    ///
    /// Returns how many bytes were written: `min(dst.len(), remaining)`.
    /// Bytes of `dst` past that count are left untouched.
    pub fn consume_data(&mut self, dst: &mut [u8]) -> usize {
        let n = dst.len().min(self.remaining_bytes());
        dst[..n].copy_from_slice(&self.data[self.front..self.front + n]);
        self.front += n;
        n
    }

    /// Take one byte from the front.
    pub(crate) fn pop_front(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.data[self.front];
        self.front += 1;
        Some(byte)
    }

    /// Take one byte from the back.
    pub(crate) fn pop_back(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        self.back -= 1;
        Some(self.data[self.back])
    }
}

impl From<Vec<u8>> for DataCursor {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for DataCursor {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAADF00D: [u8; 4] = [0xba, 0xad, 0xf0, 0x0d];

    #[test]
    fn consume_bytes_shortens_at_end() {
        let mut data = DataCursor::new(BAADF00D);
        assert_eq!(data.consume_bytes(3), vec![0xba, 0xad, 0xf0]);
        assert_eq!(data.consume_bytes(2), vec![0x0d]);
        assert!(data.consume_bytes(2).is_empty());
    }

    #[test]
    fn consume_zero_bytes_is_a_no_op() {
        let mut data = DataCursor::new(BAADF00D);
        assert!(data.consume_bytes(0).is_empty());
        assert_eq!(data.remaining_bytes(), 4);
    }

    #[test]
    fn remaining_bytes_tracks_both_ends() {
        let mut data = DataCursor::new(BAADF00D);
        assert_eq!(data.remaining_bytes(), 4);

        data.consume_bytes(1);
        assert_eq!(data.remaining_bytes(), 3);

        // Numeric decodes come off the back.
        assert_eq!(data.pop_back(), Some(0x0d));
        assert_eq!(data.remaining_bytes(), 2);
        assert_eq!(data.remaining_slice(), &[0xad, 0xf0]);
    }

    #[test]
    fn consume_remaining_bytes_takes_everything() {
        let mut data = DataCursor::new(BAADF00D);
        assert_eq!(data.consume_remaining_bytes(), BAADF00D.to_vec());
        assert!(data.is_empty());
        assert!(data.consume_remaining_bytes().is_empty());
    }

    #[test]
    fn consume_bytes_as_string_splits_text() {
        let mut data = DataCursor::new(b"foo bar".as_slice());
        assert_eq!(data.consume_bytes_as_string(4), "foo ");
        assert_eq!(data.consume_bytes_as_string(4), "bar");
        assert_eq!(data.consume_bytes_as_string(4), "");
    }

    #[test]
    fn consume_bytes_as_string_replaces_invalid_utf8() {
        let mut data = DataCursor::new(vec![b'a', 0xff, b'b', b'c']);
        assert_eq!(data.consume_bytes_as_string(3), "a\u{FFFD}b");
        assert_eq!(data.remaining_bytes(), 1);
    }

    #[test]
    fn consume_data_fills_prefix() {
        let mut data = DataCursor::new(BAADF00D);
        let mut dst = [0u8; 3];
        assert_eq!(data.consume_data(&mut dst), 3);
        assert_eq!(dst, [0xba, 0xad, 0xf0]);

        let mut dst = [0x55u8; 3];
        assert_eq!(data.consume_data(&mut dst), 1);
        assert_eq!(dst, [0x0d, 0x55, 0x55]);
    }

    #[test]
    fn empty_input_is_valid() {
        let mut data = DataCursor::new(Vec::new());
        assert!(data.is_empty());
        assert_eq!(data.pop_front(), None);
        assert_eq!(data.pop_back(), None);
        assert!(data.consume_bytes(8).is_empty());
    }

    #[test]
    fn front_and_back_meet_in_the_middle() {
        let mut data = DataCursor::new(BAADF00D);
        assert_eq!(data.pop_front(), Some(0xba));
        assert_eq!(data.pop_back(), Some(0x0d));
        assert_eq!(data.pop_front(), Some(0xad));
        assert_eq!(data.pop_back(), Some(0xf0));
        assert_eq!(data.pop_back(), None);
        assert_eq!(data.pop_front(), None);
    }
}
