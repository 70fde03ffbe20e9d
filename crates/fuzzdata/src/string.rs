use crate::cursor::DataCursor;

/// Byte that starts a two-byte escape in random-length strings.
pub const ESCAPE: u8 = b'\\';

impl DataCursor {
    /// Read a variable-length byte string from the front of the buffer.
    ///
    /// Reads at most `max_length` output bytes, one input byte at a time:
    ///
    /// ```text
    ///   ┌──────────────────────┬──────────────────────────────────┐
    ///   │ Input                │ Effect                           │
    ///   ├──────────────────────┼──────────────────────────────────┤
    ///   │ `\` `\`              │ emit `\`, continue               │
    ///   │ `\` <any other byte> │ consume both, stop               │
    ///   │ `\` <end of input>   │ emit `\`, stop                   │
    ///   │ <other byte>         │ emit it, continue                │
    ///   └──────────────────────┴──────────────────────────────────┘
    /// ```
    ///
    /// A length prefix would let one mutated byte reinterpret the rest of
    /// the input; with a terminator a mutation only disturbs the string it
    /// lands in.
    pub fn consume_random_length_bytes(&mut self, max_length: usize) -> Vec<u8> {
        let mut out = Vec::new();

        for _ in 0..max_length {
            let Some(next) = self.pop_front() else {
                break;
            };

            // A lone trailing escape falls through and is emitted as-is.
            if next == ESCAPE && self.pop_front().is_some_and(|escaped| escaped != ESCAPE) {
                break;
            }

            out.push(next);
        }

        out
    }

    /// Read a variable-length string from the front of the buffer.
    ///
    /// Consumes exactly the bytes [`consume_random_length_bytes`] would;
    /// invalid UTF-8 is replaced with `U+FFFD`.
    ///
    /// [`consume_random_length_bytes`]: Self::consume_random_length_bytes
    pub fn consume_random_length_string(&mut self, max_length: usize) -> String {
        String::from_utf8_lossy(&self.consume_random_length_bytes(max_length)).into_owned()
    }

    /// [`consume_random_length_string`](Self::consume_random_length_string)
    /// bounded only by the bytes that remain.
    pub fn consume_remaining_random_length_string(&mut self) -> String {
        self.consume_random_length_string(self.remaining_bytes())
    }
}
