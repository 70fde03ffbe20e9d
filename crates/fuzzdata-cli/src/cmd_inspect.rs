/// Implementation of `fuzzdata inspect`.
///
/// Prints the size of a fuzz input and a hex dump of its bytes. Offsets
/// are counted from the front; remember that numeric decodes start from
/// the last line of the dump and work backwards.
///
/// # Output format
///
/// ```text
/// Input: 8 bytes
///   0000  ba ad f0 0d de ad be ef                           ........
/// ```
use std::fmt::Write as _;

use anyhow::Result;

use crate::InspectArgs;
use crate::config::{self, InputEncoding};

/// Run the `fuzzdata inspect` command.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or decoded.
pub fn run(args: &InspectArgs) -> Result<()> {
    let input = config::load_input(&args.file, InputEncoding::from_flag(args.hex))?;

    println!(
        "Input: {} byte{}",
        input.len(),
        if input.len() == 1 { "" } else { "s" }
    );
    for line in hex_dump(&input) {
        println!("{line}");
    }
    Ok(())
}

/// Format `bytes` as 16-byte rows of offset, hex, and printable ASCII.
fn hex_dump(bytes: &[u8]) -> Vec<String> {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let offset = i * 16;
            let hex = chunk
                .iter()
                .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                    if !s.is_empty() {
                        s.push(' ');
                    }
                    let _ = write!(s, "{b:02x}");
                    s
                });
            let ascii: String = chunk
                .iter()
                .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
                .collect();
            format!("  {offset:04x}  {hex:<48}  {ascii}")
        })
        .collect()
}
