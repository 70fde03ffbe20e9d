/// Replay configuration and input loading.
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────────────────┐
/// │ Field    │ Purpose                                              │
/// ├──────────┼──────────────────────────────────────────────────────┤
/// │ format   │ text (one `op = value` line per op) or json          │
/// │ encoding │ raw (file bytes as-is) or hex (whitespace ignored)   │
/// │ leftover │ print the bytes no op consumed after the last step   │
/// └──────────┴──────────────────────────────────────────────────────┘
/// ```
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

/// Settings for `fuzzdata replay`, resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayConfig {
    pub format: OutputFormat,
    pub encoding: InputEncoding,
    pub leftover: bool,
}

impl Default for ReplayConfig {
    /// Text output, raw input, no leftover dump. A corpus entry written
    /// by a fuzzer can be replayed without any flags.
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            encoding: InputEncoding::Raw,
            leftover: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(anyhow!("unknown format {s:?}, expected text|json")),
        }
    }
}

/// How the bytes of an input file are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputEncoding {
    /// The file content is the fuzz input.
    #[default]
    Raw,
    /// The file holds hex digits; ASCII whitespace between them is ignored.
    Hex,
}

impl InputEncoding {
    pub fn from_flag(hex: bool) -> Self {
        if hex { Self::Hex } else { Self::Raw }
    }
}

/// Read a fuzz input from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if `encoding` is
/// [`InputEncoding::Hex`] and the content is not valid hex.
pub fn load_input(path: &Path, encoding: InputEncoding) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;

    let input = match encoding {
        InputEncoding::Raw => bytes,
        InputEncoding::Hex => decode_hex(&bytes)
            .with_context(|| format!("{} is not valid hex", path.display()))?,
    };

    log::debug!(
        "loaded {} input bytes from {} ({encoding:?})",
        input.len(),
        path.display()
    );
    Ok(input)
}

fn decode_hex(text: &[u8]) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    Ok(hex::decode(digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_plain_text_replay() {
        let config = ReplayConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.encoding, InputEncoding::Raw);
        assert!(!config.leftover);
    }

    #[test]
    fn parses_formats_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn hex_ignores_whitespace() {
        assert_eq!(
            decode_hex(b"ba ad\nf0 0d\n").unwrap(),
            vec![0xba, 0xad, 0xf0, 0x0d]
        );
        assert!(decode_hex(b"abc").is_err());
    }
}
