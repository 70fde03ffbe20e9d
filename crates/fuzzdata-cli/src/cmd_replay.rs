/// Implementation of `fuzzdata replay`.
///
/// Loads a fuzz input, runs a decode plan against it, and prints every
/// value the plan produced. Running the plan your harness uses against a
/// crashing input shows exactly what the program under test received.
///
/// # Output formats
///
/// ```text
/// text:
///   u32 = 4022250974
///   bytes:2 = [baad]
///   bool = true
///   (1 byte left)
///
/// json:
///   [{"op":"u32","value":4022250974,"remaining":4}, ...]
/// ```
use std::io;

use anyhow::{Context, Result};
use fuzzdata::DataCursor;

use crate::ReplayArgs;
use crate::config::{self, InputEncoding, OutputFormat, ReplayConfig};
use crate::plan::{self, Step};

/// Run the `fuzzdata replay` command.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, the plan does not
/// parse, or stdout cannot be written.
pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = ReplayConfig {
        format: args.format.parse()?,
        encoding: InputEncoding::from_flag(args.hex),
        leftover: args.leftover,
    };

    let ops = plan::parse_plan(&args.plan).context("invalid plan")?;
    log::debug!("plan has {} ops", ops.len());

    let input = config::load_input(&args.file, config.encoding)?;
    let mut data = DataCursor::new(input);
    let steps = plan::replay(&ops, &mut data)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_steps(&mut out, &steps, &data, &config).context("cannot write to stdout")?;
    Ok(())
}

/// Render replay results in the configured format.
fn write_steps(
    out: &mut impl io::Write,
    steps: &[Step],
    data: &DataCursor,
    config: &ReplayConfig,
) -> Result<()> {
    match config.format {
        OutputFormat::Text => {
            for step in steps {
                writeln!(out, "{} = {}", step.op, step.value)?;
            }
            let left = data.remaining_bytes();
            writeln!(out, "({left} byte{} left)", if left == 1 { "" } else { "s" })?;
            if config.leftover && left > 0 {
                writeln!(out, "leftover: {}", hex::encode(data.remaining_slice()))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, steps)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(plan: &str, input: &[u8], config: &ReplayConfig) -> String {
        let ops = plan::parse_plan(plan).unwrap();
        let mut data = DataCursor::new(input);
        let steps = plan::replay(&ops, &mut data).unwrap();
        let mut out = Vec::new();
        write_steps(&mut out, &steps, &data, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output_lists_each_op() {
        let config = ReplayConfig {
            leftover: true,
            ..ReplayConfig::default()
        };
        let out = render("u32, bytes:2, bool", &[0xba, 0xad, 0xf0, 0x0d, 0xde, 0xad, 0xbe, 0xef], &config);
        assert_eq!(
            out,
            "u32 = 4022250974\nbytes:2 = [baad]\nbool = true\n(1 byte left)\nleftover: f0\n"
        );
    }

    #[test]
    fn json_output_is_an_array_of_steps() {
        let config = ReplayConfig {
            format: OutputFormat::Json,
            ..ReplayConfig::default()
        };
        let out = render("u8, rstring", b"hi\x07", &config);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                { "op": "u8", "value": 7, "remaining": 2 },
                { "op": "rstring", "value": "hi", "remaining": 0 }
            ])
        );
    }
}
