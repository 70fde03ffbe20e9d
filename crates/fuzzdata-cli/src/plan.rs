/// Decode plans: the sequence of calls a harness makes, written as text.
///
/// A plan is a comma-separated list of ops. Replaying a plan against a
/// saved fuzz input reproduces the exact values the harness saw.
///
/// ```text
/// ┌───────────────────────────────┬──────────────────────────────────────┐
/// │ Op                            │ Decoder call                         │
/// ├───────────────────────────────┼──────────────────────────────────────┤
/// │ u8 u16 u32 u64 usize          │ consume_<type>()                     │
/// │ i8 i16 i32 i64 isize          │                                      │
/// │ f32 f64                       │                                      │
/// │ <type>:MIN..MAX               │ consume_<type>_in_range(MIN, MAX)    │
/// │ bool                          │ consume_bool()                       │
/// │ p32 p64                       │ consume_probability_f32/f64()        │
/// │ bytes:N                       │ consume_bytes(N)                     │
/// │ string:N                      │ consume_bytes_as_string(N)           │
/// │ rstring:N                     │ consume_random_length_string(N)      │
/// │ rstring                       │ consume_remaining_random_length_...  │
/// │ rest                          │ consume_remaining_bytes()            │
/// └───────────────────────────────┴──────────────────────────────────────┘
/// ```
///
/// Example: `u32,i64:-110..871,bool,rstring:16,rest`.
///
/// Bounds are checked while parsing, so a plan that parses never hits the
/// decoder's inverted-range panic. Integer bounds must fit the op's type
/// and float bounds must be finite in the op's width.
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use fuzzdata::{DataCursor, Integral, RangeError};
use serde::Serialize;

/// Errors produced while parsing or replaying a plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The plan string contained no ops.
    #[error("plan is empty")]
    Empty,

    /// An op name was not recognised.
    #[error("unknown op {0:?}")]
    UnknownOp(String),

    /// An op that needs an argument was given none, or vice versa.
    #[error("op {op:?} {problem}")]
    BadArgument { op: String, problem: &'static str },

    /// A numeric argument or bound could not be parsed.
    #[error("cannot parse {value:?} in op {op:?}")]
    BadNumber { op: String, value: String },

    /// A bound does not fit in the op's integer type.
    #[error("bound {value} does not fit in {kind}")]
    OutOfBounds { kind: IntKind, value: i128 },

    /// A float bound is infinite or beyond the op's float type.
    #[error("bound {value} is not a finite {kind}")]
    FloatOutOfBounds { kind: FloatKind, value: f64 },

    /// The decoder rejected the range.
    #[error(transparent)]
    Range(#[from] RangeError),
}

// ── Op model ──────────────────────────────────────────────────────────────────

/// Integer widths an op can decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntKind {
    U8,
    U16,
    U32,
    U64,
    Usize,
    I8,
    I16,
    I32,
    I64,
    Isize,
}

impl IntKind {
    const ALL: [Self; 10] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::Usize,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::Isize,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
        }
    }

    /// Inclusive bounds of the type, widened to `i128`.
    #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
    fn limits(self) -> (i128, i128) {
        match self {
            Self::U8 => (0, u8::MAX as i128),
            Self::U16 => (0, u16::MAX as i128),
            Self::U32 => (0, u32::MAX as i128),
            Self::U64 => (0, u64::MAX as i128),
            Self::Usize => (0, usize::MAX as i128),
            Self::I8 => (i8::MIN as i128, i8::MAX as i128),
            Self::I16 => (i16::MIN as i128, i16::MAX as i128),
            Self::I32 => (i32::MIN as i128, i32::MAX as i128),
            Self::I64 => (i64::MIN as i128, i64::MAX as i128),
            Self::Isize => (isize::MIN as i128, isize::MAX as i128),
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Float widths an op can decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatKind {
    F32,
    F64,
}

impl FloatKind {
    /// Largest finite magnitude of the type, widened to `f64`.
    fn limit(self) -> f64 {
        match self {
            Self::F32 => f64::from(f32::MAX),
            Self::F64 => f64::MAX,
        }
    }
}

impl fmt::Display for FloatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
        })
    }
}

/// One decoder call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Int {
        kind: IntKind,
        range: Option<(i128, i128)>,
    },
    Float {
        kind: FloatKind,
        range: Option<(f64, f64)>,
    },
    Bool,
    Probability(FloatKind),
    Bytes(usize),
    String(usize),
    RandomString(Option<usize>),
    Rest,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int { kind, range: None } => write!(f, "{kind}"),
            Self::Int {
                kind,
                range: Some((min, max)),
            } => write!(f, "{kind}:{min}..{max}"),
            Self::Float { kind, range: None } => write!(f, "{kind}"),
            Self::Float {
                kind,
                range: Some((min, max)),
            } => write!(f, "{kind}:{min}..{max}"),
            Self::Bool => f.write_str("bool"),
            Self::Probability(FloatKind::F32) => f.write_str("p32"),
            Self::Probability(FloatKind::F64) => f.write_str("p64"),
            Self::Bytes(n) => write!(f, "bytes:{n}"),
            Self::String(n) => write!(f, "string:{n}"),
            Self::RandomString(Some(n)) => write!(f, "rstring:{n}"),
            Self::RandomString(None) => f.write_str("rstring"),
            Self::Rest => f.write_str("rest"),
        }
    }
}

impl FromStr for Op {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        if let Some(kind) = IntKind::ALL.into_iter().find(|k| k.name() == name) {
            let range = arg.map(|a| parse_int_range(s, kind, a)).transpose()?;
            return Ok(Self::Int { kind, range });
        }

        match name {
            "f32" | "f64" => {
                let kind = if name == "f32" {
                    FloatKind::F32
                } else {
                    FloatKind::F64
                };
                let range = arg.map(|a| parse_float_range(s, kind, a)).transpose()?;
                Ok(Self::Float { kind, range })
            }
            "bool" => no_argument(s, arg, Self::Bool),
            "p32" => no_argument(s, arg, Self::Probability(FloatKind::F32)),
            "p64" => no_argument(s, arg, Self::Probability(FloatKind::F64)),
            "rest" => no_argument(s, arg, Self::Rest),
            "bytes" => Ok(Self::Bytes(required_length(s, arg)?)),
            "string" => Ok(Self::String(required_length(s, arg)?)),
            "rstring" => Ok(Self::RandomString(
                arg.map(|a| parse_number::<usize>(s, a)).transpose()?,
            )),
            _ => Err(PlanError::UnknownOp(s.to_string())),
        }
    }
}

/// Parse a comma-separated plan. Whitespace around ops is ignored.
///
/// # Errors
///
/// Returns the first [`PlanError`] encountered; nothing is decoded for a
/// plan that fails to parse.
pub fn parse_plan(plan: &str) -> Result<Vec<Op>, PlanError> {
    let ops = plan
        .split(',')
        .map(str::trim)
        .filter(|op| !op.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Op>, _>>()?;

    if ops.is_empty() {
        return Err(PlanError::Empty);
    }
    Ok(ops)
}

// ── Parsing helpers ───────────────────────────────────────────────────────────

fn no_argument(op: &str, arg: Option<&str>, parsed: Op) -> Result<Op, PlanError> {
    match arg {
        None => Ok(parsed),
        Some(_) => Err(PlanError::BadArgument {
            op: op.to_string(),
            problem: "takes no argument",
        }),
    }
}

fn required_length(op: &str, arg: Option<&str>) -> Result<usize, PlanError> {
    let arg = arg.ok_or_else(|| PlanError::BadArgument {
        op: op.to_string(),
        problem: "needs a length, e.g. bytes:16",
    })?;
    parse_number(op, arg)
}

fn parse_number<T: FromStr>(op: &str, value: &str) -> Result<T, PlanError> {
    value.trim().parse().map_err(|_| PlanError::BadNumber {
        op: op.to_string(),
        value: value.to_string(),
    })
}

fn split_range<'a>(op: &str, arg: &'a str) -> Result<(&'a str, &'a str), PlanError> {
    arg.split_once("..").ok_or_else(|| PlanError::BadArgument {
        op: op.to_string(),
        problem: "range must be written MIN..MAX",
    })
}

fn parse_int_range(op: &str, kind: IntKind, arg: &str) -> Result<(i128, i128), PlanError> {
    let (min, max) = split_range(op, arg)?;
    let min: i128 = parse_number(op, min)?;
    let max: i128 = parse_number(op, max)?;

    let (lo, hi) = kind.limits();
    for value in [min, max] {
        if value < lo || value > hi {
            return Err(PlanError::OutOfBounds { kind, value });
        }
    }
    if min > max {
        return Err(RangeError::Unordered {
            min: min.to_string(),
            max: max.to_string(),
        }
        .into());
    }
    Ok((min, max))
}

fn parse_float_range(op: &str, kind: FloatKind, arg: &str) -> Result<(f64, f64), PlanError> {
    let (min, max) = split_range(op, arg)?;
    let min: f64 = parse_number(op, min)?;
    let max: f64 = parse_number(op, max)?;

    // NaN compares as unordered and is rejected here too.
    if !matches!(min.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal)) {
        return Err(RangeError::Unordered {
            min: min.to_string(),
            max: max.to_string(),
        }
        .into());
    }

    // An f32 bound past f32::MAX would turn into an infinity when narrowed.
    let limit = kind.limit();
    for value in [min, max] {
        if !(-limit..=limit).contains(&value) {
            return Err(PlanError::FloatOutOfBounds { kind, value });
        }
    }
    Ok((min, max))
}

// ── Replay ────────────────────────────────────────────────────────────────────

/// A decoded value, shaped for both text and JSON output.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
    /// Raw bytes, hex-encoded.
    Bytes(String),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Bytes(hex) if hex.is_empty() => f.write_str("[]"),
            Self::Bytes(hex) => write!(f, "[{hex}]"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// The outcome of one op: what it returned and what it left behind.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step {
    pub op: String,
    pub value: Value,
    pub remaining: usize,
}

/// Run every op of `plan` against `data`, in order.
///
/// # Errors
///
/// Returns [`PlanError`] if an op's bounds are rejected. Plans produced
/// by [`parse_plan`] are already validated.
pub fn replay(plan: &[Op], data: &mut DataCursor) -> Result<Vec<Step>, PlanError> {
    plan.iter()
        .map(|op| {
            let value = apply(op, data)?;
            Ok(Step {
                op: op.to_string(),
                value,
                remaining: data.remaining_bytes(),
            })
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn apply(op: &Op, data: &mut DataCursor) -> Result<Value, PlanError> {
    let value = match *op {
        Op::Int { kind, range } => match kind {
            IntKind::U8 => Value::Unsigned(u64::from(int_op::<u8>(data, kind, range)?)),
            IntKind::U16 => Value::Unsigned(u64::from(int_op::<u16>(data, kind, range)?)),
            IntKind::U32 => Value::Unsigned(u64::from(int_op::<u32>(data, kind, range)?)),
            IntKind::U64 => Value::Unsigned(int_op::<u64>(data, kind, range)?),
            IntKind::Usize => Value::Unsigned(int_op::<usize>(data, kind, range)? as u64),
            IntKind::I8 => Value::Signed(i64::from(int_op::<i8>(data, kind, range)?)),
            IntKind::I16 => Value::Signed(i64::from(int_op::<i16>(data, kind, range)?)),
            IntKind::I32 => Value::Signed(i64::from(int_op::<i32>(data, kind, range)?)),
            IntKind::I64 => Value::Signed(int_op::<i64>(data, kind, range)?),
            IntKind::Isize => Value::Signed(int_op::<isize>(data, kind, range)? as i64),
        },
        Op::Float {
            kind: FloatKind::F32,
            range,
        } => {
            let value = match range {
                None => data.consume_f32(),
                Some((min, max)) => data.try_consume_float_in_range(min as f32, max as f32)?,
            };
            Value::Float(f64::from(value))
        }
        Op::Float {
            kind: FloatKind::F64,
            range,
        } => Value::Float(match range {
            None => data.consume_f64(),
            Some((min, max)) => data.try_consume_float_in_range(min, max)?,
        }),
        Op::Bool => Value::Bool(data.consume_bool()),
        Op::Probability(FloatKind::F32) => Value::Float(f64::from(data.consume_probability_f32())),
        Op::Probability(FloatKind::F64) => Value::Float(data.consume_probability_f64()),
        Op::Bytes(n) => Value::Bytes(hex::encode(data.consume_bytes(n))),
        Op::String(n) => Value::Text(data.consume_bytes_as_string(n)),
        Op::RandomString(Some(n)) => Value::Text(data.consume_random_length_string(n)),
        Op::RandomString(None) => Value::Text(data.consume_remaining_random_length_string()),
        Op::Rest => Value::Bytes(hex::encode(data.consume_remaining_bytes())),
    };
    Ok(value)
}

fn int_op<T>(
    data: &mut DataCursor,
    kind: IntKind,
    range: Option<(i128, i128)>,
) -> Result<T, PlanError>
where
    T: Integral + TryFrom<i128>,
{
    let Some((min, max)) = range else {
        return Ok(data.consume_integral::<T>());
    };
    let narrow = |value: i128| T::try_from(value).map_err(|_| PlanError::OutOfBounds { kind, value });
    Ok(data.try_consume_integral_in_range(narrow(min)?, narrow(max)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEADBEEF: [u8; 8] = [0xba, 0xad, 0xf0, 0x0d, 0xde, 0xad, 0xbe, 0xef];

    #[test]
    fn parses_every_op_form() {
        let plan = parse_plan(
            "u8, i64:-110..871, f32, f64:-0.9..100.3, bool, p32, p64, bytes:4, string:2, rstring:16, rstring, rest",
        )
        .unwrap();
        assert_eq!(plan.len(), 12);
        assert_eq!(
            plan[1],
            Op::Int {
                kind: IntKind::I64,
                range: Some((-110, 871))
            }
        );
        assert_eq!(
            plan[3],
            Op::Float {
                kind: FloatKind::F64,
                range: Some((-0.9, 100.3))
            }
        );
        assert_eq!(plan[9], Op::RandomString(Some(16)));
        assert_eq!(plan[10], Op::RandomString(None));
    }

    #[test]
    fn ops_display_in_plan_syntax() {
        for text in ["u16", "isize:-5..5", "f64:-0.9..100.3", "p32", "bytes:3", "rstring", "rest"] {
            let op: Op = text.parse().unwrap();
            assert_eq!(op.to_string(), text);
        }
    }

    #[test]
    fn rejects_unknown_op() {
        assert!(matches!(parse_plan("u8,u128"), Err(PlanError::UnknownOp(op)) if op == "u128"));
    }

    #[test]
    fn rejects_empty_plan() {
        assert!(matches!(parse_plan(" , ,"), Err(PlanError::Empty)));
    }

    #[test]
    fn rejects_inverted_ranges_before_decoding() {
        assert!(matches!(
            parse_plan("i8:3..-3"),
            Err(PlanError::Range(RangeError::Unordered { .. }))
        ));
        assert!(matches!(
            parse_plan("f32:1..NaN"),
            Err(PlanError::Range(RangeError::Unordered { .. }))
        ));
    }

    #[test]
    fn rejects_bounds_outside_type() {
        assert!(matches!(
            parse_plan("u8:0..256"),
            Err(PlanError::OutOfBounds {
                kind: IntKind::U8,
                value: 256
            })
        ));
        assert!(matches!(
            parse_plan("u32:-1..4"),
            Err(PlanError::OutOfBounds { value: -1, .. })
        ));
        assert!(matches!(
            parse_plan("f32:-1e300..1e300"),
            Err(PlanError::FloatOutOfBounds {
                kind: FloatKind::F32,
                ..
            })
        ));
        assert!(matches!(
            parse_plan("f64:0..inf"),
            Err(PlanError::FloatOutOfBounds {
                kind: FloatKind::F64,
                ..
            })
        ));
        // The same magnitude is fine for the wider type.
        assert!(parse_plan("f64:-1e300..1e300").is_ok());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(parse_plan("bool:1"), Err(PlanError::BadArgument { .. })));
        assert!(matches!(parse_plan("bytes"), Err(PlanError::BadArgument { .. })));
        assert!(matches!(parse_plan("u8:1-2"), Err(PlanError::BadArgument { .. })));
        assert!(matches!(parse_plan("bytes:x"), Err(PlanError::BadNumber { .. })));
    }

    #[test]
    fn replay_matches_direct_calls() {
        let plan = parse_plan("u32, bytes:2, bool, rest").unwrap();
        let mut data = DataCursor::new(DEADBEEF);
        let steps = replay(&plan, &mut data).unwrap();

        let values: Vec<_> = steps.iter().map(|s| s.value.clone()).collect();
        assert_eq!(
            values,
            vec![
                Value::Unsigned(0xefbe_adde),
                Value::Bytes("baad".into()),
                Value::Bool(true),
                Value::Bytes("f0".into()),
            ]
        );
        let remaining: Vec<_> = steps.iter().map(|s| s.remaining).collect();
        assert_eq!(remaining, vec![4, 2, 1, 0]);
    }

    #[test]
    fn replay_ranged_signed() {
        let plan = parse_plan("i64:-110..871, i64:-110..871, i64:-1..1, i64:-1..1").unwrap();
        let steps = replay(&plan, &mut DataCursor::new(DEADBEEF)).unwrap();
        let values: Vec<_> = steps.into_iter().map(|s| s.value).collect();
        assert_eq!(
            values,
            vec![
                Value::Signed(380),
                Value::Signed(210),
                Value::Signed(0),
                Value::Signed(-1)
            ]
        );
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Bytes(String::new()).to_string(), "[]");
        assert_eq!(Value::Bytes("0d".into()).to_string(), "[0d]");
        assert_eq!(Value::Text("a\\b".into()).to_string(), "\"a\\\\b\"");
        assert_eq!(Value::Float(-0.5).to_string(), "-0.5");
    }
}
