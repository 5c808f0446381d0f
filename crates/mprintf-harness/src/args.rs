//! JSON and command-line encodings of format arguments.
//!
//! An argument is a `{"kind": ..., "value": ...}` object, or `kind:value`
//! on the command line. Kinds: `int`, `uint`, `float`, `char`, `str`,
//! `null` (a null string), `ptr`.

use mprintf_core::FormatArg;
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgSpec {
    pub kind: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl ArgSpec {
    #[must_use]
    pub fn new(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }

    /// Parse `kind:value`. Numeric kinds accept decimal or `0x` hex.
    pub fn parse_cli(raw: &str) -> Result<Self, HarnessError> {
        let (kind, value) = raw.split_once(':').unwrap_or((raw, ""));
        let kind = kind.trim().to_ascii_lowercase();
        let value = match kind.as_str() {
            "int" => serde_json::Value::from(parse_signed(value).ok_or_else(|| bad(&kind, value))?),
            "uint" | "ptr" => {
                serde_json::Value::from(parse_unsigned(value).ok_or_else(|| bad(&kind, value))?)
            }
            "float" => serde_json::Value::from(
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| bad(&kind, value))?,
            ),
            "char" | "str" => serde_json::Value::from(value),
            "null" => serde_json::Value::Null,
            _ => return Err(HarnessError::UnsupportedArg { kind }),
        };
        Ok(Self { kind, value })
    }

    /// Borrow as a [`FormatArg`]. String values borrow from `self`.
    pub fn to_format_arg(&self) -> Result<FormatArg<'_>, HarnessError> {
        let v = &self.value;
        let fail = || HarnessError::BadArgValue {
            kind: self.kind.clone(),
            value: v.to_string(),
        };
        let arg = match self.kind.as_str() {
            "int" => FormatArg::Int(v.as_i64().ok_or_else(fail)?),
            "uint" => FormatArg::Uint(v.as_u64().ok_or_else(fail)?),
            "float" => FormatArg::Float(v.as_f64().ok_or_else(fail)?),
            "ptr" => FormatArg::Pointer(v.as_u64().ok_or_else(fail)? as usize),
            "char" => match v {
                serde_json::Value::String(s) => FormatArg::from(s.chars().next().ok_or_else(fail)?),
                serde_json::Value::Number(n) => FormatArg::Char(n.as_u64().ok_or_else(fail)? as u8),
                _ => return Err(fail()),
            },
            "str" => match v {
                serde_json::Value::String(s) => FormatArg::from(s.as_str()),
                serde_json::Value::Null => FormatArg::Str(None),
                _ => return Err(fail()),
            },
            "null" => FormatArg::Str(None),
            _ => {
                return Err(HarnessError::UnsupportedArg {
                    kind: self.kind.clone(),
                });
            }
        };
        Ok(arg)
    }
}

/// Convert a list of specs, failing on the first bad one.
pub fn to_format_args(specs: &[ArgSpec]) -> Result<Vec<FormatArg<'_>>, HarnessError> {
    specs.iter().map(ArgSpec::to_format_arg).collect()
}

fn bad(kind: &str, value: &str) -> HarnessError {
    HarnessError::BadArgValue {
        kind: kind.to_string(),
        value: value.to_string(),
    }
}

fn parse_unsigned(raw: &str) -> Option<u64> {
    let s = raw.trim().replace('_', "");
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

fn parse_signed(raw: &str) -> Option<i64> {
    let s = raw.trim();
    match s.strip_prefix('-') {
        Some(rest) => parse_unsigned(rest).and_then(|m| 0i64.checked_sub_unsigned(m)),
        None => parse_unsigned(s).and_then(|m| i64::try_from(m).ok()),
    }
}
