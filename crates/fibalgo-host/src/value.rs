//! Dynamically-typed values as a host interpreter hands them over.

use std::fmt;

use serde::Serialize;

/// A value crossing the host boundary.
///
/// Values enter through [`HostValue::parse_literal`], which keeps integer
/// text too wide for 64 bits as `Big` so it is still reported as an integer.
/// Serialization is one-way, for result output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HostValue {
    /// The host's null / `None`.
    None,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    /// An integer literal that does not fit in 64 bits, kept verbatim.
    Big(String),
}

impl HostValue {
    /// Host-side type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::UInt(_) | Self::Big(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
        }
    }

    /// Parse a literal the way a host would read it from source text.
    ///
    /// Integers become `Int` (or `UInt` above `i64::MAX`, or `Big` beyond
    /// 64 bits), decimal or exponent forms become `Float`, `True`/`False`
    /// become `Bool`, `None` becomes `None`, anything else is a `Str`.
    #[must_use]
    pub fn parse_literal(text: &str) -> Self {
        let s = text.trim();
        match s {
            "None" | "null" => return Self::None,
            "True" | "true" => return Self::Bool(true),
            "False" | "false" => return Self::Bool(false),
            _ => {}
        }

        if is_integer_literal(s) {
            if let Ok(v) = s.parse::<i64>() {
                return Self::Int(v);
            }
            if let Ok(v) = s.parse::<u64>() {
                return Self::UInt(v);
            }
            return Self::Big(s.to_string());
        }

        match s.parse::<f64>() {
            Ok(v) => Self::Float(v),
            Err(_) => Self::Str(text.to_string()),
        }
    }

    /// Integer payload as `i128`, if this value is a 64-bit integer.
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::Int(v) => Some(i128::from(v)),
            Self::UInt(v) => Some(i128::from(v)),
            _ => None,
        }
    }
}

/// Optional sign followed by at least one ASCII digit and nothing else.
fn is_integer_literal(s: &str) -> bool {
    let digits = s
        .strip_prefix('-')
        .or_else(|| s.strip_prefix('+'))
        .unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Big(s) => f.write_str(s),
        }
    }
}

impl From<u64> for HostValue {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<u32> for HostValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for HostValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}
