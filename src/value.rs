//! Typed field values.
//!
//! Every decoded field is one of three scalar types or the distinguished
//! `Na` marker. `Na` is its own variant rather than a magic string, so a
//! text column that legitimately contains "NA" can never be mistaken for
//! a missing value.

use std::fmt;

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer, from a `ToInt` cast.
    Int(i64),
    /// Floating point, from a `ToFloat` cast.
    Float(f64),
    /// Raw substring, padding included, from a `ToString` cast.
    Str(String),
    /// Missing or unparseable.
    Na,
}

impl Value {
    /// Returns true if this value is the missing-value marker.
    pub fn is_na(&self) -> bool {
        matches!(self, Value::Na)
    }

    /// The integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The float payload if this is a `Float`, or an `Int` widened to f64.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::Na => f.write_str("NA"),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
