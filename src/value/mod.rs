// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The typed values that options hold.
//!
//! Options are declared by scripts that want a number, a string, a flag or a
//! selection out of a preset list. [`Value`] is the tagged union over these,
//! and [`ScalarType`] names the scalar types a user may enter freely next to
//! a preset list (e.g. a free numeric entry alongside `[1, 2, 4, 8]`).


use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

lazy_static::lazy_static! {
    pub(crate) static ref SCALAR_TYPES_COMMA_SEPARATED: String = ScalarType::iter().join(", ");
}

/// The current (or default) value of an option.
///
/// `Int` and `Float` compare numerically with each other, so an option
/// declared with a default of `1.0` considers `1` to be the same value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// The option has been declared without a value (`null` when persisted).
    Unset,
}

impl Value {
    /// The scalar type of this value, if it has one.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            Value::Bool(_) => Some(ScalarType::Bool),
            Value::Int(_) => Some(ScalarType::Int),
            Value::Float(_) => Some(ScalarType::Float),
            Value::Str(_) => Some(ScalarType::Str),
            Value::Unset => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float. Integers are converted.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Guess the type of some user-supplied text. Booleans are recognised
    /// case-insensitively, then integers, then floats; "none" and "null"
    /// become [`Value::Unset`]. Anything else is a string.
    pub fn infer(s: &str) -> Value {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            "none" | "null" => return Value::Unset,
            _ => (),
        }
        if let Ok(i) = s.parse() {
            return Value::Int(i);
        }
        if let Ok(f) = s.parse() {
            return Value::Float(f);
        }
        Value::Str(s.to_string())
    }

    /// A compact representation used in menu group summaries. Unset values are
    /// shown as "-", and long strings are abbreviated to "str".
    pub(crate) fn summary(&self) -> String {
        match self {
            Value::Unset => "-".to_string(),
            Value::Str(s) if s.len() >= crate::constants::SUMMARY_MAX_STR_LEN => "str".to_string(),
            v => v.to_string(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Unset
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                int_eq_float(*a, *b)
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Unset, Value::Unset) => true,
            _ => false,
        }
    }
}

/// Exact comparison; converting the integer to a float would round anything
/// beyond 2^53.
fn int_eq_float(i: i64, f: f64) -> bool {
    // i64::MIN as f64 is exact, i64::MAX as f64 rounds up to 2^63.
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 && f as i64 == i
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            // Debug formatting keeps the trailing ".0" on whole numbers.
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Unset => write!(f, "None"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
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

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => v.into(),
            None => Value::Unset,
        }
    }
}

/// The scalar types that may be entered freely for an option.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum ScalarType {
    #[strum(serialize = "bool")]
    #[serde(rename = "bool")]
    Bool,

    #[strum(serialize = "int")]
    #[serde(rename = "int")]
    Int,

    /// Accepts integers too.
    #[strum(serialize = "float")]
    #[serde(rename = "float")]
    Float,

    #[strum(serialize = "str")]
    #[serde(rename = "str")]
    Str,
}

impl ScalarType {
    /// Does the supplied value have this type?
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ScalarType::Bool, Value::Bool(_))
                | (ScalarType::Int, Value::Int(_))
                | (ScalarType::Float, Value::Int(_) | Value::Float(_))
                | (ScalarType::Str, Value::Str(_))
        )
    }

    /// Parse text as this type. Returns `None` if that's not possible.
    pub fn parse(self, s: &str) -> Option<Value> {
        let s = s.trim();
        match self {
            ScalarType::Bool => match s.to_lowercase().as_str() {
                "true" | "yes" | "1" => Some(Value::Bool(true)),
                "false" | "no" | "0" => Some(Value::Bool(false)),
                _ => None,
            },
            ScalarType::Int => s.parse().ok().map(Value::Int),
            ScalarType::Float => s.parse().ok().map(Value::Float),
            ScalarType::Str => Some(Value::Str(s.to_string())),
        }
    }
}
