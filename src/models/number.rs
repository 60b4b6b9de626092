//! Loosely-typed numeric fields
//!
//! `minutes` and `difficulty` are stored as whatever the user typed. They are
//! only coerced to numbers when aggregated, through [`LooseNumber::as_f64`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric field that tolerates non-numeric content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    /// A JSON number
    Number(f64),
    /// Free text, possibly numeric ("30", "abc")
    Text(String),
    /// Absent or null
    #[default]
    Missing,
}

impl LooseNumber {
    /// Interpret user input: numeric text becomes a number, anything else is
    /// kept verbatim
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(input.to_string()),
        }
    }

    /// Parse-or-skip: the numeric value, or `None` when the field does not
    /// hold a finite number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Missing => None,
        }
    }

    /// The numeric value if it is strictly positive
    pub fn positive(&self) -> Option<f64> {
        self.as_f64().filter(|n| *n > 0.0)
    }
}

impl From<f64> for LooseNumber {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for LooseNumber {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
            Self::Missing => Ok(()),
        }
    }
}
