//! Numeric ids that browsers may send as strings

use serde::Deserialize;

/// A JSON number or a string holding one, e.g. `5` or `"5"`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumericId {
    Number(i64),
    Text(String),
}

impl NumericId {
    /// The integer value, or `None` if the text is not an integer.
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}
