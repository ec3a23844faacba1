use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single table cell: either a number or a text label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f32),
    Text(String),
}

impl Scalar {
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Scalar::Number(v) => Some(*v),
            Scalar::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Number(_))
    }

    /// Parse a raw text cell, producing a number when the text is numeric
    pub fn parse_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        match trimmed.parse::<f32>() {
            Ok(v) if v.is_finite() => Scalar::Number(v),
            _ => Scalar::Text(cell.to_string()),
        }
    }

    /// Label used for ticks and legend entries
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(v) if v.fract() == 0.0 && v.abs() < 1e9 => write!(f, "{}", *v as i64),
            Scalar::Number(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

// Natural order: numbers before text, numbers by total order, text lexicographic
impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Number(a), Scalar::Number(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
            (Scalar::Number(_), Scalar::Text(_)) => Ordering::Less,
            (Scalar::Text(_), Scalar::Number(_)) => Ordering::Greater,
            (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Scalar::Number(v) => OrderedFloat(*v).hash(state),
            Scalar::Text(s) => s.hash(state),
        }
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Number(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value as f32)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(value as f32)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}
