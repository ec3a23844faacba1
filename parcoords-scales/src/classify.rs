use std::collections::HashSet;

use parcoords_common::value::Scalar;
use serde::{Deserialize, Serialize};

/// Number of distinct numeric values at or below which a numeric column is
/// treated as categorical
pub const DEFAULT_CARDINALITY_THRESHOLD: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Continuous,
    Categorical,
}

/// Classify a column as continuous when every value is numeric and there are
/// more than `cardinality_threshold` distinct values, otherwise categorical.
pub fn classify_column(values: &[Scalar], cardinality_threshold: usize) -> ColumnKind {
    if values.is_empty() || !values.iter().all(Scalar::is_numeric) {
        return ColumnKind::Categorical;
    }

    let mut distinct = HashSet::new();
    for value in values {
        distinct.insert(value);
        if distinct.len() > cardinality_threshold {
            return ColumnKind::Continuous;
        }
    }
    ColumnKind::Categorical
}
