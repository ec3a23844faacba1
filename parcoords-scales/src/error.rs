#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParcoordsScaleError {
    #[error("Unsupported transform mode '{mode}', expected one of: {expected}")]
    UnsupportedTransform { mode: String, expected: String },

    #[error("Unknown palette '{name}', expected one of: {expected}")]
    UnknownPalette { name: String, expected: String },

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Column contains non-numeric value '{0}' but was classified as continuous")]
    NonNumericValue(String),

    #[error("Empty domain")]
    EmptyDomain,

    #[error("Invalid color '{color}' for category '{label}'")]
    InvalidCategoryColor { label: String, color: String },

    #[error("Quantile count must be at least 1")]
    InvalidQuantileCount,
}
