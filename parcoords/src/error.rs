use parcoords_common::error::ParcoordsCommonError;
use parcoords_guides::error::ParcoordsGuidesError;
use parcoords_scales::error::ParcoordsScaleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParcoordsError {
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("Table shape mismatch: {0}")]
    ShapeMismatch(#[from] ParcoordsCommonError),

    #[error("Scale error: {0}")]
    Scale(#[from] ParcoordsScaleError),

    #[error("Guide error: {0}")]
    Guides(#[from] ParcoordsGuidesError),
}

impl ParcoordsError {
    pub fn invalid_config(field: impl Into<String>, reason: impl ToString) -> Self {
        ParcoordsError::InvalidConfiguration {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}
