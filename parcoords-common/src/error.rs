use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParcoordsCommonError {
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Column '{0}' not found in table")]
    MissingColumn(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Row {row} is missing column '{column}'")]
    MissingColumnInRow { row: usize, column: String },

    #[error("Row {row} has column '{column}' that is not present in the first row")]
    UnexpectedColumnInRow { row: usize, column: String },
}
