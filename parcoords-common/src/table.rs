use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ParcoordsCommonError;
use crate::value::Scalar;

/// Column-oriented table of scalars.
///
/// Every column has the same number of rows. Column order is the insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: IndexMap<String, Vec<Scalar>>,
    num_rows: usize,
}

impl Table {
    /// Build a table from named columns, rejecting columns of unequal length
    pub fn try_new<S, I>(columns: I) -> Result<Self, ParcoordsCommonError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<Scalar>)>,
    {
        let mut table = Table::default();
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    /// Build a table from rows. Every row must carry the same set of columns as the first.
    pub fn try_from_rows(rows: &[IndexMap<String, Scalar>]) -> Result<Self, ParcoordsCommonError> {
        let Some(first) = rows.first() else {
            return Ok(Table::default());
        };

        let mut columns: IndexMap<String, Vec<Scalar>> = first
            .keys()
            .map(|name| (name.clone(), Vec::with_capacity(rows.len())))
            .collect();

        for (row_index, row) in rows.iter().enumerate() {
            if let Some(extra) = row.keys().find(|k| !columns.contains_key(*k)) {
                return Err(ParcoordsCommonError::UnexpectedColumnInRow {
                    row: row_index,
                    column: extra.clone(),
                });
            }
            for (name, values) in columns.iter_mut() {
                let value = row.get(name).ok_or_else(|| {
                    ParcoordsCommonError::MissingColumnInRow {
                        row: row_index,
                        column: name.clone(),
                    }
                })?;
                values.push(value.clone());
            }
        }

        Ok(Self {
            columns,
            num_rows: rows.len(),
        })
    }

    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Scalar>,
    ) -> Result<(), ParcoordsCommonError> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(ParcoordsCommonError::DuplicateColumn(name));
        }
        if self.columns.is_empty() {
            self.num_rows = values.len();
        } else if values.len() != self.num_rows {
            return Err(ParcoordsCommonError::ColumnLengthMismatch {
                column: name,
                expected: self.num_rows,
                actual: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&[Scalar]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Like [`Table::column`], failing with the missing column's name
    pub fn try_column(&self, name: &str) -> Result<&[Scalar], ParcoordsCommonError> {
        self.column(name)
            .ok_or_else(|| ParcoordsCommonError::MissingColumn(name.to_string()))
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_try_new() -> Result<(), ParcoordsCommonError> {
        let table = Table::try_new([
            ("a", vec![1.0.into(), 2.0.into()]),
            ("b", vec!["x".into(), "y".into()]),
        ])?;
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(table.column("b").map(|c| c[1].label()), Some("y".to_string()));
        assert!(table.column("c").is_none());
        assert_eq!(
            table.try_column("c"),
            Err(ParcoordsCommonError::MissingColumn("c".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_column_length_mismatch() {
        let result = Table::try_new([
            ("a", vec![1.0.into(), 2.0.into()]),
            ("b", vec!["x".into()]),
        ]);
        assert_eq!(
            result,
            Err(ParcoordsCommonError::ColumnLengthMismatch {
                column: "b".to_string(),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_duplicate_column() {
        let result = Table::try_new([("a", vec![1.0.into()]), ("a", vec![2.0.into()])]);
        assert_eq!(
            result,
            Err(ParcoordsCommonError::DuplicateColumn("a".to_string()))
        );
    }

    fn row(entries: &[(&str, Scalar)]) -> IndexMap<String, Scalar> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_from_rows() -> Result<(), ParcoordsCommonError> {
        let rows = vec![
            row(&[("a", 1.0.into()), ("b", "x".into())]),
            row(&[("b", "y".into()), ("a", 2.0.into())]),
        ];
        let table = Table::try_from_rows(&rows)?;
        assert_eq!(table.num_rows(), 2);
        assert_eq!(
            table.column("a"),
            Some([Scalar::Number(1.0), Scalar::Number(2.0)].as_slice())
        );
        Ok(())
    }

    #[rstest]
    #[case(
        vec![("a", Scalar::Number(2.0))],
        ParcoordsCommonError::MissingColumnInRow { row: 1, column: "b".to_string() }
    )]
    #[case(
        vec![("a", Scalar::Number(2.0)), ("b", Scalar::from("y")), ("c", Scalar::from("z"))],
        ParcoordsCommonError::UnexpectedColumnInRow { row: 1, column: "c".to_string() }
    )]
    fn test_from_rows_shape_errors(
        #[case] second: Vec<(&str, Scalar)>,
        #[case] expected: ParcoordsCommonError,
    ) {
        let rows = vec![row(&[("a", 1.0.into()), ("b", "x".into())]), row(&second)];
        assert_eq!(Table::try_from_rows(&rows), Err(expected));
    }
}
