use std::io::Read;
use std::path::Path;

use anyhow::Context;
use parcoords::common::table::Table;
use parcoords::common::value::Scalar;

/// Load a CSV file with a header row. Cells that parse as finite numbers become numeric.
pub fn load_csv(path: &Path) -> anyhow::Result<Table> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    read_table(reader)
}

pub fn read_table<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Table> {
    let headers = reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(String::from)
        .collect::<Vec<_>>();

    let mut columns: Vec<Vec<Scalar>> = vec![Vec::new(); headers.len()];
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV record {row}"))?;
        for (column, cell) in columns.iter_mut().zip(record.iter()) {
            column.push(Scalar::parse_cell(cell));
        }
    }

    Ok(Table::try_new(headers.into_iter().zip(columns))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table() -> anyhow::Result<()> {
        let data = "a,b\n1,x\n2.5,y\n";
        let table = read_table(csv::Reader::from_reader(data.as_bytes()))?;
        assert_eq!(table.num_rows(), 2);
        assert_eq!(
            table.column("a"),
            Some([Scalar::Number(1.0), Scalar::Number(2.5)].as_slice())
        );
        assert_eq!(table.column("b").map(|c| c[1].label()), Some("y".to_string()));
        Ok(())
    }

    #[test]
    fn test_ragged_rows_fail() {
        let data = "a,b\n1,x\n2\n";
        assert!(read_table(csv::Reader::from_reader(data.as_bytes())).is_err());
    }
}
