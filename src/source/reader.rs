//! Reading delimited-text extracts

use std::path::Path;
use crate::row::RawRow;
use super::error::SourceError;

/// An ordered set of raw rows with an explicit column order
///
/// Column names are upper-cased on read; the order is preserved so joins and
/// writes stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RowSet {
    /// An empty row set with the given column order (names are upper-cased)
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        RowSet {
            columns: columns.iter().map(|c| c.as_ref().to_uppercase()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        let name = name.to_uppercase();
        self.columns.iter().any(|c| *c == name)
    }

    /// Append a column to the order if not already present
    pub fn add_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_uppercase());
        }
    }
}

/// Read a comma-delimited file with a header row into a `RowSet`
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<RowSet, SourceError> {
    let path_str = path.as_ref().display().to_string();
    let mut reader =
        csv::Reader::from_path(path.as_ref()).map_err(|e| SourceError::csv(&path_str, e))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| SourceError::csv(&path_str, e))?
        .iter()
        .map(|h| h.trim().to_uppercase())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SourceError::csv(&path_str, e))?;
        let mut row = RawRow::new();
        for (column, field) in columns.iter().zip(record.iter()) {
            row.insert(column, field);
        }
        rows.push(row);
    }

    Ok(RowSet { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_rows_uppercases_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "rd_no,City,AGE").unwrap();
        writeln!(file, "JC100,CHICAGO,34").unwrap();
        writeln!(file, "JC101,,").unwrap();
        drop(file);

        let set = read_rows(&path).unwrap();
        assert_eq!(set.columns, vec!["RD_NO", "CITY", "AGE"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.rows[0].get("rd_no"), Some("JC100"));
        assert_eq!(set.rows[1].get("CITY"), Some(""));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_rows("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, SourceError::Csv { .. }));
    }

    #[test]
    fn test_add_column_is_idempotent() {
        let mut set = RowSet::new(&["RD_NO"]);
        set.add_column("crash_type");
        set.add_column("CRASH_TYPE");
        assert_eq!(set.columns, vec!["RD_NO", "CRASH_TYPE"]);
    }
}
