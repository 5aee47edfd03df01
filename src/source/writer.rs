//! Writing mart tables atomically

use std::fs;
use std::path::Path;
use super::error::SourceError;

/// Write a table to `path` with the given header, atomically
///
/// Rows are written to a temporary sibling first and renamed into place, so
/// an abort mid-write never leaves a partial table behind.
pub fn write_table<P, R, F>(path: P, header: &[String], rows: R) -> Result<(), SourceError>
where
    P: AsRef<Path>,
    R: IntoIterator<Item = F>,
    F: IntoIterator<Item = String>,
{
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let tmp = path.with_extension("csv.tmp");
    let tmp_str = tmp.display().to_string();

    let mut writer = csv::Writer::from_path(&tmp).map_err(|e| SourceError::csv(&tmp_str, e))?;
    writer
        .write_record(header)
        .map_err(|e| SourceError::csv(&tmp_str, e))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| SourceError::csv(&tmp_str, e))?;
    }
    writer.flush().map_err(|e| SourceError::io(&tmp_str, e))?;
    drop(writer);

    fs::rename(&tmp, path).map_err(|e| SourceError::io(&path_str, e))
}
