use crate::errors::{AppError, AppResult};
use crate::models::roster::{RosterColumns, RosterTable};
use crate::store::RowStore;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Roster kept in a CSV file whose first row is the header.
pub struct CsvStore {
    path: PathBuf,
    columns: RosterColumns,
}

impl CsvStore {
    pub fn new(path: &Path, columns: RosterColumns) -> Self {
        Self {
            path: path.to_path_buf(),
            columns,
        }
    }

    /// Sibling file the new contents are written to before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_rows(&self, target: &Path, rows: &[Vec<String>]) -> Result<(), csv::Error> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(target)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn unavailable(path: &Path, e: impl Display) -> AppError {
    AppError::StoreUnavailable(format!("{}: {e}", path.display()))
}

impl RowStore for CsvStore {
    fn load_table(&mut self) -> AppResult<RosterTable> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| unavailable(&self.path, e))?;

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(|e| unavailable(&self.path, e))?;
            rows.push(rec.iter().map(str::to_string).collect::<Vec<_>>());
        }

        if rows.is_empty() {
            return Ok(RosterTable::empty(&self.columns));
        }

        let mut header = rows.remove(0);
        // spreadsheet exports often start with a byte order mark
        if let Some(first) = header.first_mut() {
            *first = first.trim_start_matches('\u{feff}').to_string();
        }

        RosterTable::from_rows(header, rows, &self.columns)
    }

    fn save_table(&mut self, table: &RosterTable) -> AppResult<()> {
        let staging = self.staging_path();

        self.write_rows(&staging, &table.to_rows()).map_err(|e| {
            let _ = fs::remove_file(&staging);
            AppError::StoreWrite(format!("{}: {e}", staging.display()))
        })?;

        fs::rename(&staging, &self.path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            AppError::StoreWrite(format!("{}: {e}", self.path.display()))
        })?;

        Ok(())
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
