// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::table_to_export;
use crate::export::{AttendanceExport, ExportFormat, notify_export_success};
use crate::models::roster::RosterTable;
use crate::ui::messages::{info, warning};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Attendance report writer.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the attendance report of `table` to `file`.
    ///
    /// With `only_attended` set to the present marker, teams not checked
    /// in are left out. Returns the number of rows written; an empty
    /// report touches nothing on disk.
    pub fn export(
        table: &RosterTable,
        format: ExportFormat,
        file: &Path,
        only_attended: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        if file.as_os_str().is_empty() {
            return Err(AppError::Export("output file path is empty".into()));
        }

        let mut rows = table_to_export(table);
        if let Some(marker) = only_attended {
            rows.retain(|r| r.attendance.trim() == marker.trim());
        }

        if rows.is_empty() {
            warning("No teams to export.");
            return Ok(0);
        }

        if !confirm_overwrite(file, force, &mut io::stdin().lock())? {
            return Err(AppError::Export(
                "export cancelled: existing file not overwritten".into(),
            ));
        }

        info(format!(
            "Exporting {} teams to {}: {}",
            rows.len(),
            format.as_str().to_uppercase(),
            file.display()
        ));
        match format {
            ExportFormat::Csv => write_csv(&rows, file)?,
            ExportFormat::Json => write_json(&rows, file)?,
        }
        notify_export_success(&format.as_str().to_uppercase(), file, rows.len());

        Ok(rows.len())
    }
}

/// Whether `path` may be (over)written. An existing file needs `force`
/// or a yes on `input`.
fn confirm_overwrite(path: &Path, force: bool, input: &mut impl BufRead) -> AppResult<bool> {
    if force || !path.exists() {
        return Ok(true);
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let yes = matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes");
    if yes {
        info("Existing file will be overwritten.");
    }
    Ok(yes)
}

fn write_csv(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, rows)?;
    file.write_all(b"\n")?;
    Ok(())
}
