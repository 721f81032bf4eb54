//! Row store adapters: load the whole roster, write the whole roster back.

mod csv_file;
mod memory;
mod sqlite;

pub use csv_file::CsvStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::roster::{RosterColumns, RosterTable};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Backing store of the roster table.
///
/// Implementations never retry; failures surface as
/// `StoreUnavailable` (load) or `StoreWrite` (save).
pub trait RowStore {
    /// Full roster in store order. A reachable store with no data rows
    /// yields an empty table.
    fn load_table(&mut self) -> AppResult<RosterTable>;

    /// Replace header and all data rows in one step.
    fn save_table(&mut self, table: &RosterTable) -> AppResult<()>;

    /// Human readable location, used in messages and the journal.
    fn describe(&self) -> String;
}

impl<S: RowStore + ?Sized> RowStore for Box<S> {
    fn load_table(&mut self) -> AppResult<RosterTable> {
        (**self).load_table()
    }

    fn save_table(&mut self, table: &RosterTable) -> AppResult<()> {
        (**self).save_table(table)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Csv,
    Sqlite,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Csv => "csv",
            StoreKind::Sqlite => "sqlite",
        }
    }
}

/// Open an existing roster store.
pub fn open_store(
    kind: StoreKind,
    path: &Path,
    columns: &RosterColumns,
) -> AppResult<Box<dyn RowStore>> {
    Ok(match kind {
        StoreKind::Csv => Box::new(CsvStore::new(path, columns.clone())),
        StoreKind::Sqlite => Box::new(SqliteStore::open(path, columns.clone())?),
    })
}

/// Create a roster store holding only the header row.
///
/// Returns `false` when the store already existed and was left untouched.
pub fn create_store(kind: StoreKind, path: &Path, columns: &RosterColumns) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }

    let empty = RosterTable::empty(columns);
    match kind {
        StoreKind::Csv => CsvStore::new(path, columns.clone()).save_table(&empty)?,
        StoreKind::Sqlite => SqliteStore::create(path, columns.clone())?.save_table(&empty)?,
    }
    Ok(true)
}
