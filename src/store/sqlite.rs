//! Roster kept in SQLite: one header row plus one row per team, cells
//! stored as a JSON array so arbitrary sheet columns survive.

use crate::errors::{AppError, AppResult};
use crate::models::roster::{RosterColumns, RosterTable};
use crate::store::RowStore;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use std::path::{Path, PathBuf};

pub struct SqliteStore {
    path: PathBuf,
    conn: Connection,
    columns: RosterColumns,
}

fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS roster_header (
            id    INTEGER PRIMARY KEY CHECK (id = 1),
            cells TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS roster (
            position INTEGER PRIMARY KEY,
            cells    TEXT NOT NULL
        );
        "#,
    )
}

/// Whether both roster tables exist, without creating anything.
fn has_schema(conn: &Connection) -> rusqlite::Result<bool> {
    let found: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master
         WHERE type = 'table' AND name IN ('roster_header', 'roster')",
        [],
        |row| row.get(0),
    )?;
    Ok(found == 2)
}

fn decode_cells(raw: &str) -> AppResult<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::StoreUnavailable(format!("corrupt roster row: {e}")))
}

impl SqliteStore {
    /// Open an existing roster database. A missing file, or one that was
    /// never initialised as a roster, is unavailable; nothing is created.
    pub fn open(path: &Path, columns: RosterColumns) -> AppResult<Self> {
        let unavailable = |e: rusqlite::Error| {
            AppError::StoreUnavailable(format!("{}: {e}", path.display()))
        };

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)?;

        if !has_schema(&conn).map_err(unavailable)? {
            return Err(AppError::StoreUnavailable(format!(
                "{}: not a roster database (run `init` first)",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
            conn,
            columns,
        })
    }

    /// Create (or reuse) a roster database at `path`.
    pub fn create(path: &Path, columns: RosterColumns) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        ensure_schema(&conn)?;
        Ok(Self {
            path: path.to_path_buf(),
            conn,
            columns,
        })
    }

    fn read_rows(&self) -> AppResult<Option<(Vec<String>, Vec<Vec<String>>)>> {
        let header: Option<String> = self
            .conn
            .query_row("SELECT cells FROM roster_header WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()?;

        let Some(header) = header else {
            return Ok(None);
        };

        let mut stmt = self
            .conn
            .prepare("SELECT cells FROM roster ORDER BY position ASC")?;
        let raw: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<_>>()?;

        let rows = raw
            .iter()
            .map(|r| decode_cells(r))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Some((decode_cells(&header)?, rows)))
    }

    fn write_rows(&mut self, rows: &[Vec<String>]) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM roster", [])?;
        tx.execute("DELETE FROM roster_header", [])?;

        if let Some((header, data)) = rows.split_first() {
            tx.execute(
                "INSERT INTO roster_header (id, cells) VALUES (1, ?1)",
                params![serde_json::to_string(header)?],
            )?;

            let mut stmt = tx.prepare("INSERT INTO roster (position, cells) VALUES (?1, ?2)")?;
            for (position, row) in data.iter().enumerate() {
                stmt.execute(params![position as i64, serde_json::to_string(row)?])?;
            }
            drop(stmt);
        }

        tx.commit()?;
        Ok(())
    }
}

impl RowStore for SqliteStore {
    fn load_table(&mut self) -> AppResult<RosterTable> {
        let loaded = self.read_rows().map_err(|e| match e {
            AppError::Db(err) => {
                AppError::StoreUnavailable(format!("{}: {err}", self.path.display()))
            }
            other => other,
        })?;

        match loaded {
            None => Ok(RosterTable::empty(&self.columns)),
            Some((header, rows)) => RosterTable::from_rows(header, rows, &self.columns),
        }
    }

    fn save_table(&mut self, table: &RosterTable) -> AppResult<()> {
        let rows = table.to_rows();
        let path = self.path.display().to_string();
        self.write_rows(&rows)
            .map_err(|e| AppError::StoreWrite(format!("{path}: {e}")))
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::team::TeamRecord;
    use tempfile::tempdir;

    fn sample(columns: &RosterColumns) -> RosterTable {
        let mut header = columns.header();
        header.insert(0, "Timestamp".into());
        let rows = vec![
            vec![
                "t1", "a@x", "UIT.One", "A", "B", "1", "C", "2", "Có", "B",
            ],
            vec!["t2", "d@x", "UIT.Two", "D", "E", "3", "F", "4", "", ""],
        ]
        .into_iter()
        .map(|r| r.into_iter().map(String::from).collect())
        .collect();
        RosterTable::from_rows(header, rows, columns).unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.sqlite");
        let columns = RosterColumns::default();

        let mut store = SqliteStore::create(&path, columns.clone()).unwrap();
        assert!(store.load_table().unwrap().is_empty());

        let table = sample(&columns);
        store.save_table(&table).unwrap();

        let mut reopened = SqliteStore::open(&path, columns).unwrap();
        let loaded = reopened.load_table().unwrap();
        assert_eq!(loaded, table);
        assert_eq!(loaded.records[1].team_name, "UIT.Two");
    }

    #[test]
    fn save_replaces_previous_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.sqlite");
        let columns = RosterColumns::default();
        let mut store = SqliteStore::create(&path, columns.clone()).unwrap();

        let mut table = sample(&columns);
        store.save_table(&table).unwrap();
        table.records.truncate(1);
        table.records.push(TeamRecord {
            team_name: "UIT.Three".into(),
            extra: vec!["t3".into()],
            ..Default::default()
        });
        store.save_table(&table).unwrap();

        let loaded = store.load_table().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.records[1].team_name, "UIT.Three");
    }

    #[test]
    fn missing_database_is_unavailable() {
        let dir = tempdir().unwrap();
        let err = SqliteStore::open(&dir.path().join("none.sqlite"), RosterColumns::default())
            .err()
            .unwrap();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[test]
    fn open_never_creates_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blank.sqlite");
        Connection::open(&path).unwrap();

        let err = SqliteStore::open(&path, RosterColumns::default())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            AppError::StoreUnavailable(m) if m.contains("not a roster database")
        ));

        let conn = Connection::open(&path).unwrap();
        assert!(!has_schema(&conn).unwrap());
    }
}
