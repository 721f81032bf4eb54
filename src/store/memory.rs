use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterTable;
use crate::store::RowStore;

/// In-memory roster, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub table: Option<RosterTable>,
    pub loads: usize,
    pub saves: usize,
    pub fail_load: bool,
    pub fail_save: bool,
}

impl MemoryStore {
    pub fn new(table: RosterTable) -> Self {
        Self {
            table: Some(table),
            ..Default::default()
        }
    }
}

impl RowStore for MemoryStore {
    fn load_table(&mut self) -> AppResult<RosterTable> {
        self.loads += 1;
        if self.fail_load {
            return Err(AppError::StoreUnavailable("memory store offline".into()));
        }
        self.table
            .clone()
            .ok_or_else(|| AppError::StoreUnavailable("memory store is empty".into()))
    }

    fn save_table(&mut self, table: &RosterTable) -> AppResult<()> {
        if self.fail_save {
            return Err(AppError::StoreWrite("memory store is read-only".into()));
        }
        self.saves += 1;
        self.table = Some(table.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
