use crate::core::attendance::{MarkPolicy, apply_attendance};
use crate::core::matching::{Query, TeamMatch, match_records};
use crate::errors::{AppError, AppResult};
use crate::models::role::MemberRole;
use crate::models::roster::RosterTable;
use crate::store::RowStore;
use std::collections::BTreeSet;

/// One lookup/check-in cycle against a row store.
///
/// `search` loads the roster fresh and keeps it; `commit` edits that
/// snapshot and writes the whole table back once.
pub struct AttendanceSession<S: RowStore> {
    store: S,
    policy: MarkPolicy,
    table: Option<RosterTable>,
}

impl<S: RowStore> AttendanceSession<S> {
    pub fn new(store: S, policy: MarkPolicy) -> Self {
        Self {
            store,
            policy,
            table: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> &MarkPolicy {
        &self.policy
    }

    /// Roster loaded by the last search or commit.
    pub fn table(&self) -> Option<&RosterTable> {
        self.table.as_ref()
    }

    /// Load the roster without searching it.
    pub fn load(&mut self) -> AppResult<&RosterTable> {
        let table = self.store.load_table()?;
        Ok(&*self.table.insert(table))
    }

    /// All teams matching `query`, in roster order.
    pub fn search(&mut self, query: &str) -> AppResult<Vec<TeamMatch>> {
        let query = Query::parse(query)?;
        let table = self.load()?;
        Ok(match_records(&query, table))
    }

    /// First team matching `query`.
    pub fn find_team(&mut self, query: &str) -> AppResult<TeamMatch> {
        self.search(query)?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(query.trim().to_string()))
    }

    /// Check in the team at `position` of the last loaded roster.
    pub fn commit(
        &mut self,
        position: usize,
        absentees: &BTreeSet<MemberRole>,
    ) -> AppResult<RosterTable> {
        let current = self
            .table
            .as_ref()
            .ok_or(AppError::StaleReference(position))?;

        let updated = apply_attendance(position, absentees, current, &self.policy)?;
        self.store.save_table(&updated)?;
        self.table = Some(updated.clone());
        Ok(updated)
    }

    /// Search, then check in the first matching team.
    pub fn check_in(
        &mut self,
        query: &str,
        absentees: &BTreeSet<MemberRole>,
    ) -> AppResult<(TeamMatch, RosterTable)> {
        let found = self.find_team(query)?;
        let table = self.commit(found.position, absentees)?;
        Ok((found, table))
    }
}
