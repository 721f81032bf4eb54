// src/export/model.rs

use crate::models::roster::RosterTable;
use crate::models::team::TeamRecord;
use serde::Serialize;

/// Flat attendance report row.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AttendanceExport {
    pub row: usize,
    pub team: String,
    pub leader: String,
    pub leader_id: String,
    pub member2: String,
    pub member2_id: String,
    pub member3: String,
    pub member3_id: String,
    pub attendance: String,
    pub absent_members: String,
}

impl AttendanceExport {
    fn from_record(row: usize, rec: &TeamRecord) -> Self {
        Self {
            row,
            team: rec.team_name.clone(),
            leader: rec.leader_name.clone(),
            leader_id: rec.leader_id().unwrap_or_default(),
            member2: rec.member2_name.clone(),
            member2_id: rec.member2_id.clone(),
            member3: rec.member3_name.clone(),
            member3_id: rec.member3_id.clone(),
            attendance: rec.attendance.clone(),
            absent_members: rec.absent_members.clone(),
        }
    }
}

/// Report rows for every team, numbered from 1 in roster order.
pub(crate) fn table_to_export(table: &RosterTable) -> Vec<AttendanceExport> {
    table
        .records
        .iter()
        .enumerate()
        .map(|(i, rec)| AttendanceExport::from_record(i + 1, rec))
        .collect()
}
