use crate::errors::{AppError, AppResult};
use crate::models::role::MemberRole;
use crate::models::roster::RosterTable;
use crate::models::team::TeamRecord;
use std::collections::BTreeSet;

/// Literal values written by a check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkPolicy {
    /// Written to the attendance column of a checked-in team.
    pub present_marker: String,
    /// Written to the absent-members column when nobody is absent.
    pub absent_none: String,
}

impl Default for MarkPolicy {
    fn default() -> Self {
        Self {
            present_marker: "Có".to_string(),
            absent_none: String::new(),
        }
    }
}

/// Names of the absent members, joined in leader/member2/member3 order.
///
/// The sentinel stands only for an empty role set; names are written as
/// stored, blank ones left out.
pub fn absent_names(
    rec: &TeamRecord,
    absentees: &BTreeSet<MemberRole>,
    policy: &MarkPolicy,
) -> String {
    if absentees.is_empty() {
        return policy.absent_none.clone();
    }

    absentees
        .iter()
        .map(|role| rec.member_name(*role))
        .filter(|name| !name.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Mark the record at `position` as present and record its absent members.
///
/// Only the two attendance fields of that one record change; the rest of
/// the table is returned as is.
pub fn apply_attendance(
    position: usize,
    absentees: &BTreeSet<MemberRole>,
    table: &RosterTable,
    policy: &MarkPolicy,
) -> AppResult<RosterTable> {
    let rec = table
        .get(position)
        .ok_or(AppError::StaleReference(position))?;

    let absent = absent_names(rec, absentees, policy);

    let mut updated = table.clone();
    let target = &mut updated.records[position];
    target.attendance = policy.present_marker.clone();
    target.absent_members = absent;

    Ok(updated)
}
