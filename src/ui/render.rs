//! Text views of teams and of the whole roster.

use crate::core::attendance::MarkPolicy;
use crate::core::matching::TeamMatch;
use crate::models::role::MemberRole;
use crate::models::roster::RosterTable;
use crate::utils::colors::{colorize_absent, colorize_attendance};
use crate::utils::table::{Column, Table};

/// Detail card of one team: identity, members with ids, attendance state.
///
/// `active` flags the team a check-in with the same query would pick.
pub fn team_card(m: &TeamMatch, active: bool, policy: &MarkPolicy) -> String {
    let rec = &m.record;
    let mut out = String::new();

    out.push_str(&format!(
        "Team     : {}  (row #{}){}\n",
        rec.team_name,
        m.position + 1,
        if active { " [active]" } else { "" }
    ));
    out.push_str(&format!("Email    : {}\n", rec.leader_email));
    out.push_str(&format!(
        "Attended : {}\n",
        colorize_attendance(&rec.attendance, &policy.present_marker)
    ));
    out.push_str(&format!(
        "Absent   : {}\n\n",
        colorize_absent(&rec.absent_members, &policy.absent_none)
    ));

    let mut table = Table::new(vec![
        Column::new("Role"),
        Column::new("Name"),
        Column::new("Student id"),
    ]);
    for role in MemberRole::ALL {
        table.add_row(vec![
            role.label().to_string(),
            rec.member_name(role).to_string(),
            rec.member_id(role).unwrap_or_else(|| "--".to_string()),
        ]);
    }
    out.push_str(&table.render());
    out
}

/// One line per team, in roster order.
pub fn roster_table(table: &RosterTable, policy: &MarkPolicy) -> String {
    let mut view = Table::new(vec![
        Column::new("#"),
        Column::new("Team"),
        Column::new("Leader"),
        Column::new("Leader id"),
        Column::new("Attended"),
        Column::new("Absent"),
    ]);

    for (i, rec) in table.records.iter().enumerate() {
        view.add_row(vec![
            (i + 1).to_string(),
            rec.team_name.clone(),
            rec.leader_name.clone(),
            rec.leader_id().unwrap_or_else(|| "--".to_string()),
            colorize_attendance(&rec.attendance, &policy.present_marker),
            colorize_absent(&rec.absent_members, &policy.absent_none),
        ]);
    }

    view.render()
}
