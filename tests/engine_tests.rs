use rattendance::errors::AppError;
use rattendance::store::{CsvStore, MemoryStore, RowStore};
use rattendance::{AttendanceSession, MarkPolicy, MemberRole, RosterColumns, RosterTable};
use std::collections::BTreeSet;
use std::fs;

mod common;
use common::{FORM_CSV, Workspace, read};

fn csv_session(ws: &Workspace) -> AttendanceSession<CsvStore> {
    AttendanceSession::new(
        CsvStore::new(&ws.roster, RosterColumns::default()),
        MarkPolicy::default(),
    )
}

#[test]
fn save_of_loaded_table_keeps_contents() {
    let ws = Workspace::with_form_csv();
    let mut store = CsvStore::new(&ws.roster, RosterColumns::default());

    let before = store.load_table().unwrap();
    store.save_table(&before).unwrap();
    let after = store.load_table().unwrap();

    assert_eq!(before, after);
    // only the appended attendance columns differ on disk
    for (orig, saved) in FORM_CSV.lines().zip(read(&ws.roster).lines()).skip(1) {
        assert_eq!(format!("{orig},,"), saved);
    }
}

#[test]
fn scenario_lookup_by_member_id_then_commit() {
    let ws = Workspace::with_form_csv();
    let mut session = csv_session(&ws);

    let found = session.search("21520002").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].record.team_name, "UIT.Alpha");
    assert_eq!(found[0].record.leader_id().as_deref(), Some("21520001"));

    let roles: BTreeSet<_> = [MemberRole::Member2].into_iter().collect();
    session.commit(found[0].position, &roles).unwrap();

    let reloaded = CsvStore::new(&ws.roster, RosterColumns::default())
        .load_table()
        .unwrap();
    assert_eq!(reloaded.records[0].attendance, "Có");
    assert_eq!(reloaded.records[0].absent_members, "Trần Bình");
}

#[test]
fn commit_after_roster_shrinks_is_stale() {
    let ws = Workspace::with_form_csv();
    let mut session = csv_session(&ws);

    let found = session.search("UIT.Beta").unwrap();
    assert_eq!(found[0].position, 2);

    // a fresh session over a shorter roster cannot reuse the old position
    let short: String = FORM_CSV.lines().take(2).map(|l| format!("{l}\n")).collect();
    fs::write(&ws.roster, short).unwrap();
    let mut fresh = csv_session(&ws);
    fresh.search("UIT").unwrap();

    assert!(matches!(
        fresh.commit(found[0].position, &BTreeSet::new()),
        Err(AppError::StaleReference(2))
    ));
}

#[test]
fn custom_markers_are_written() {
    let mut table = RosterTable::empty(&RosterColumns::default());
    table.records.push(rattendance::TeamRecord {
        team_name: "UIT.Solo".into(),
        leader_name: "Khoa".into(),
        ..Default::default()
    });

    let policy = MarkPolicy {
        present_marker: "Yes".into(),
        absent_none: "none".into(),
    };
    let mut session = AttendanceSession::new(MemoryStore::new(table), policy);
    let (found, updated) = session.check_in("solo", &BTreeSet::new()).unwrap();

    assert_eq!(found.position, 0);
    assert_eq!(updated.records[0].attendance, "Yes");
    assert_eq!(updated.records[0].absent_members, "none");
    assert_eq!(session.store().saves, 1);
}
