//! Roster table: typed team records plus the column layout they were
//! loaded with, so a whole-table write reproduces the original sheet.

use crate::errors::{AppError, AppResult};
use crate::models::team::TeamRecord;
use serde::{Deserialize, Serialize};

/// Header names of the roster columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterColumns {
    pub team_name: String,
    pub leader_email: String,
    pub leader_name: String,
    pub member2_name: String,
    pub member3_name: String,
    pub member2_id: String,
    pub member3_id: String,
    pub attendance: String,
    pub absent_members: String,
}

impl Default for RosterColumns {
    fn default() -> Self {
        Self {
            team_name: "Tên đội (phải bắt đầu bằng UIT.)".to_string(),
            leader_email: "Email Address".to_string(),
            leader_name: "Họ và tên của đội trưởng".to_string(),
            member2_name: "Họ và tên của thành viên thứ 2".to_string(),
            member3_name: "Họ và tên của thành viên thứ 3".to_string(),
            member2_id: "MSSV thành viên thứ 2".to_string(),
            member3_id: "MSSV thành viên thứ 3".to_string(),
            attendance: "Điểm danh".to_string(),
            absent_members: "Vắng".to_string(),
        }
    }
}

impl RosterColumns {
    /// Header row for a freshly created roster.
    pub fn header(&self) -> Vec<String> {
        Field::ALL.iter().map(|f| self.name(*f).to_string()).collect()
    }

    fn name(&self, field: Field) -> &str {
        match field {
            Field::TeamName => &self.team_name,
            Field::LeaderEmail => &self.leader_email,
            Field::LeaderName => &self.leader_name,
            Field::Member2Name => &self.member2_name,
            Field::Member3Name => &self.member3_name,
            Field::Member2Id => &self.member2_id,
            Field::Member3Id => &self.member3_id,
            Field::Attendance => &self.attendance,
            Field::AbsentMembers => &self.absent_members,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    TeamName,
    LeaderEmail,
    LeaderName,
    Member2Name,
    Member3Name,
    Member2Id,
    Member3Id,
    Attendance,
    AbsentMembers,
}

impl Field {
    const ALL: [Field; 9] = [
        Field::TeamName,
        Field::LeaderEmail,
        Field::LeaderName,
        Field::Member2Name,
        Field::Member3Name,
        Field::Member2Id,
        Field::Member3Id,
        Field::Attendance,
        Field::AbsentMembers,
    ];

    /// Attendance columns may be missing from a fresh form export.
    fn required(&self) -> bool {
        !matches!(self, Field::Attendance | Field::AbsentMembers)
    }

    fn get(self, rec: &TeamRecord) -> &str {
        match self {
            Field::TeamName => &rec.team_name,
            Field::LeaderEmail => &rec.leader_email,
            Field::LeaderName => &rec.leader_name,
            Field::Member2Name => &rec.member2_name,
            Field::Member3Name => &rec.member3_name,
            Field::Member2Id => &rec.member2_id,
            Field::Member3Id => &rec.member3_id,
            Field::Attendance => &rec.attendance,
            Field::AbsentMembers => &rec.absent_members,
        }
    }

    fn set(self, rec: &mut TeamRecord, value: String) {
        let slot = match self {
            Field::TeamName => &mut rec.team_name,
            Field::LeaderEmail => &mut rec.leader_email,
            Field::LeaderName => &mut rec.leader_name,
            Field::Member2Name => &mut rec.member2_name,
            Field::Member3Name => &mut rec.member3_name,
            Field::Member2Id => &mut rec.member2_id,
            Field::Member3Id => &mut rec.member3_id,
            Field::Attendance => &mut rec.attendance,
            Field::AbsentMembers => &mut rec.absent_members,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Roster(Field),
    Extra,
}

/// Header row and what each column holds.
#[derive(Debug, Clone)]
pub struct RosterLayout {
    header: Vec<String>,
    slots: Vec<Slot>,
    /// Columns present in the stored header; later slots were appended.
    stored: usize,
}

// Two layouts are the same sheet shape whether or not the attendance
// columns were already stored.
impl PartialEq for RosterLayout {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.slots == other.slots
    }
}

impl Eq for RosterLayout {}

impl RosterLayout {
    /// Resolve every roster field against a header row.
    ///
    /// Missing required columns fail; missing attendance columns are
    /// appended so the next save creates them.
    pub fn resolve(header: Vec<String>, columns: &RosterColumns) -> AppResult<Self> {
        let mut header = header;
        let stored = header.len();
        let mut slots = vec![Slot::Extra; stored];

        for field in Field::ALL {
            let name = columns.name(field);
            let found = header
                .iter()
                .enumerate()
                .find(|(i, h)| h.trim() == name.trim() && slots[*i] == Slot::Extra)
                .map(|(i, _)| i);

            match found {
                Some(i) => slots[i] = Slot::Roster(field),
                None if field.required() => {
                    return Err(AppError::MissingColumn(name.to_string()));
                }
                None => {
                    header.push(name.to_string());
                    slots.push(Slot::Roster(field));
                }
            }
        }

        Ok(Self {
            header,
            slots,
            stored,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Build a record from a raw row; short rows are padded with blanks.
    ///
    /// Appended columns start empty: a cell past the stored header belongs
    /// to an unheaded column and is kept in `extra`, never read as a field.
    pub fn record_from_row(&self, row: &[String]) -> TeamRecord {
        let mut rec = TeamRecord::default();

        for (i, slot) in self.slots.iter().enumerate() {
            let cell = if i < self.stored {
                row.get(i).cloned().unwrap_or_default()
            } else {
                String::new()
            };
            match slot {
                Slot::Roster(field) => field.set(&mut rec, cell),
                Slot::Extra => rec.extra.push(cell),
            }
        }

        if row.len() > self.stored {
            rec.extra.extend(row[self.stored..].iter().cloned());
        }

        rec
    }

    /// Inverse of [`record_from_row`](Self::record_from_row).
    pub fn row_from_record(&self, rec: &TeamRecord) -> Vec<String> {
        let mut extras = rec.extra.iter();
        let mut row: Vec<String> = self
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Roster(field) => field.get(rec).to_string(),
                Slot::Extra => extras.next().cloned().unwrap_or_default(),
            })
            .collect();
        row.extend(extras.cloned());
        row
    }
}

/// The full in-memory roster, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterTable {
    pub layout: RosterLayout,
    pub records: Vec<TeamRecord>,
}

impl RosterTable {
    pub fn empty(columns: &RosterColumns) -> Self {
        Self {
            layout: RosterLayout {
                header: columns.header(),
                slots: Field::ALL.iter().map(|f| Slot::Roster(*f)).collect(),
                stored: Field::ALL.len(),
            },
            records: Vec::new(),
        }
    }

    /// Build a table from a header row and data rows as a store returns them.
    pub fn from_rows(
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        columns: &RosterColumns,
    ) -> AppResult<Self> {
        let layout = RosterLayout::resolve(header, columns)?;
        let records = rows.iter().map(|r| layout.record_from_row(r)).collect();
        Ok(Self { layout, records })
    }

    /// Header row followed by every data row, in table order.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.records.len() + 1);
        out.push(self.layout.header().to_vec());
        out.extend(self.records.iter().map(|r| self.layout.row_from_record(r)));
        out
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&TeamRecord> {
        self.records.get(position)
    }
}
