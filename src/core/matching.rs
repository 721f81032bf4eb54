//! Team lookup: a free-text query matched against ids, email, team name
//! and member names.

use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterTable;
use crate::models::team::TeamRecord;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("static regex is valid"));

/// A validated, non-empty lookup query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    folded: String,
}

impl Query {
    /// Trim the input; an empty query is a user error, never "match all".
    pub fn parse(input: &str) -> AppResult<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(AppError::Input("search query must not be empty".into()));
        }
        Ok(Self {
            raw: raw.to_string(),
            folded: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Exact comparison for id columns.
    fn equals_id(&self, id: &str) -> bool {
        !id.trim().is_empty() && id.trim() == self.raw
    }

    /// Case-insensitive literal substring test for text columns.
    fn found_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }

    pub fn matches(&self, rec: &TeamRecord) -> bool {
        self.equals_id(&rec.member2_id)
            || self.equals_id(&rec.member3_id)
            || self.found_in(&rec.leader_email)
            || self.found_in(&rec.team_name)
            || self.found_in(&rec.leader_name)
            || self.found_in(&rec.member2_name)
            || self.found_in(&rec.member3_name)
    }
}

/// A matched record together with its index in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMatch {
    pub position: usize,
    pub record: TeamRecord,
}

/// Every record matching the query, in table order.
///
/// The first element is the team an edit applies to.
pub fn match_records(query: &Query, table: &RosterTable) -> Vec<TeamMatch> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| query.matches(rec))
        .map(|(position, rec)| TeamMatch {
            position,
            record: rec.clone(),
        })
        .collect()
}

/// Leader student id: the first run of exactly 8 or 9 digits in the
/// local part of the email.
pub fn extract_leader_id(email: &str) -> Option<String> {
    let local = email.split('@').next().unwrap_or_default();
    DIGIT_RUN
        .find_iter(local)
        .map(|m| m.as_str())
        .find(|run| (8..=9).contains(&run.len()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roster::RosterColumns;

    fn team(name: &str, email: &str, members: [&str; 3], ids: [&str; 2]) -> TeamRecord {
        TeamRecord {
            team_name: name.into(),
            leader_email: email.into(),
            leader_name: members[0].into(),
            member2_name: members[1].into(),
            member3_name: members[2].into(),
            member2_id: ids[0].into(),
            member3_id: ids[1].into(),
            ..Default::default()
        }
    }

    fn table(records: Vec<TeamRecord>) -> RosterTable {
        let mut t = RosterTable::empty(&RosterColumns::default());
        t.records = records;
        t
    }

    fn sample() -> RosterTable {
        table(vec![
            team(
                "UIT.Team1",
                "21520001@gm.uit.edu.vn",
                ["Nguyễn Văn An", "Trần Bình", "Lê Chi"],
                ["21520002", "21520003"],
            ),
            team(
                "UIT.Team2",
                "21520101@gm.uit.edu.vn",
                ["Phạm Dũng", "Võ An", "Đỗ Hà"],
                ["21520102", "21520103"],
            ),
            team(
                "UIT.C++ (a.*)",
                "coder@gmail.com",
                ["Hồ Khoa", "Mai Lan", "Bùi Minh"],
                ["215201", " 21520203 "],
            ),
        ])
    }

    fn positions(q: &str, t: &RosterTable) -> Vec<usize> {
        match_records(&Query::parse(q).unwrap(), t)
            .into_iter()
            .map(|m| m.position)
            .collect()
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(matches!(Query::parse(""), Err(AppError::Input(_))));
        assert!(matches!(Query::parse("   \t"), Err(AppError::Input(_))));
    }

    #[test]
    fn id_match_is_exact() {
        let t = sample();
        assert_eq!(positions("21520002", &t), vec![0]);
        assert_eq!(positions(" 21520103 ", &t), vec![1]);
        assert_eq!(positions("21520203", &t), vec![2]);
        // part of an id is not an id match
        assert!(positions("20002", &t).is_empty());
        assert!(positions("21520", &t).len() == 2);
    }

    #[test]
    fn text_match_ignores_case() {
        let t = sample();
        assert_eq!(positions("uit.team1", &t), positions("UIT.TEAM1", &t));
        assert_eq!(positions("uit.team1", &t), vec![0]);
        assert_eq!(positions("NGUYỄN", &t), vec![0]);
        assert_eq!(positions("gm.uit", &t), vec![0, 1]);
    }

    #[test]
    fn any_member_name_matches_and_order_is_kept() {
        let t = sample();
        assert_eq!(positions("an", &t), vec![0, 1, 2]);
        assert_eq!(positions("Đỗ Hà", &t), vec![1]);
        assert_eq!(positions("bùi", &t), vec![2]);
    }

    #[test]
    fn pattern_characters_are_literal() {
        let t = sample();
        assert_eq!(positions("C++", &t), vec![2]);
        assert_eq!(positions("(a.*)", &t), vec![2]);
        assert!(positions(".*", &t).len() == 1);
        assert!(positions("[", &t).is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(positions("UIT.Omega", &sample()).is_empty());
    }

    #[test]
    fn leader_id_extraction() {
        assert_eq!(
            extract_leader_id("12345678@example.edu").as_deref(),
            Some("12345678")
        );
        assert_eq!(
            extract_leader_id("sv.215200019@gm.uit.edu.vn").as_deref(),
            Some("215200019")
        );
        assert_eq!(extract_leader_id("no-id-here@example.edu"), None);
        // runs of the wrong length are ignored, digits in the domain too
        assert_eq!(extract_leader_id("1234567@123456789.edu"), None);
        assert_eq!(extract_leader_id("1234567890@x.edu"), None);
        assert_eq!(extract_leader_id(""), None);
    }
}
