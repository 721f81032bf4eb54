use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Role of a member inside a team.
///
/// The derived ordering (leader, member2, member3) is the order used when
/// absent members are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum)]
pub enum MemberRole {
    #[value(alias = "l")]
    Leader,
    #[value(alias = "2")]
    Member2,
    #[value(alias = "3")]
    Member3,
}

impl MemberRole {
    pub const ALL: [MemberRole; 3] = [MemberRole::Leader, MemberRole::Member2, MemberRole::Member3];

    pub fn code(&self) -> &'static str {
        match self {
            MemberRole::Leader => "leader",
            MemberRole::Member2 => "member2",
            MemberRole::Member3 => "member3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Leader => "Leader",
            MemberRole::Member2 => "Member 2",
            MemberRole::Member3 => "Member 3",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn parses_codes_and_aliases() {
        let parse = |s: &str| <MemberRole as ValueEnum>::from_str(s, true);
        assert_eq!(parse("Leader").unwrap(), MemberRole::Leader);
        assert_eq!(parse("2").unwrap(), MemberRole::Member2);
        assert_eq!(parse("member3").unwrap(), MemberRole::Member3);
        assert!(parse("coach").is_err());
    }

    #[test]
    fn set_iterates_in_team_order() {
        let set: BTreeSet<_> = [MemberRole::Member3, MemberRole::Leader, MemberRole::Member2]
            .into_iter()
            .collect();
        let order: Vec<_> = set.into_iter().collect();
        assert_eq!(order, MemberRole::ALL.to_vec());
    }
}
