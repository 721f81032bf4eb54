use crate::core::matching::extract_leader_id;
use crate::models::role::MemberRole;
use serde::Serialize;

/// One roster row: team identity, three members and the two attendance fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    pub team_name: String,
    pub leader_email: String,
    pub leader_name: String,
    pub member2_name: String,
    pub member3_name: String,
    pub member2_id: String,
    pub member3_id: String,
    pub attendance: String,
    pub absent_members: String,

    /// Cells of columns outside the roster schema, in header order.
    #[serde(skip)]
    pub extra: Vec<String>,
}

impl TeamRecord {
    /// Student id of the leader, taken from the email local part.
    pub fn leader_id(&self) -> Option<String> {
        extract_leader_id(&self.leader_email)
    }

    pub fn member_name(&self, role: MemberRole) -> &str {
        match role {
            MemberRole::Leader => &self.leader_name,
            MemberRole::Member2 => &self.member2_name,
            MemberRole::Member3 => &self.member3_name,
        }
    }

    /// Id shown for a member; the leader id is derived and may be missing.
    pub fn member_id(&self, role: MemberRole) -> Option<String> {
        match role {
            MemberRole::Leader => self.leader_id(),
            MemberRole::Member2 => Some(self.member2_id.clone()),
            MemberRole::Member3 => Some(self.member3_id.clone()),
        }
    }
}
