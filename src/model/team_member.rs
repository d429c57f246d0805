use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const DEFAULT_ROLE: &str = "member";

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTeamMember {
    pub team_id: Uuid,
    pub user_id: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamMemberPatch {
    pub team_id: Option<Uuid>,
    pub role: Option<String>,
}

impl TeamMemberPatch {
    pub fn is_empty(&self) -> bool {
        self.team_id.is_none() && self.role.is_none()
    }

    pub fn apply_to(&self, member: &mut TeamMember) {
        if let Some(team_id) = self.team_id {
            member.team_id = team_id;
        }
        if let Some(role) = &self.role {
            member.role = role.clone();
        }
    }
}
