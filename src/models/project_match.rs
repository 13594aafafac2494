use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mutual interest between two users on one project. The pair is
/// symmetric; rows are stored with `user1_id < user2_id` so the unique
/// index on (project_id, user1_id, user2_id) covers both orientations.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i32,
    pub project_id: i32,
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub status: MatchStatus,
    pub matched_at: DateTime<Utc>,
    pub conversation_started: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }

    /// Whichever of the two participants is not the known one.
    pub fn other_participant(&self, known_user_id: Uuid) -> Uuid {
        if self.user1_id == known_user_id {
            self.user2_id
        } else {
            self.user1_id
        }
    }
}

/// Stores a user pair in canonical order.
pub fn normalize_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl MatchStatus {
    /// pending -> active -> completed; pending -> cancelled.
    /// Completed and cancelled are terminal.
    pub fn can_transition_to(self, next: MatchStatus) -> bool {
        matches!(
            (self, next),
            (MatchStatus::Pending, MatchStatus::Active)
                | (MatchStatus::Pending, MatchStatus::Cancelled)
                | (MatchStatus::Active, MatchStatus::Completed)
        )
    }
}

impl Default for MatchStatus {
    fn default() -> Self {
        MatchStatus::Pending
    }
}
