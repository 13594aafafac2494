use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One swipe decision. The ledger holds exactly one row per
/// (user, project); a re-swipe overwrites `interested` in place.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub id: i32,
    pub user_id: Uuid,
    pub project_id: i32,
    pub interested: bool, // true for swipe right, false for swipe left
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
