use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Payload returned by the swipe endpoint the instant a match is formed,
/// denormalized for immediate display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPush {
    pub match_id: i32,
    pub project_title: String,
    pub other_user_name: String,
    pub other_user_email: Option<String>,
}

impl MatchPush {
    pub fn new(
        record: &models::Match,
        project: &models::Project,
        other_user: Option<&models::User>,
    ) -> Self {
        Self {
            match_id: record.id,
            project_title: project.title.clone(),
            other_user_name: other_user
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "Another developer".to_string()),
            other_user_email: other_user.map(|u| u.contact_email.clone()),
        }
    }
}

/// One row of the caller's match list, joined with the project and the
/// other participant's contact card.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchCard {
    pub id: i32,
    pub project_id: i32,
    pub project_title: String,
    pub tech_stack: Vec<String>,
    pub status: models::MatchStatus,
    pub matched_at: DateTime<Utc>,
    pub conversation_started: bool,
    pub notes: Option<String>,
    pub other_user_name: String,
    pub other_user_email: String,
    pub other_user_whatsapp: Option<String>,
    pub other_user_telegram: Option<String>,
}

/// A match row as exposed to its participants.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchItem {
    pub id: i32,
    pub project_id: i32,
    pub other_user_id: Uuid,
    pub status: models::MatchStatus,
    pub matched_at: DateTime<Utc>,
    pub conversation_started: bool,
    pub notes: Option<String>,
}

impl MatchItem {
    pub fn for_participant(record: &models::Match, viewer_id: Uuid) -> Self {
        Self {
            id: record.id,
            project_id: record.project_id,
            other_user_id: record.other_participant(viewer_id),
            status: record.status,
            matched_at: record.matched_at,
            conversation_started: record.conversation_started,
            notes: record.notes.clone(),
        }
    }
}
