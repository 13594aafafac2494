use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_projects: i64,
    pub interested_count: i64,
    pub matches_count: i64,
    pub pending_matches: i64,
    pub active_matches: i64,
    pub profile_completed: bool,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub total: i64,
    pub pending: i64,
    pub active: i64,
    pub completed: i64,
    pub cancelled: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_projects: i64,
    pub draft_projects: i64,
    pub active_projects: i64,
    pub in_progress_projects: i64,
    pub completed_projects: i64,
    pub archived_projects: i64,
    pub total_views: i64,
    pub total_interests: i64,
    pub total_matches: i64,
}
