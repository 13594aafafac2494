use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Listings created with the nil uuid belong to the seed catalog rather
/// than to a user; they never count against anyone's active-project cap.
pub const SYSTEM_OWNER: Uuid = Uuid::nil();

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub category: Category,
    pub difficulty: Difficulty,
    pub estimated_duration: String, // e.g. "2-4 weeks", "1-2 months"
    pub created_by: Uuid,
    pub is_active: bool,
    pub is_predefined: bool,
    pub status: ProjectStatus,
    // denormalized display statistics, approximate by design
    pub view_count: i32,
    pub interest_count: i32,
    pub match_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.created_by == user_id
    }
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "varchar", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fullstack,
    Frontend,
    Backend,
    Mobile,
    DataScience,
    MachineLearning,
    Ai,
    Blockchain,
    Devops,
    Other,
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "varchar", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Draft,
    Active,
    InProgress,
    Completed,
    Archived,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Active
    }
}
