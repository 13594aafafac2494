use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String, // unique, lowercased by the identity provider
    pub name: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub contact_email: String,
    pub contact_whatsapp: Option<String>,
    pub contact_telegram: Option<String>,
    pub github_profile: Option<String>,
    pub portfolio_url: Option<String>,
    pub experience: Experience,
    pub interests: Vec<String>,
    pub profile_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: String, image: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            contact_email: email.clone(),
            email,
            name,
            image,
            bio: None,
            skills: vec![],
            location: None,
            contact_whatsapp: None,
            contact_telegram: None,
            github_profile: None,
            portfolio_url: None,
            experience: Experience::Beginner,
            interests: vec![],
            profile_completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for Experience {
    fn default() -> Self {
        Experience::Beginner
    }
}
