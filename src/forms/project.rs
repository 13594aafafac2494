use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    #[validate(min_length = 3)]
    #[validate(max_length = 100)]
    pub title: String,
    #[validate(min_length = 50)]
    #[validate(max_length = 1000)]
    pub description: String,
    #[validate(min_items = 1)]
    #[validate(max_items = 15)]
    pub tech_stack: Vec<String>,
    pub category: models::Category,
    pub difficulty: models::Difficulty,
    pub estimated_duration: Option<String>,
}

impl ProjectForm {
    pub fn into_model(self, created_by: Uuid) -> models::Project {
        models::Project {
            id: 0,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            tech_stack: self
                .tech_stack
                .into_iter()
                .map(|tech| tech.trim().to_string())
                .collect(),
            category: self.category,
            difficulty: self.difficulty,
            estimated_duration: self
                .estimated_duration
                .unwrap_or_else(|| "2-4 weeks".to_string()),
            created_by,
            is_active: true,
            is_predefined: false,
            status: models::ProjectStatus::Active,
            view_count: 0,
            interest_count: 0,
            match_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateForm {
    #[validate(min_length = 3)]
    #[validate(max_length = 100)]
    pub title: Option<String>,
    #[validate(min_length = 50)]
    #[validate(max_length = 1000)]
    pub description: Option<String>,
    #[validate(min_items = 1)]
    #[validate(max_items = 15)]
    pub tech_stack: Option<Vec<String>>,
    pub category: Option<models::Category>,
    pub difficulty: Option<models::Difficulty>,
    pub estimated_duration: Option<String>,
    pub status: Option<models::ProjectStatus>,
}

impl ProjectUpdateForm {
    pub fn apply_to(self, project: &mut models::Project) {
        if let Some(title) = self.title {
            project.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            project.description = description.trim().to_string();
        }
        if let Some(tech_stack) = self.tech_stack {
            project.tech_stack = tech_stack
                .into_iter()
                .map(|tech| tech.trim().to_string())
                .collect();
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(difficulty) = self.difficulty {
            project.difficulty = difficulty;
        }
        if let Some(estimated_duration) = self.estimated_duration {
            project.estimated_duration = estimated_duration;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
    }
}
