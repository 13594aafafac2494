use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Profile-setup payload. Completing the flow flips `profile_completed`
/// regardless of which optional fields were supplied.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: Option<String>,
    #[validate(max_length = 500)]
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub contact_telegram: Option<String>,
    pub github_profile: Option<String>,
    pub portfolio_url: Option<String>,
    pub experience: Option<models::Experience>,
    pub interests: Option<Vec<String>>,
}

impl ProfileForm {
    pub fn apply_to(self, user: &mut models::User) {
        if let Some(name) = self.name {
            user.name = name.trim().to_string();
        }
        if let Some(bio) = self.bio {
            user.bio = Some(bio);
        }
        if let Some(skills) = self.skills {
            user.skills = skills
                .into_iter()
                .map(|skill| skill.trim().to_string())
                .collect();
        }
        if let Some(location) = self.location {
            user.location = Some(location);
        }
        if let Some(contact_email) = self.contact_email {
            user.contact_email = contact_email;
        }
        if let Some(contact_whatsapp) = self.contact_whatsapp {
            user.contact_whatsapp = Some(contact_whatsapp);
        }
        if let Some(contact_telegram) = self.contact_telegram {
            user.contact_telegram = Some(contact_telegram);
        }
        if let Some(github_profile) = self.github_profile {
            user.github_profile = Some(github_profile);
        }
        if let Some(portfolio_url) = self.portfolio_url {
            user.portfolio_url = Some(portfolio_url);
        }
        if let Some(experience) = self.experience {
            user.experience = experience;
        }
        if let Some(interests) = self.interests {
            user.interests = interests
                .into_iter()
                .map(|interest| interest.trim().to_string())
                .collect();
        }
        user.profile_completed = true;
    }
}
