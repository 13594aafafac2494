use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdateForm {
    pub status: Option<models::MatchStatus>,
    // one-way flag; only `true` is accepted
    pub conversation_started: Option<bool>,
    #[validate(max_length = 500)]
    pub notes: Option<String>,
}
