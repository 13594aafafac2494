use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// One swipe decision, validated at the boundary before it reaches the
/// matching engine.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SwipeForm {
    pub project_id: i32,
    pub interested: bool,
}
