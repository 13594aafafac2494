use serde::{Deserialize, Serialize};

/// Response body of the identity provider's userinfo endpoint. Only the
/// fields the matching service needs; everything else is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdentityForm {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub email_confirmed: bool,
    #[serde(default)]
    pub image: Option<String>,
}
