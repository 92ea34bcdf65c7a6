use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
}

impl CurrentUser {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// Profile document kept next to the auth account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "photoBase64")]
    pub photo: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl UserProfile {
    /// "Name Surname", used as the owner caption on records.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.trim(), self.surname.trim())
            .trim()
            .to_string()
    }
}
