use serde::{Deserialize, Serialize};

/// A course navigation tab from `courses/{id}/tabs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// `public`, `members`, `admins` or `none`.
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

impl Tab {
    /// Visible to students.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility.as_deref() == Some("public")
    }
}
