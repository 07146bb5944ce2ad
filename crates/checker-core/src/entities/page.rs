use serde::{Deserialize, Serialize};

/// A wiki page; used for `courses/{id}/front_page`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl Page {
    /// HTML body, or an empty string when the page has none.
    #[must_use]
    pub fn body_html(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}
