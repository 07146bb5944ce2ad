use serde::{Deserialize, Serialize};

/// A course module from `courses/{id}/modules`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Module {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// An entry of `courses/{id}/modules/{id}/items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleItem {
    pub id: u64,
    /// `File`, `Page`, `Discussion`, `Assignment`, `ExternalUrl`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    /// The referenced file id when `kind` is `File`.
    #[serde(default)]
    pub content_id: Option<u64>,
}

impl ModuleItem {
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == "File"
    }
}
