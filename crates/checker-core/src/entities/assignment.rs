use serde::{Deserialize, Serialize};

/// An entry of `courses/{id}/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}
