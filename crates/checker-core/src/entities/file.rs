use serde::{Deserialize, Deserializer, Serialize};

/// Display name used when Canvas returns a file without one.
pub const UNNAMED_FILE: &str = "Archivo sin nombre";

fn unnamed_file() -> String {
    UNNAMED_FILE.to_string()
}

fn display_name_or_unnamed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unnamed_file))
}

/// File metadata from `courses/{id}/files/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileInfo {
    pub id: u64,
    #[serde(
        default = "unnamed_file",
        deserialize_with = "display_name_or_unnamed"
    )]
    pub display_name: String,
    /// Download URL.
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_null_display_name_falls_back() {
        let missing: FileInfo = serde_json::from_str(r#"{"id": 1, "url": "u"}"#).unwrap();
        assert_eq!(missing.display_name, UNNAMED_FILE);

        let null: FileInfo =
            serde_json::from_str(r#"{"id": 1, "url": "u", "display_name": null}"#).unwrap();
        assert_eq!(null.display_name, UNNAMED_FILE);
    }
}
