//! Business-rule literals of the checklist that deployments may override.

use serde::{Deserialize, Serialize};

fn default_excluded_sis_marker() -> String {
    String::from("2022")
}

fn default_placeholder_syllabus_filename() -> String {
    String::from("Programa.pdf")
}

fn default_placeholder_assignment() -> String {
    String::from("Tarea 1")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RulesConfig {
    /// Courses whose SIS id contains this marker are left out of the report.
    #[serde(default = "default_excluded_sis_marker")]
    pub excluded_sis_marker: String,

    /// Syllabus file name that means nothing real was uploaded.
    #[serde(default = "default_placeholder_syllabus_filename")]
    pub placeholder_syllabus_filename: String,

    /// Assignment name that means the course still has template content.
    #[serde(default = "default_placeholder_assignment")]
    pub placeholder_assignment: String,

    /// Assignment names dropped before listing.
    #[serde(default)]
    pub blocked_assignments: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            excluded_sis_marker: default_excluded_sis_marker(),
            placeholder_syllabus_filename: default_placeholder_syllabus_filename(),
            placeholder_assignment: default_placeholder_assignment(),
            blocked_assignments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_reference_literals() {
        let rules = RulesConfig::default();
        assert_eq!(rules.excluded_sis_marker, "2022");
        assert_eq!(rules.placeholder_syllabus_filename, "Programa.pdf");
        assert_eq!(rules.placeholder_assignment, "Tarea 1");
        assert!(rules.blocked_assignments.is_empty());
    }
}
