use serde::{Deserialize, Serialize};

/// A course as listed by `accounts/{id}/courses`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseSummary {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Only present when the request asks for `include[]=sis_course_id`.
    #[serde(default)]
    pub sis_course_id: Option<String>,
    #[serde(default)]
    pub blueprint: bool,
}

impl CourseSummary {
    /// Whether the SIS id contains `marker`. Courses without a SIS id never match.
    #[must_use]
    pub fn sis_id_contains(&self, marker: &str) -> bool {
        self.sis_course_id
            .as_deref()
            .is_some_and(|sis| sis.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprint_defaults_to_false() {
        let course: CourseSummary =
            serde_json::from_str(r#"{"id": 7, "name": "Endodoncia I"}"#).unwrap();
        assert!(!course.blueprint);
        assert!(course.sis_course_id.is_none());
    }

    #[test]
    fn sis_marker_matching() {
        let course = CourseSummary {
            id: 1,
            name: "x".into(),
            sis_course_id: Some("ESP-2022-01".into()),
            blueprint: false,
        };
        assert!(course.sis_id_contains("2022"));
        assert!(!course.sis_id_contains("2024"));

        let no_sis = CourseSummary {
            sis_course_id: None,
            ..course
        };
        assert!(!no_sis.sis_id_contains("2022"));
    }
}
