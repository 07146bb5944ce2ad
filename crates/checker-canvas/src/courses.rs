//! Course discovery under a sub-account.

use checker_core::entities::CourseSummary;

use crate::{CanvasClient, CanvasError};

/// Drop blueprint courses and courses whose SIS id contains `excluded_sis_marker`.
///
/// An empty marker excludes nothing.
#[must_use]
pub fn retain_auditable(
    courses: Vec<CourseSummary>,
    excluded_sis_marker: &str,
) -> Vec<CourseSummary> {
    courses
        .into_iter()
        .filter(|course| !course.blueprint)
        .filter(|course| {
            excluded_sis_marker.is_empty() || !course.sis_id_contains(excluded_sis_marker)
        })
        .collect()
}

impl CanvasClient {
    /// List the auditable courses of a sub-account, in API order.
    ///
    /// Pages through `accounts/{id}/courses` asking for SIS ids, then applies
    /// [`retain_auditable`]. A failure on any page discards everything fetched
    /// so far.
    ///
    /// # Errors
    ///
    /// Returns the first [`CanvasError`] raised by any page.
    pub async fn list_courses(
        &self,
        sub_account_id: u64,
        excluded_sis_marker: &str,
    ) -> Result<Vec<CourseSummary>, CanvasError> {
        let per_page = self.per_page();
        let courses: Vec<CourseSummary> = self
            .get_paginated(
                &format!("accounts/{sub_account_id}/courses"),
                &[
                    ("per_page", per_page.as_str()),
                    ("include[]", "sis_course_id"),
                ],
            )
            .await?;

        let listed = courses.len();
        let kept = retain_auditable(courses, excluded_sis_marker);
        tracing::info!(
            sub_account_id,
            listed,
            kept = kept.len(),
            "discovered courses"
        );
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn course(id: u64, sis: Option<&str>, blueprint: bool) -> CourseSummary {
        CourseSummary {
            id,
            name: format!("Curso {id}"),
            sis_course_id: sis.map(str::to_string),
            blueprint,
        }
    }

    #[test]
    fn drops_blueprints_and_legacy_cohort() {
        let courses = vec![
            course(1, Some("END-2024-01"), false),
            course(2, Some("END-2024-02"), true),
            course(3, Some("END-2022-01"), false),
            course(4, None, false),
        ];
        let kept: Vec<u64> = retain_auditable(courses, "2022")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(kept, vec![1, 4]);
    }

    #[test]
    fn empty_marker_keeps_all_non_blueprints() {
        let courses = vec![course(1, Some("X-2022"), false), course(2, None, true)];
        let kept = retain_auditable(courses, "");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn keeps_api_order() {
        let courses = vec![course(9, None, false), course(3, None, false), course(5, None, false)];
        let ids: Vec<u64> = retain_auditable(courses, "2022").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![9, 3, 5]);
    }
}
