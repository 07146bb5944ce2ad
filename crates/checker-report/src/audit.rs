//! Per-course audit orchestration.
//!
//! Discovery failures abort the run. Once courses are known, every field is
//! fetched and evaluated on its own: a failing fetch is logged and turns that
//! field into its failure state, leaving the other fields and courses intact.

use checker_canvas::{CanvasClient, CanvasError};
use checker_config::CheckerConfig;
use checker_core::entities::CourseSummary;
use checker_core::{AssignmentListing, CourseAuditRow, SyllabusOutcome, Verdict};
use checker_rules::assignments::list_assignments;
use checker_rules::syllabus::{classify_syllabus_file, syllabus_candidates};
use checker_rules::tabs::navigation_verdict;
use checker_rules::{FrontPageChecks, StyleMatch};

use crate::ReportError;

/// Runs the checklist against the courses of a sub-account.
pub struct Auditor<'a> {
    canvas: &'a CanvasClient,
    config: &'a CheckerConfig,
    style: StyleMatch,
}

impl<'a> Auditor<'a> {
    #[must_use]
    pub fn new(canvas: &'a CanvasClient, config: &'a CheckerConfig) -> Self {
        Self {
            canvas,
            config,
            style: StyleMatch::default(),
        }
    }

    /// Use a different style-attribute matching strategy for front page checks.
    #[must_use]
    pub const fn with_style_match(mut self, style: StyleMatch) -> Self {
        self.style = style;
        self
    }

    /// Discover and audit every course of `sub_account_id`, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Discovery`] if listing courses fails.
    pub async fn audit_sub_account(
        &self,
        sub_account_id: u64,
    ) -> Result<Vec<CourseAuditRow>, ReportError> {
        let courses = self.discover(sub_account_id).await?;
        Ok(self.audit_courses(&courses, |_| {}).await)
    }

    /// Auditable courses of a sub-account.
    ///
    /// # Errors
    ///
    /// Returns the gateway error of the first failing page.
    pub async fn discover(&self, sub_account_id: u64) -> Result<Vec<CourseSummary>, CanvasError> {
        self.canvas
            .list_courses(sub_account_id, &self.config.rules.excluded_sis_marker)
            .await
    }

    /// Audit `courses` one after another; `on_row` sees each row as it is built.
    pub async fn audit_courses<F>(
        &self,
        courses: &[CourseSummary],
        mut on_row: F,
    ) -> Vec<CourseAuditRow>
    where
        F: FnMut(&CourseAuditRow),
    {
        let mut rows = Vec::with_capacity(courses.len());
        for course in courses {
            let row = self.audit_course(course).await;
            on_row(&row);
            rows.push(row);
        }
        let passing = rows.iter().filter(|row| row.passed_all()).count();
        tracing::info!(courses = rows.len(), passing, "audit complete");
        rows
    }

    /// Build the row of one course.
    pub async fn audit_course(&self, course: &CourseSummary) -> CourseAuditRow {
        tracing::debug!(course_id = course.id, name = %course.name, "auditing course");

        let front_page = self.front_page_checks(course.id).await;
        let navigation = self.navigation(course.id).await;
        let syllabus = self.syllabus(course.id).await;
        let assignments = self.assignments(course.id).await;

        CourseAuditRow {
            id: course.id,
            name: course.name.clone(),
            url: self.config.canvas.course_url(course.id),
            sis_id: course.sis_course_id.clone(),
            welcome_banner: front_page.welcome_banner,
            description: front_page.description,
            instructor: front_page.instructor,
            technical_name: front_page.technical_name,
            navigation,
            syllabus,
            assignments,
        }
    }

    async fn front_page_checks(&self, course_id: u64) -> FrontPageChecks {
        match self.canvas.front_page(course_id).await {
            Ok(page) => FrontPageChecks::evaluate(page.body_html(), self.style),
            Err(error) if error.is_not_found() => {
                tracing::debug!(course_id, "course has no front page");
                FrontPageChecks::failed()
            }
            Err(error) => {
                degraded(course_id, "front_page", &error);
                FrontPageChecks::failed()
            }
        }
    }

    async fn navigation(&self, course_id: u64) -> Verdict {
        match self.canvas.tabs(course_id).await {
            Ok(tabs) => navigation_verdict(&tabs),
            Err(error) => {
                degraded(course_id, "navigation", &error);
                Verdict::Fail
            }
        }
    }

    /// Modules in order, items in order; the first resolvable syllabus file decides.
    async fn syllabus(&self, course_id: u64) -> SyllabusOutcome {
        let modules = match self.canvas.modules(course_id).await {
            Ok(modules) => modules,
            Err(error) => {
                degraded(course_id, "syllabus", &error);
                return SyllabusOutcome::Missing;
            }
        };

        for module in &modules {
            let items = match self.canvas.module_items(course_id, module.id).await {
                Ok(items) => items,
                Err(error) => {
                    tracing::warn!(
                        course_id,
                        module_id = module.id,
                        %error,
                        "skipping module: items unavailable"
                    );
                    continue;
                }
            };

            for item in syllabus_candidates(&items) {
                let Some(file_id) = item.content_id else {
                    continue;
                };
                match self.canvas.file(course_id, file_id).await {
                    Ok(file) => {
                        return classify_syllabus_file(
                            file,
                            &self.config.rules.placeholder_syllabus_filename,
                        );
                    }
                    Err(error) => {
                        tracing::warn!(
                            course_id,
                            file_id,
                            %error,
                            "syllabus file unavailable; continuing search"
                        );
                    }
                }
            }
        }

        SyllabusOutcome::Missing
    }

    async fn assignments(&self, course_id: u64) -> AssignmentListing {
        match self.canvas.assignments(course_id).await {
            Ok(assignments) => list_assignments(&assignments, &self.config.rules),
            Err(error) => {
                degraded(course_id, "assignments", &error);
                AssignmentListing::unavailable()
            }
        }
    }
}

fn degraded(course_id: u64, field: &str, error: &CanvasError) {
    tracing::warn!(course_id, field, %error, "fetch failed; field reported as failing");
}
