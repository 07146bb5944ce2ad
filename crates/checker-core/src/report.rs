//! Audit results produced per course.
//!
//! A [`CourseAuditRow`] holds five plain [`Verdict`]s and two enriched
//! outcomes ([`SyllabusOutcome`], [`AssignmentListing`]) whose rendering
//! carries content next to the glyph.

use serde::{Deserialize, Serialize};

use crate::entities::FileInfo;
use crate::enums::Verdict;

/// Result of the syllabus drill-down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyllabusOutcome {
    /// A real syllabus file was found.
    Linked { file: FileInfo },
    /// The syllabus item exists but points at the default upload.
    Placeholder,
    /// No syllabus item in any module.
    Missing,
}

impl SyllabusOutcome {
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        match self {
            Self::Linked { .. } => Verdict::Pass,
            Self::Placeholder | Self::Missing => Verdict::Fail,
        }
    }

    /// Plain-text rendering: the file name followed by ✔️, or ❌ alone.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Linked { file } => format!("{}{}", file.display_name, Verdict::Pass.glyph()),
            Self::Placeholder | Self::Missing => Verdict::Fail.glyph().to_string(),
        }
    }
}

/// Assignment names in API order with the listing's verdict.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentListing {
    pub names: Vec<String>,
    pub verdict: Verdict,
}

impl AssignmentListing {
    /// A failing listing with no names.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// `"Tarea 1, Tarea 2, ❌"`; just the glyph when there are no names.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts: Vec<&str> = self.names.iter().map(String::as_str).collect();
        parts.push(self.verdict.glyph());
        parts.join(", ")
    }
}

/// One row of the audit report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseAuditRow {
    pub id: u64,
    pub name: String,
    /// Browser URL of the course.
    pub url: String,
    pub sis_id: Option<String>,
    pub welcome_banner: Verdict,
    pub description: Verdict,
    pub instructor: Verdict,
    pub technical_name: Verdict,
    pub navigation: Verdict,
    pub syllabus: SyllabusOutcome,
    pub assignments: AssignmentListing,
}

impl CourseAuditRow {
    /// Verdicts of all seven checks in display order.
    #[must_use]
    pub fn verdicts(&self) -> [Verdict; 7] {
        [
            self.welcome_banner,
            self.description,
            self.instructor,
            self.technical_name,
            self.navigation,
            self.syllabus.verdict(),
            self.assignments.verdict,
        ]
    }

    #[must_use]
    pub fn passed_all(&self) -> bool {
        self.verdicts().iter().all(|verdict| verdict.is_pass())
    }
}
