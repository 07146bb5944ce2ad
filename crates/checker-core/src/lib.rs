//! # checker-core
//!
//! Core types shared across all Course Checker crates:
//! - Canvas entities as returned by the REST API (courses, tabs, modules,
//!   module items, files, assignments, pages)
//! - The [`Verdict`](enums::Verdict) pass/fail outcome and its glyphs
//! - Audit results: one [`CourseAuditRow`](report::CourseAuditRow) per course

pub mod entities;
pub mod enums;
pub mod report;

pub use enums::Verdict;
pub use report::{AssignmentListing, CourseAuditRow, SyllabusOutcome};
