//! Syllabus document lookup.
//!
//! The drill-down (modules → items → file) needs the gateway and lives in
//! the report assembler; this module holds the matching and classification.

use checker_core::SyllabusOutcome;
use checker_core::entities::{FileInfo, ModuleItem};

/// Module item title of the syllabus file.
pub const SYLLABUS_ITEM_TITLE: &str = "Programa de la asignatura";

/// Syllabus file items of one module, in module order.
pub fn syllabus_candidates(items: &[ModuleItem]) -> impl Iterator<Item = &ModuleItem> {
    items.iter().filter(|item| {
        item.is_file() && item.title == SYLLABUS_ITEM_TITLE && item.content_id.is_some()
    })
}

/// First syllabus file item of one module.
#[must_use]
pub fn find_syllabus_item(items: &[ModuleItem]) -> Option<&ModuleItem> {
    syllabus_candidates(items).next()
}

/// A file named `placeholder_filename` means nothing real was uploaded.
#[must_use]
pub fn classify_syllabus_file(file: FileInfo, placeholder_filename: &str) -> SyllabusOutcome {
    if file.display_name == placeholder_filename {
        SyllabusOutcome::Placeholder
    } else {
        SyllabusOutcome::Linked { file }
    }
}
