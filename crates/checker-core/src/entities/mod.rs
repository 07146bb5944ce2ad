//! Canvas REST API entities.
//!
//! Only the fields the checklist consults are modelled; unknown fields in the
//! API payloads are ignored on deserialization.

mod assignment;
mod course;
mod file;
mod module;
mod page;
mod tab;

pub use assignment::Assignment;
pub use course::CourseSummary;
pub use file::{FileInfo, UNNAMED_FILE};
pub use module::{Module, ModuleItem};
pub use page::Page;
pub use tab::Tab;
