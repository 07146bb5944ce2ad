//! # checker-rules
//!
//! The course checklist as pure functions over already-fetched content.
//! Nothing here performs I/O.
//!
//! | Check | Input | Function |
//! |---|---|---|
//! | Welcome banner | front page HTML | [`front_page::has_welcome_banner`] |
//! | Description length | front page HTML | [`front_page::description_is_long_enough`] |
//! | Instructor assigned | front page HTML | [`front_page::has_assigned_instructor`] |
//! | Technical name | front page HTML | [`front_page::has_technical_name`] |
//! | Navigation tabs | tab list | [`tabs::navigation_verdict`] |
//! | Syllabus document | module items, file | [`syllabus::find_syllabus_item`], [`syllabus::classify_syllabus_file`] |
//! | Assignment listing | assignments | [`assignments::list_assignments`] |
//!
//! Style-attribute rules go through [`StyleMatch`], so the matching strategy
//! can change without touching callers.

pub mod assignments;
pub mod front_page;
pub mod style;
pub mod syllabus;
pub mod tabs;

pub use front_page::FrontPageChecks;
pub use style::StyleMatch;
