//! # checker-report
//!
//! Turns a sub-account into audit rows and renders them.
//!
//! - [`audit`]: the per-course orchestration over the Canvas gateway and the
//!   checklist evaluators
//! - [`columns`]: the report's column layout and plain-text cells
//! - [`html`]: a standalone HTML table
//! - [`xlsx`]: the styled spreadsheet export

pub mod audit;
pub mod columns;
pub mod html;
pub mod xlsx;

mod error;

pub use audit::Auditor;
pub use error::ReportError;
