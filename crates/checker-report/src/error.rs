//! Report error types.

use checker_canvas::CanvasError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Course discovery failed; no report can be produced.
    #[error("course discovery failed: {0}")]
    Discovery(#[from] CanvasError),

    /// Spreadsheet generation failed.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Writing a report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
