//! Spreadsheet export of an audit.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use checker_core::CourseAuditRow;
use checker_core::enums::{FAIL_GLYPH, PASS_GLYPH};

use crate::ReportError;
use crate::columns::{COLUMNS, FIRST_VERDICT_COLUMN, plain_cells};

pub const SHEET_NAME: &str = "Reporte";

const PASS_COLOR: u32 = 0x00_8000;
const FAIL_COLOR: u32 = 0xFF_0000;

/// Font tone of a verdict cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    Pass,
    Fail,
    Neutral,
}

/// Tone of a cell from the glyphs it contains; a pass glyph wins.
#[must_use]
pub fn cell_tone(text: &str) -> CellTone {
    if text.contains(PASS_GLYPH) {
        CellTone::Pass
    } else if text.contains(FAIL_GLYPH) {
        CellTone::Fail
    } else {
        CellTone::Neutral
    }
}

fn cell_format(centered: bool, tone: CellTone) -> Format {
    let mut format = Format::new();
    if centered {
        format = format.set_align(FormatAlign::Center);
    }
    match tone {
        CellTone::Pass => format.set_font_color(Color::RGB(PASS_COLOR)),
        CellTone::Fail => format.set_font_color(Color::RGB(FAIL_COLOR)),
        CellTone::Neutral => format,
    }
}

fn build_workbook(rows: &[CourseAuditRow]) -> Result<Workbook, ReportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, column) in (0u16..).zip(COLUMNS.iter()) {
        sheet.set_column_width(col, column.width)?;
        sheet.write_string_with_format(0, col, column.header, &header)?;
    }

    for (line, row) in (1u32..).zip(rows) {
        let cells = plain_cells(row);
        for (index, (column, text)) in COLUMNS.iter().zip(&cells).enumerate() {
            let col = u16::try_from(index).unwrap_or(u16::MAX);
            let tone = if index >= FIRST_VERDICT_COLUMN {
                cell_tone(text)
            } else {
                CellTone::Neutral
            };
            let format = cell_format(column.centered, tone);
            if index == 1 {
                #[allow(clippy::cast_precision_loss)]
                let id = row.id as f64;
                sheet.write_number_with_format(line, col, id, &format)?;
            } else {
                sheet.write_string_with_format(line, col, text, &format)?;
            }
        }
    }

    Ok(workbook)
}

/// The workbook as an in-memory `.xlsx` file.
///
/// # Errors
///
/// Returns [`ReportError::Xlsx`] if the workbook cannot be assembled.
pub fn xlsx_bytes(rows: &[CourseAuditRow]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = build_workbook(rows)?;
    Ok(workbook.save_to_buffer()?)
}

/// Write the workbook to `path`.
///
/// # Errors
///
/// Returns [`ReportError::Xlsx`] if the workbook cannot be assembled or saved.
pub fn write_xlsx(path: &Path, rows: &[CourseAuditRow]) -> Result<(), ReportError> {
    let mut workbook = build_workbook(rows)?;
    workbook.save(path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote spreadsheet report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::fixtures::sample_row;
    use pretty_assertions::assert_eq;

    #[test]
    fn tone_follows_glyphs() {
        assert_eq!(cell_tone("✔️"), CellTone::Pass);
        assert_eq!(cell_tone("Programa.docx✔️"), CellTone::Pass);
        assert_eq!(cell_tone("Tarea 1, Tarea 2, ❌"), CellTone::Fail);
        assert_eq!(cell_tone("MED-101"), CellTone::Neutral);
    }

    #[test]
    fn bytes_are_a_zip_container() {
        let bytes = xlsx_bytes(&[sample_row()]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_audit_still_produces_a_workbook() {
        let bytes = xlsx_bytes(&[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn write_xlsx_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Medicina.xlsx");
        write_xlsx(&path, &[sample_row(), sample_row()]).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..2], b"PK");
    }
}
