//! Report column layout shared by the HTML and spreadsheet renderers.

use checker_core::CourseAuditRow;

/// Placeholder for a course without SIS id.
pub const MISSING_SIS_ID: &str = "N/A";

/// One report column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub header: &'static str,
    /// Spreadsheet width in character units.
    pub width: f64,
    pub centered: bool,
}

const fn column(header: &'static str, width: f64, centered: bool) -> Column {
    Column {
        header,
        width,
        centered,
    }
}

/// Columns in display order.
pub const COLUMNS: [Column; 10] = [
    column("Nombre", 50.0, false),
    column("id", 12.0, true),
    column("sis_id", 20.0, false),
    column("Bienvenida", 15.0, true),
    column("Descripcion", 13.0, true),
    column("Tutores", 13.0, true),
    column("Nombre Tecnico", 15.0, true),
    column("Navegacion", 13.0, true),
    column("Programa", 56.0, false),
    column("Tareas", 140.0, false),
];

/// Index of the first column whose cells are colored by verdict glyph.
pub const FIRST_VERDICT_COLUMN: usize = 3;

/// Markup-free cell values of `row`, aligned with [`COLUMNS`].
#[must_use]
pub fn plain_cells(row: &CourseAuditRow) -> [String; 10] {
    [
        row.name.clone(),
        row.id.to_string(),
        row.sis_id.clone().unwrap_or_else(|| MISSING_SIS_ID.to_string()),
        row.welcome_banner.glyph().to_string(),
        row.description.glyph().to_string(),
        row.instructor.glyph().to_string(),
        row.technical_name.glyph().to_string(),
        row.navigation.glyph().to_string(),
        row.syllabus.summary(),
        row.assignments.summary(),
    ]
}

#[cfg(test)]
pub(crate) mod fixtures {
    use checker_core::entities::FileInfo;
    use checker_core::{AssignmentListing, CourseAuditRow, SyllabusOutcome, Verdict};

    /// A row passing everything except navigation.
    pub fn sample_row() -> CourseAuditRow {
        CourseAuditRow {
            id: 4012,
            name: "Anatomía I".into(),
            url: "https://canvas.example.edu/courses/4012".into(),
            sis_id: Some("MED-101-2024".into()),
            welcome_banner: Verdict::Pass,
            description: Verdict::Pass,
            instructor: Verdict::Pass,
            technical_name: Verdict::Pass,
            navigation: Verdict::Fail,
            syllabus: SyllabusOutcome::Linked {
                file: FileInfo {
                    id: 77,
                    display_name: "Programa Anatomía.pdf".into(),
                    url: "https://canvas.example.edu/files/77/download".into(),
                },
            },
            assignments: AssignmentListing {
                names: vec!["Tarea 2".into(), "Foro final".into()],
                verdict: Verdict::Pass,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checker_core::{AssignmentListing, SyllabusOutcome};
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_cells_follow_column_order() {
        let cells = plain_cells(&fixtures::sample_row());
        assert_eq!(
            cells,
            [
                "Anatomía I",
                "4012",
                "MED-101-2024",
                "✔️",
                "✔️",
                "✔️",
                "✔️",
                "❌",
                "Programa Anatomía.pdf✔️",
                "Tarea 2, Foro final, ✔️",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn missing_sis_id_and_failed_enrichments() {
        let row = CourseAuditRow {
            sis_id: None,
            syllabus: SyllabusOutcome::Placeholder,
            assignments: AssignmentListing::unavailable(),
            ..fixtures::sample_row()
        };
        let cells = plain_cells(&row);
        assert_eq!(cells[2], MISSING_SIS_ID);
        assert_eq!(cells[8], "❌");
        assert_eq!(cells[9], "❌");
    }

    #[test]
    fn centered_columns() {
        let centered: Vec<usize> = COLUMNS
            .iter()
            .enumerate()
            .filter(|(_, column)| column.centered)
            .map(|(index, _)| index + 1)
            .collect();
        assert_eq!(centered, vec![2, 4, 5, 6, 7, 8]);
    }
}
