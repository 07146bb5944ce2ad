//! Standalone HTML rendering of an audit.
//!
//! Cells carry markup (course link, colored glyphs, syllabus link). Text
//! that comes from Canvas is escaped before it is embedded.

use std::path::Path;

use chrono::{DateTime, Utc};

use checker_core::{AssignmentListing, CourseAuditRow, SyllabusOutcome, Verdict};

use crate::ReportError;
use crate::columns::{COLUMNS, MISSING_SIS_ID};

const STYLE: &str = "\
    body { font-family: sans-serif; margin: 2em; }
    table { border-collapse: collapse; }
    th, td { border: 1px solid #ccc; padding: 4px 8px; vertical-align: top; }
    th { background: #f0f0f0; }
    td.center { text-align: center; }
";

/// Render `rows` as a complete HTML page.
#[must_use]
pub fn render_html(title: &str, rows: &[CourseAuditRow], generated_at: DateTime<Utc>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"es\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape(title)));
    html.push_str("  <style>\n");
    html.push_str(STYLE);
    html.push_str("  </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    html.push_str(&format!(
        "<p class=\"generated\">{} cursos, generado {}</p>\n",
        rows.len(),
        generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    html.push_str("<table>\n");
    html.push_str("<thead><tr>");
    for column in &COLUMNS {
        html.push_str(&format!("<th>{}</th>", column.header));
    }
    html.push_str("</tr></thead>\n");
    html.push_str("<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for (column, cell) in COLUMNS.iter().zip(row_cells(row)) {
            if column.centered {
                html.push_str(&format!("<td class=\"center\">{cell}</td>"));
            } else {
                html.push_str(&format!("<td>{cell}</td>"));
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n");
    html.push_str("</table>\n");

    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

/// Render and write the page to `path`.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be written.
pub fn write_html(
    path: &Path,
    title: &str,
    rows: &[CourseAuditRow],
    generated_at: DateTime<Utc>,
) -> Result<(), ReportError> {
    std::fs::write(path, render_html(title, rows, generated_at))?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote HTML report");
    Ok(())
}

fn row_cells(row: &CourseAuditRow) -> [String; 10] {
    [
        format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            escape(&row.url),
            escape(&row.name)
        ),
        row.id.to_string(),
        escape(row.sis_id.as_deref().unwrap_or(MISSING_SIS_ID)),
        glyph_span(row.welcome_banner),
        glyph_span(row.description),
        glyph_span(row.instructor),
        glyph_span(row.technical_name),
        glyph_span(row.navigation),
        syllabus_cell(&row.syllabus),
        assignments_cell(&row.assignments),
    ]
}

fn glyph_span(verdict: Verdict) -> String {
    let color = match verdict {
        Verdict::Pass => "green",
        Verdict::Fail => "red",
    };
    format!("<span style=\"color:{color};\">{}</span>", verdict.glyph())
}

fn syllabus_cell(outcome: &SyllabusOutcome) -> String {
    match outcome {
        SyllabusOutcome::Linked { file } => format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>{}",
            escape(&file.url),
            escape(&file.display_name),
            glyph_span(Verdict::Pass)
        ),
        SyllabusOutcome::Placeholder | SyllabusOutcome::Missing => glyph_span(Verdict::Fail),
    }
}

fn assignments_cell(listing: &AssignmentListing) -> String {
    let mut parts: Vec<String> = listing.names.iter().map(|name| escape(name)).collect();
    parts.push(glyph_span(listing.verdict));
    parts.join(", ")
}

/// Escape text for element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
