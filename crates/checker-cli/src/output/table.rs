//! Aligned plain-text tables for terminal output.

use checker_core::enums::{FAIL_GLYPH, PASS_GLYPH};

const GAP: &str = "  ";
const MIN_WIDTH: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`; cells are padded by terminal columns.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell.as_str()))
                .chain([display_width(header), MIN_WIDTH])
                .max()
                .unwrap_or(MIN_WIDTH)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, max_width);
    }

    let header_line = join_line(headers.iter().zip(&widths).map(|(header, width)| {
        pad(&truncate(header, *width), *width, false)
    }));
    let mut lines = vec![header_line.clone(), "-".repeat(display_width(&header_line))];

    for row in rows {
        lines.push(join_line(widths.iter().enumerate().map(|(index, width)| {
            let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
            let padded = pad(&cell, *width, is_integer(&cell));
            if options.color {
                colorize_verdict(&padded)
            } else {
                padded
            }
        })));
    }

    lines.join("\n")
}

/// Terminal columns taken by `value`.
///
/// Emoji presentation (U+FE0F) widens the preceding symbol, and ❌ is wide
/// on its own, so both verdict glyphs take two columns.
fn display_width(value: &str) -> usize {
    value
        .chars()
        .map(|ch| match ch {
            '\u{fe0f}' => 1,
            '\u{274c}' => 2,
            _ => 1,
        })
        .sum()
}

fn join_line(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(GAP).trim_end().to_string()
}

/// Narrow the widest columns until the line fits `max_width`.
fn shrink_to(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_WIDTH)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    let mut out = String::new();
    for ch in value.chars() {
        if display_width(&out) + display_width(&ch.to_string()) + 1 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Green for cells carrying a pass mark, red for a fail mark.
fn colorize_verdict(cell: &str) -> String {
    let code = if cell.contains(PASS_GLYPH) {
        "32"
    } else if cell.contains(FAIL_GLYPH) {
        "31"
    } else {
        return cell.to_string();
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}
