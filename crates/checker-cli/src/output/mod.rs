use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// Tables are drawn for arrays of objects; anything else prints as JSON.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => match serde_json::to_value(value)? {
            Value::Array(items) => Ok(render_records(&items)),
            other => Ok(serde_json::to_string_pretty(&other)?),
        },
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print rows whose column order is fixed by the caller.
pub fn output_rows(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }
    println!("{}", table::render_entity_table(headers, rows, table_options()));
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// One row per record, one column per field (sorted by name).
fn render_records(items: &[Value]) -> String {
    let records: Vec<_> = items.iter().filter_map(Value::as_object).collect();
    if records.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers: Vec<&str> = records
        .iter()
        .flat_map(|record| record.keys().map(String::as_str))
        .collect();
    headers.sort_unstable();
    headers.dedup();

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| record.get(*header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect();

    table::render_entity_table(&headers, &rows, table_options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
