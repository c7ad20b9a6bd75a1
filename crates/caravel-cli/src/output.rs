//! Rendering of platform documents and resource lists.
//!
//! Lists render as a bordered table by default; single documents have no
//! natural tabular shape and render as YAML instead. `json` and `yaml`
//! always emit the raw payload so output can be piped into other tools.

use caravel_client::ResourceList;
use serde_json::Value;

use crate::cli::{CliError, CliResult, OutputFormat};

pub(crate) fn render_document(document: &Value, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_pretty_json(document),
        OutputFormat::Table | OutputFormat::Text | OutputFormat::Yaml => to_yaml(document),
    }
}

pub(crate) fn render_list(
    list: &ResourceList,
    columns: &[String],
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Table | OutputFormat::Text => {
            let columns = resolve_columns(list, columns);
            let rows = list.project(&columns);
            if matches!(format, OutputFormat::Table) {
                Ok(format_table(&columns, &rows))
            } else {
                Ok(rows
                    .iter()
                    .map(|row| row.join("  "))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        OutputFormat::Json => to_pretty_json(list.json()),
        OutputFormat::Yaml => to_yaml(list.json()),
    }
}

/// Render a JSONPath query result. Matched string nodes print raw in `text`
/// mode, one per line, so ids can feed straight into shell loops.
pub(crate) fn render_query(result: &Value, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Table | OutputFormat::Json => to_pretty_json(result),
        OutputFormat::Yaml => to_yaml(result),
        OutputFormat::Text => {
            let lines: Vec<String> = result
                .as_array()
                .map(|nodes| {
                    nodes
                        .iter()
                        .map(|node| match node {
                            Value::String(text) => text.clone(),
                            other => other.to_string(),
                        })
                        .collect()
                })
                .unwrap_or_else(|| vec![result.to_string()]);
            Ok(lines.join("\n"))
        }
    }
}

fn resolve_columns(list: &ResourceList, columns: &[String]) -> Vec<String> {
    if columns.is_empty() {
        list.descriptor()
            .default_columns
            .iter()
            .map(ToString::to_string)
            .collect()
    } else {
        columns.to_vec()
    }
}

/// Bordered table with centered cells:
///
/// ```text
/// +------+-------+
/// | name | state |
/// +------+-------+
/// ```
fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = widths
        .iter()
        .map(|width| format!("+{}", "-".repeat(width + 2)))
        .collect::<String>()
        + "+";

    let mut lines = vec![border.clone(), format_row(headers, &widths), border.clone()];
    for row in rows {
        lines.push(format_row(row, &widths));
    }
    lines.push(border);
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let rendered = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.len());
            let left = pad / 2;
            format!(
                "| {}{}{} ",
                " ".repeat(left),
                cell,
                " ".repeat(pad - left)
            )
        })
        .collect::<String>();
    rendered + "|"
}

fn to_pretty_json(value: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(CliError::failure)
}

fn to_yaml(value: &Value) -> CliResult<String> {
    serde_yaml::to_string(value)
        .map(|text| text.trim_end().to_string())
        .map_err(CliError::failure)
}
