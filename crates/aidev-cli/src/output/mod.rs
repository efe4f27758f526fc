use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table::TableOptions::from_env()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Objects become key/value tables; an array field of objects (such as the
/// written tables of a run) is rendered as its own table below.
fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let mut sections = Vec::new();
            let mut rows = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
                        sections.push(format!("{key}:\n{}", render_array_table(&items, options)));
                    }
                    other => rows.push(vec![key, value_to_cell(&other)]),
                }
            }
            let mut out = vec![table::render_table(&["key", "value"], &rows, options)];
            out.extend(sections);
            Ok(out.join("\n\n"))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::table::{TableOptions, render_table};
    use super::{render, render_table as render_value_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Written {
        table: &'static str,
        rows: u32,
    }

    #[derive(Serialize)]
    struct Report {
        output_dir: &'static str,
        tables: Vec<Written>,
    }

    fn report() -> Report {
        Report {
            output_dir: "out",
            tables: vec![
                Written {
                    table: "task1_all_pull_request",
                    rows: 12,
                },
                Written {
                    table: "task5_security_label",
                    rows: 3,
                },
            ],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&report(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["output_dir"], "out");
        assert_eq!(parsed["tables"][1]["rows"], 3);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&report(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        serde_json::from_str::<serde_json::Value>(&out).expect("json should parse");
    }

    #[test]
    fn object_with_row_array_renders_two_sections() {
        let out = render_value_table(&report(), TableOptions::default()).expect("table");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("tables:"));
        assert!(out.contains("task5_security_label"));
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["ID", "TYPE", "SECURITY"];
        let rows = vec![
            vec!["1".to_string(), "fix".to_string(), "1".to_string()],
            vec!["200".to_string(), "security-review".to_string(), "0".to_string()],
        ];

        let table = render_table(&headers, &rows, TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("TYPE"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // Numeric cells are right-aligned.
        assert!(lines[2].starts_with("  1"));
    }

    #[test]
    fn narrow_terminal_truncates_wide_columns() {
        let headers = ["key", "value"];
        let rows = vec![vec!["path".to_string(), "x".repeat(80)]];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }
}
