use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Objects become one section per field: scalars as `key  value` rows,
/// arrays of records as their own table under a `[key]` heading.
fn render_table(value: &Value) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    match value {
        Value::Array(items) => Ok(render_records(items, options)),
        Value::Object(map) => {
            let mut scalars = Vec::new();
            let mut sections = Vec::new();
            for (key, field) in map {
                match field {
                    Value::Array(items) if items.iter().any(Value::is_object) => {
                        sections.push(format!("[{key}]\n{}", render_records(items, options)));
                    }
                    Value::Object(_) => {
                        sections.push(format!("[{key}]\n{}", render_table(field)?));
                    }
                    other => scalars.push(vec![key.clone(), cell(other)]),
                }
            }
            let mut parts = Vec::new();
            if !scalars.is_empty() {
                parts.push(table::render(&["key", "value"], &scalars, options));
            }
            parts.extend(sections);
            Ok(parts.join("\n\n"))
        }
        scalar => Ok(cell(scalar)),
    }
}

fn render_records(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render(&["value"], &rows, options);
    }

    // Union of keys across records, in first-seen order.
    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| "-".to_string(), cell))
                .collect()
        })
        .collect::<Vec<Vec<String>>>();
    table::render(&headers, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(map) => format!("{{{} fields}}", map.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{cell, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        narrative: &'static str,
        count: u32,
        insights: Vec<serde_json::Value>,
    }

    fn example() -> Example {
        Example {
            narrative: "ok",
            count: 3,
            insights: vec![json!({"id": "api-top-a-0", "tags": ["A", "B"], "count": 2})],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["narrative"], "ok");
        assert_eq!(parsed["count"], 3);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_splits_record_lists() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        assert!(out.starts_with("key"));
        assert!(out.contains("[insights]"));
        assert!(out.contains("A, B"));
    }

    #[test]
    fn nested_values_are_summarized() {
        assert_eq!(cell(&json!([{"a": 1}, {"a": 2}])), "[2 items]");
        assert_eq!(cell(&json!(null)), "-");
    }
}
