use serde::Serialize;
use serde_json::Value;
use vaka_core::entities::Case;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_key_value(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// One case: the text sheet in table mode, the full record otherwise.
pub fn render_case(case: &Case, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(case.sheet().to_string()),
        OutputFormat::Json | OutputFormat::Raw => render(case, format),
    }
}

pub fn output_case(case: &Case, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_case(case, format)?);
    Ok(())
}

/// Several cases: a summary row per case in table mode, full records
/// otherwise.
pub fn render_cases(cases: &[&Case], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(case_table(cases)),
        OutputFormat::Json | OutputFormat::Raw => render(&cases, format),
    }
}

pub fn output_cases(cases: &[&Case], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_cases(cases, format)?);
    Ok(())
}

/// Lookup misses are reported on stdout and are not errors.
pub fn not_found(id: &str) {
    println!("Case not found: {id}");
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn case_table(cases: &[&Case]) -> String {
    if cases.is_empty() {
        return String::from("(no cases)");
    }
    let headers = ["id", "status", "reported", "title", "location", "updates"];
    let rows = cases
        .iter()
        .map(|case| {
            vec![
                case.id().to_string(),
                case.status().to_string(),
                case.date_reported.clone(),
                case.title.clone(),
                case.location.clone(),
                case.updates().len().to_string(),
            ]
        })
        .collect::<Vec<_>>();
    table::render_table(&headers, &rows, table_options())
}

fn render_key_value<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let rows = match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| vec![key, value_to_cell(&value)])
            .collect::<Vec<_>>(),
        Value::Array(items) if items.is_empty() => return Ok(String::from("(no rows)")),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| vec![(index + 1).to_string(), value_to_cell(item)])
            .collect(),
        scalar => vec![vec![String::from("value"), value_to_cell(&scalar)]],
    };
    Ok(table::render_table(&["key", "value"], &rows, table_options()))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde::Serialize;
    use vaka_core::clock::ManualClock;
    use vaka_core::entities::{Case, NewCase};

    use super::{render, render_case, render_cases};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        deleted: bool,
    }

    fn case() -> Case {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 1, 9, 10, 0, 0).unwrap());
        Case::new(
            "CASE-0002",
            NewCase::new("İşyerinde taciz", "Sözlü taciz", "2026-01-09")
                .location("İstanbul, Beşiktaş"),
            &clock,
        )
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            id: "CASE-0001",
            deleted: true,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "CASE-0001");
        assert_eq!(parsed["deleted"], true);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&case(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.contains("İşyerinde taciz"));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Example {
            id: "CASE-0001",
            deleted: false,
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("CASE-0001"));
        assert!(out.contains("false"));
    }

    #[test]
    fn single_case_table_mode_is_the_sheet() {
        let out = render_case(&case(), OutputFormat::Table).expect("render should work");
        assert!(out.contains("Case ID: CASE-0002"));
        assert!(out.contains("Location: İstanbul, Beşiktaş"));
    }

    #[test]
    fn case_list_table_has_one_row_per_case() {
        let case = case();
        let out = render_cases(&[&case], OutputFormat::Table).expect("render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id"));
        assert!(lines[2].contains("Open"));
        assert!(lines[2].contains("İşyerinde taciz"));
    }

    #[test]
    fn empty_case_list() {
        assert_eq!(
            render_cases(&[], OutputFormat::Table).expect("render should work"),
            "(no cases)"
        );
        assert_eq!(
            render_cases(&[], OutputFormat::Raw).expect("render should work"),
            "[]"
        );
    }
}
