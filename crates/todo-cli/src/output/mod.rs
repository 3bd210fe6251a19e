use serde::Serialize;
use serde_json::Value;
use todo_core::entities::Item;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

const ITEM_HEADERS: [&str; 3] = ["id", "description", "completed"];
const COMPLETED_COLUMN: usize = 2;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_key_values(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render items; the table form keeps a fixed column order.
pub fn render_items(items: &[Item], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&items, format);
    }
    if items.is_empty() {
        return Ok(String::from("(no items)"));
    }

    let rows = items
        .iter()
        .map(|item| {
            vec![
                item.id.to_string(),
                item.description.clone(),
                item.completed.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    Ok(table::render_table(
        &ITEM_HEADERS,
        &rows,
        table_options(Some(COMPLETED_COLUMN)),
    ))
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn output_items(items: &[Item], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_items(items, format)?);
    Ok(())
}

fn table_options(flag_column: Option<usize>) -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
        flag_column,
    }
}

fn render_key_values<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let rows = match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| vec![key, value_to_cell(&value)])
            .collect::<Vec<_>>(),
        other => vec![vec![String::from("value"), value_to_cell(&other)]],
    };
    Ok(table::render_table(&["key", "value"], &rows, table_options(Some(1))))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use todo_core::entities::Item;
    use todo_core::ids::ItemId;
    use todo_core::responses::{DeleteResponse, UpdateResponse};

    use super::{render, render_items};
    use crate::cli::OutputFormat;

    fn item(id: &str, description: &str, completed: bool) -> Item {
        Item {
            id: ItemId::parse(id).unwrap(),
            description: description.into(),
            completed,
        }
    }

    #[test]
    fn json_render_is_pretty() {
        let out = render(&UpdateResponse::success(), OutputFormat::Json).unwrap();
        assert_eq!(out, "{\n  \"updated\": true\n}");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&DeleteResponse::failure("Record Not Found"), OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"{"deleted":false,"error":"Record Not Found"}"#);
    }

    #[test]
    fn object_table_lists_keys() {
        let out = render(&UpdateResponse::success(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "key      value");
        assert_eq!(lines[2], "updated  true");
    }

    #[test]
    fn item_table_keeps_column_order() {
        let items = vec![item("64c11bd1da6b431c66c28a88", "time", false)];
        let out = render_items(&items, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id                        description  completed");
        assert_eq!(lines[2], "64c11bd1da6b431c66c28a88  time         false");
    }

    #[test]
    fn empty_item_table_says_so() {
        assert_eq!(render_items(&[], OutputFormat::Table).unwrap(), "(no items)");
        assert_eq!(render_items(&[], OutputFormat::Raw).unwrap(), "[]");
    }

    #[test]
    fn item_json_matches_api_shape() {
        let items = vec![item("64c11bd1da6b431c66c28a88", "time", true)];
        let out = render_items(&items, OutputFormat::Raw).unwrap();
        assert_eq!(
            out,
            r#"[{"id":"64c11bd1da6b431c66c28a88","description":"time","completed":true}]"#
        );
    }
}
