//! Column-driven text tables.
//!
//! A [`Table`] pairs a list of [`Column`] definitions with row data. Each column
//! maps a row to a [`Cell`], which renders to one or more lines of text. The text
//! renderer pads every column to its widest line and gives multi-line cells
//! (lists) their own rows.

use serde_json::Value;

/// Rendered content of one table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Anchor text plus target URL
    Link { text: String, href: String },
    /// One bullet per item
    List(Vec<String>),
    /// Inline labels
    Tags(Vec<String>),
    /// Capitalised status label
    Badge(String),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Lines shown in a text table
    pub fn lines(&self) -> Vec<String> {
        match self {
            Cell::Text(s) => vec![s.clone()],
            Cell::Link { text, href } => vec![text.clone(), format!("<{}>", href)],
            Cell::List(items) => items.iter().map(|i| format!("• {}", i)).collect(),
            Cell::Tags(tags) => {
                if tags.is_empty() {
                    vec![String::new()]
                } else {
                    vec![tags.join(", ")]
                }
            }
            Cell::Badge(label) => vec![capitalize(label)],
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Badge(s) => Value::String(s.clone()),
            Cell::Link { text, href } => serde_json::json!({ "text": text, "href": href }),
            Cell::List(items) | Cell::Tags(items) => serde_json::json!(items),
        }
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Column definition: stable id, header label and accessor.
pub struct Column<T> {
    pub id: &'static str,
    pub header: &'static str,
    cell: Box<dyn Fn(&T) -> Cell>,
}

impl<T> Column<T> {
    pub fn new(id: &'static str, header: &'static str, cell: impl Fn(&T) -> Cell + 'static) -> Self {
        Self {
            id,
            header,
            cell: Box::new(cell),
        }
    }

    pub fn cell(&self, row: &T) -> Cell {
        (self.cell)(row)
    }
}

pub struct Table<'a, T> {
    columns: Vec<Column<T>>,
    data: &'a [T],
}

impl<'a, T> Table<'a, T> {
    pub fn new(columns: Vec<Column<T>>, data: &'a [T]) -> Self {
        Self { columns, data }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    /// Cells row by row, in column order
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.data
            .iter()
            .map(|row| self.columns.iter().map(|c| c.cell(row)).collect())
            .collect()
    }

    /// One JSON object per row keyed by column id
    pub fn to_json(&self) -> Value {
        let rows = self
            .rows()
            .into_iter()
            .map(|cells| {
                let obj: serde_json::Map<String, Value> = self
                    .columns
                    .iter()
                    .zip(cells)
                    .map(|(col, cell)| (col.id.to_string(), cell.to_json()))
                    .collect();
                Value::Object(obj)
            })
            .collect();
        Value::Array(rows)
    }

    pub fn render(&self) -> String {
        let rows: Vec<Vec<Vec<String>>> = self
            .rows()
            .iter()
            .map(|cells| cells.iter().map(Cell::lines).collect())
            .collect();

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.chars().count()).collect();
        for row in &rows {
            for (i, lines) in row.iter().enumerate() {
                for line in lines {
                    widths[i] = widths[i].max(line.chars().count());
                }
            }
        }

        let mut out = String::new();
        let headers: Vec<String> = self.headers().iter().map(|h| h.to_string()).collect();
        push_line(&mut out, &headers, &widths);
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(rule_width));
        out.push('\n');

        if rows.is_empty() {
            out.push_str("No rows.\n");
            return out;
        }

        for row in &rows {
            let height = row.iter().map(Vec::len).max().unwrap_or(1).max(1);
            for line_idx in 0..height {
                let line: Vec<String> = row
                    .iter()
                    .map(|lines| lines.get(line_idx).cloned().unwrap_or_default())
                    .collect();
                push_line(&mut out, &line, &widths);
            }
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        items: Vec<String>,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name", |r: &Row| Cell::text(r.name)),
            Column::new("items", "Items", |r: &Row| Cell::List(r.items.clone())),
        ]
    }

    #[test]
    fn test_render_multiline_cells() {
        let data = vec![Row {
            name: "a",
            items: vec!["x".to_string(), "y".to_string()],
        }];
        let table = Table::new(columns(), &data);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Name  Items");
        assert_eq!(lines[1], "-----------");
        assert_eq!(lines[2], "a     • x");
        assert_eq!(lines[3], "      • y");
    }

    #[test]
    fn test_render_empty() {
        let data: Vec<Row> = vec![];
        let rendered = Table::new(columns(), &data).render();
        assert!(rendered.contains("Name  Items"));
        assert!(rendered.contains("No rows."));
    }

    #[test]
    fn test_to_json_keys_by_column_id() {
        let data = vec![Row {
            name: "a",
            items: vec!["x".to_string()],
        }];
        let json = Table::new(columns(), &data).to_json();
        assert_eq!(json[0]["name"], "a");
        assert_eq!(json[0]["items"][0], "x");
    }

    #[test]
    fn test_cell_lines() {
        assert_eq!(Cell::Badge("beginner".into()).lines(), vec!["Beginner"]);
        assert_eq!(
            Cell::Tags(vec!["a".into(), "b".into()]).lines(),
            vec!["a, b"]
        );
        assert_eq!(
            Cell::Link {
                text: "t".into(),
                href: "http://x".into()
            }
            .lines(),
            vec!["t", "<http://x>"]
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("kettlebell"), "Kettlebell");
        assert_eq!(capitalize(""), "");
    }
}
