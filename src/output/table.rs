//! Table and Markdown rendering

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a terminal table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format data as a Markdown table
pub fn format_markdown<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "_No results._".to_string();
    }

    let mut table = Table::new(data);
    table.with(Style::markdown());

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "NAME")]
        name: String,
    }

    fn rows() -> Vec<TestRow> {
        vec![
            TestRow {
                id: "1".to_string(),
                name: "First".to_string(),
            },
            TestRow {
                id: "2".to_string(),
                name: "Second".to_string(),
            },
        ]
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        assert_eq!(format_table(&items), "No results found.");
    }

    #[test]
    fn test_format_table_rows() {
        let result = format_table(&rows());
        assert!(result.contains("ID"));
        assert!(result.contains("First"));
        assert!(result.contains("Second"));
        // Rounded style corners
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_markdown_empty() {
        let items: Vec<TestRow> = vec![];
        assert_eq!(format_markdown(&items), "_No results._");
    }

    #[test]
    fn test_format_markdown_shape() {
        let result = format_markdown(&rows());
        let lines: Vec<&str> = result.lines().collect();

        // header, separator, one line per row
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("| ID"));
        assert!(lines[1].contains("|---") || lines[1].contains("| ---"));
        assert!(lines[2].contains("First"));
    }
}
