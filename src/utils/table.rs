//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Self::new(headers.iter().map(|h| Column::new(h)).collect())
    }

    /// Columns grow to fit the widest cell. Missing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, col.width));
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{} ", s, " ".repeat(fill))
}
