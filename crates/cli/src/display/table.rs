//! Padded, optionally styled text tables.
//!
//! Column widths are computed on the plain cell text so ANSI escape codes
//! never shift alignment.

use owo_colors::{OwoColorize, Style};

use super::Styles;

const COLUMN_GAP: &str = "  ";

/// One table cell: plain text plus the style it is drawn with.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub style: Style,
}

impl Cell {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::new())
    }

    /// Display width in terminal columns.
    fn width(&self) -> usize {
        console::measure_text_width(&self.text)
    }
}

/// A titled table with a fixed set of columns.
#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing trailing cells render empty and extra cells are dropped.
    pub fn add_row(&mut self, mut row: Vec<Cell>) {
        row.resize_with(self.headers.len(), || Cell::plain(""));
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(console::measure_text_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render the title, header, separator and rows, each line ending in `\n`.
    pub fn render(&self, styles: &Styles) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&self.title.style(styles.title).to_string());
        out.push('\n');

        let header: Vec<Cell> = self
            .headers
            .iter()
            .map(|h| Cell::new(h.clone(), styles.header))
            .collect();
        push_line(&mut out, &header, &widths);

        let rule: Vec<Cell> = widths.iter().map(|w| Cell::plain("-".repeat(*w))).collect();
        push_line(&mut out, &rule, &widths);

        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[Cell], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        out.push_str(&cell.text.style(cell.style).to_string());
        if i < last {
            out.push_str(&" ".repeat(width - cell.width()));
            out.push_str(COLUMN_GAP);
        }
    }
    out.push('\n');
}
