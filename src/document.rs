//! Document-authoring seam.
//!
//! Table export targets a minimal document interface: append an empty
//! text-cell grid, assign cell text, save to a path. Two backends are
//! provided:
//!
//! - [`HtmlDocument`] renders grids as HTML `<table>` markup, the format
//!   word processors import.
//! - [`TextDocument`] renders fixed-width plain-text grids for terminal
//!   inspection and tests.
//!
//! Both accumulate grids in memory and render only on save; nothing is
//! ever read back from a document.

use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Handle to a table grid inside a document.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TableId(usize);

impl TableId {
    /// Returns the grid's position within its document.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Error type for document operations.
#[derive(Debug)]
pub enum DocumentError {
    /// File I/O error while saving.
    Io(io::Error),
    /// String formatting error while rendering.
    Fmt(fmt::Error),
}

impl From<io::Error> for DocumentError {
    fn from(e: io::Error) -> Self {
        DocumentError::Io(e)
    }
}

impl From<fmt::Error> for DocumentError {
    fn from(e: fmt::Error) -> Self {
        DocumentError::Fmt(e)
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Io(e) => write!(f, "I/O error: {}", e),
            DocumentError::Fmt(e) => write!(f, "Format error: {}", e),
        }
    }
}

impl std::error::Error for DocumentError {}

/// A document that can hold text-cell table grids.
///
/// Grids are created with fixed dimensions and empty cells. Writing
/// outside a grid's bounds is a programmer error and panics.
pub trait Document {
    /// Appends an empty `rows` x `cols` grid and returns its handle.
    fn add_table(&mut self, rows: usize, cols: usize) -> TableId;

    /// Sets the text of one cell.
    fn set_cell_text(&mut self, table: TableId, row: usize, col: usize, text: &str);

    /// Renders the document and writes it to `path`.
    fn save(&self, path: &Path) -> Result<(), DocumentError>;
}

/// One text-cell grid, stored row-major.
#[derive(Debug, Clone)]
struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<String>,
}

impl Grid {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![String::new(); rows * cols],
        }
    }

    fn set(&mut self, row: usize, col: usize, text: &str) {
        assert!(row < self.rows, "Row {} is out of range 0..{}", row, self.rows);
        assert!(col < self.cols, "Column {} is out of range 0..{}", col, self.cols);
        self.cells[row * self.cols + col] = text.to_owned();
    }

    fn get(&self, row: usize, col: usize) -> &str {
        &self.cells[row * self.cols + col]
    }
}

/// Escapes text for literal inclusion in HTML markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Collects table grids and renders them as a standalone HTML page.
#[derive(Debug, Default)]
pub struct HtmlDocument {
    grids: Vec<Grid>,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the whole document to HTML markup.
    ///
    /// The first row of each grid is emitted as a header row (`<th>`
    /// cells); all other rows use `<td>` cells.
    pub fn to_html(&self) -> Result<String, fmt::Error> {
        let mut html = String::new();
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html>")?;
        writeln!(html, "<head><meta charset=\"utf-8\"></head>")?;
        writeln!(html, "<body>")?;

        for grid in &self.grids {
            writeln!(html, "<table border=\"1\">")?;
            for row in 0..grid.rows {
                let tag = if row == 0 { "th" } else { "td" };
                write!(html, "<tr>")?;
                for col in 0..grid.cols {
                    write!(html, "<{}>{}</{}>", tag, escape_html(grid.get(row, col)), tag)?;
                }
                writeln!(html, "</tr>")?;
            }
            writeln!(html, "</table>")?;
        }

        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;
        Ok(html)
    }
}

impl Document for HtmlDocument {
    fn add_table(&mut self, rows: usize, cols: usize) -> TableId {
        self.grids.push(Grid::new(rows, cols));
        TableId(self.grids.len() - 1)
    }

    fn set_cell_text(&mut self, table: TableId, row: usize, col: usize, text: &str) {
        self.grids[table.0].set(row, col, text);
    }

    fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let content = self.to_html()?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Collects table grids and renders them as fixed-width plain text.
#[derive(Debug, Default)]
pub struct TextDocument {
    grids: Vec<Grid>,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the whole document as aligned plain-text grids.
    ///
    /// Each column is padded to its widest cell; a dashed rule separates
    /// the first row from the rest. Grids are separated by a blank line.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (position, grid) in self.grids.iter().enumerate() {
            if position > 0 {
                text.push('\n');
            }

            let widths: Vec<usize> = (0..grid.cols)
                .map(|col| {
                    (0..grid.rows)
                        .map(|row| grid.get(row, col).chars().count())
                        .max()
                        .unwrap_or(0)
                })
                .collect();

            for row in 0..grid.rows {
                let mut line = String::new();
                for col in 0..grid.cols {
                    if col > 0 {
                        line.push_str("  ");
                    }
                    let cell = grid.get(row, col);
                    line.push_str(cell);
                    for _ in cell.chars().count()..widths[col] {
                        line.push(' ');
                    }
                }
                text.push_str(line.trim_end());
                text.push('\n');

                if row == 0 {
                    let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
                    for _ in 0..rule_width {
                        text.push('-');
                    }
                    text.push('\n');
                }
            }
        }
        text
    }
}

impl Document for TextDocument {
    fn add_table(&mut self, rows: usize, cols: usize) -> TableId {
        self.grids.push(Grid::new(rows, cols));
        TableId(self.grids.len() - 1)
    }

    fn set_cell_text(&mut self, table: TableId, row: usize, col: usize, text: &str) {
        self.grids[table.0].set(row, col, text);
    }

    fn save(&self, path: &Path) -> Result<(), DocumentError> {
        fs::write(path, self.to_text())?;
        Ok(())
    }
}
