//! Table-to-document rendering.
//!
//! A built [`Table`] exports as a `1 + 2^n` by `num_columns` grid:
//! header row first, then one row per input combination with
//! stringified 0/1 cells. The export is a single write-once pass;
//! nothing is read back from the document.

use std::path::Path;

use log::debug;

use crate::document::{Document, DocumentError, HtmlDocument, TableId};
use crate::error::Error;
use crate::operation::Operation;
use crate::table::Table;

impl Table {
    /// Renders this table as a grid in `document` and returns the grid's
    /// handle.
    ///
    /// Row 0 holds the column display names; data row `r` holds each
    /// column's 0/1 value at row `r - 1`, as text.
    pub fn to_document(&self, document: &mut impl Document) -> TableId {
        let rows = self.num_rows() + 1;
        let cols = self.num_columns();
        debug!("render({} x {} grid)", rows, cols);

        let id = document.add_table(rows, cols);

        for (col, name) in self.display_names().iter().enumerate() {
            document.set_cell_text(id, 0, col, name);
        }
        for (col, column) in self.columns().iter().enumerate() {
            for (row, &bit) in column.iter().enumerate() {
                document.set_cell_text(id, row + 1, col, &bit.to_string());
            }
        }
        id
    }

    /// Renders this table into `document` and saves the document to
    /// `path`.
    ///
    /// # Errors
    ///
    /// Propagates the backend's save failure.
    pub fn export<P: AsRef<Path>>(
        &self,
        document: &mut impl Document,
        path: P,
    ) -> Result<TableId, DocumentError> {
        let id = self.to_document(document);
        document.save(path.as_ref())?;
        Ok(id)
    }
}

/// Builds a table from `inputs` and `operations` and saves it to `path`
/// as a standalone HTML document.
///
/// Convenience wrapper over [`Table::new`] and [`Table::export`] with an
/// [`HtmlDocument`] backend.
///
/// # Errors
///
/// Any table-construction error, or a `Document` error if the file
/// cannot be written.
pub fn make_document<P: AsRef<Path>>(
    path: P,
    inputs: &str,
    operations: Vec<Operation>,
) -> Result<(), Error> {
    let table = Table::new(inputs, operations)?;
    let mut document = HtmlDocument::new();
    table.export(&mut document, path)?;
    Ok(())
}
