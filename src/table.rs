//! Truth-table construction.
//!
//! A [`Table`] enumerates all `2^n` combinations of its input variables
//! as stored columns, then evaluates each [`Operation`] in declaration
//! order, appending one derived column per operation. Column names
//! (input names and operation labels) resolve through an index that
//! grows as columns are built, so an operation may reference any column
//! declared before it. This forward-only pass is what allows chaining
//! without a dependency graph: a reference that is not yet registered is
//! an error, so no cycle can form.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::Error;
use crate::operation::{Operation, NAME_DELIMITER};
use crate::types::Bit;

/// A single table column: one 0/1 value per row.
pub type Column = Vec<Bit>;

/// Upper bound on input variables.
///
/// Each input doubles the row count; 24 inputs already mean 16M rows.
pub const MAX_INPUTS: usize = 24;

/// A fully evaluated truth table.
///
/// Columns are computed eagerly at construction time and never mutated
/// afterward. Column order is input declaration order followed by
/// operation declaration order; the row count is fixed at `2^n` for `n`
/// inputs.
///
/// # Examples
///
/// ```
/// use ttab_rs::operation::Operation;
/// use ttab_rs::table::Table;
///
/// let table = Table::new("A|B", vec![
///     Operation::not("A").header("NOT A"),
///     Operation::and("A|NOT A").header("always0"),
/// ]).unwrap();
///
/// assert_eq!(table.num_rows(), 4);
/// assert!(table.column("always0").unwrap().iter().all(|b| b.is_zero()));
/// ```
pub struct Table {
    inputs: Vec<String>,
    operations: Vec<Operation>,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    names: Vec<String>,
}

impl Table {
    /// Builds the full table from a pipe-delimited list of input names
    /// and an ordered list of derived operations.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if a name in a specification is empty.
    /// - `DuplicateColumn` if an input name or operation label repeats.
    /// - `UnresolvedReference` if an operation references a column that
    ///   is not declared before it.
    /// - `InvalidOperandCount` if an operation's operand count does not
    ///   fit its gate.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_INPUTS`] input variables are declared.
    pub fn new(inputs: &str, operations: Vec<Operation>) -> Result<Self, Error> {
        let inputs = split_names(inputs)?;
        let total = inputs.len();
        assert!(
            total <= MAX_INPUTS,
            "Input count should be in the range 1..={}",
            MAX_INPUTS
        );
        debug!("table({} inputs, {} operations)", total, operations.len());

        let mut columns: Vec<Column> = Vec::with_capacity(total + operations.len());
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut names: Vec<String> = Vec::with_capacity(total + operations.len());

        // Stored columns, one per input variable.
        for (position, name) in inputs.iter().enumerate() {
            let column = stored_column(position + 1, total)?;
            register(&mut index, &mut names, name, columns.len())?;
            columns.push(column);
        }

        // Derived columns, strictly in declaration order. Each finished
        // column registers under its display label before the next
        // operation is evaluated.
        let rows = 1usize << total;
        for operation in &operations {
            let label = operation.display_label();
            debug!("derive({:?} = {})", label, operation);

            let column = {
                let sources = resolve(&index, &columns, operation)?;
                let mut column = Column::with_capacity(rows);
                for row in 0..rows {
                    let values: Vec<Bit> = sources.iter().map(|source| source[row]).collect();
                    column.push(operation.evaluate(&values)?);
                }
                column
            };

            register(&mut index, &mut names, &label, columns.len())?;
            columns.push(column);
        }

        Ok(Self {
            inputs,
            operations,
            columns,
            index,
            names,
        })
    }
}

// Getters
impl Table {
    /// The input variable names, in declaration order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// The derived operations, in declaration order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The number of data rows: `2^n` for `n` inputs.
    pub fn num_rows(&self) -> usize {
        1 << self.inputs.len()
    }

    /// The number of columns, stored plus derived.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// All column headers: input names first, then operation labels.
    pub fn display_names(&self) -> &[String] {
        &self.names
    }

    /// All columns, in header order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by name (input name or operation label).
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&position| &self.columns[position])
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("inputs", &self.inputs.len())
            .field("operations", &self.operations.len())
            .field("rows", &self.num_rows())
            .finish()
    }
}

/// Builds the stored column for the input at 1-based `position` out of
/// `total` input variables.
///
/// The column holds `2^total` rows: a block of `2^(total - position)`
/// zeros, then as many ones, repeated until the column is full.
/// Equivalently, row `r` holds bit `(total - position)` of `r`, so the
/// leftmost input toggles slowest and the rightmost alternates every row.
///
/// # Errors
///
/// `InvalidColumnIndex` if `position` is 0 or greater than `total`.
pub fn stored_column(position: usize, total: usize) -> Result<Column, Error> {
    if position == 0 || position > total {
        return Err(Error::InvalidColumnIndex {
            index: position,
            total,
        });
    }

    let rows = 1usize << total;
    let block = 1usize << (total - position);

    let mut column = Column::with_capacity(rows);
    for row in 0..rows {
        column.push(Bit::from(row & block != 0));
    }
    Ok(column)
}

/// Splits a pipe-delimited specification into column names.
fn split_names(spec: &str) -> Result<Vec<String>, Error> {
    let names: Vec<String> = spec
        .split(NAME_DELIMITER)
        .map(str::to_owned)
        .collect();
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(Error::InvalidName {
            spec: spec.to_owned(),
        });
    }
    Ok(names)
}

/// Registers a column name at the given position, rejecting duplicates.
fn register(
    index: &mut HashMap<String, usize>,
    names: &mut Vec<String>,
    name: &str,
    position: usize,
) -> Result<(), Error> {
    if index.insert(name.to_owned(), position).is_some() {
        return Err(Error::DuplicateColumn {
            name: name.to_owned(),
        });
    }
    names.push(name.to_owned());
    Ok(())
}

/// Resolves an operation's referenced names against the current index.
fn resolve<'a>(
    index: &HashMap<String, usize>,
    columns: &'a [Column],
    operation: &Operation,
) -> Result<Vec<&'a Column>, Error> {
    operation
        .inputs()
        .iter()
        .map(|name| {
            if name.trim().is_empty() {
                return Err(Error::InvalidName {
                    spec: operation.inputs().join("|"),
                });
            }
            index
                .get(name)
                .map(|&position| &columns[position])
                .ok_or_else(|| Error::UnresolvedReference { name: name.clone() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn bits(values: &[u8]) -> Column {
        values.iter().map(|&v| Bit::new(v)).collect()
    }

    #[test]
    fn test_stored_column_patterns() {
        // Standard layout for three inputs A, B, C.
        assert_eq!(stored_column(1, 3).unwrap(), bits(&[0, 0, 0, 0, 1, 1, 1, 1]));
        assert_eq!(stored_column(2, 3).unwrap(), bits(&[0, 0, 1, 1, 0, 0, 1, 1]));
        assert_eq!(stored_column(3, 3).unwrap(), bits(&[0, 1, 0, 1, 0, 1, 0, 1]));
    }

    #[test]
    fn test_stored_column_length() {
        for total in 1..=6 {
            for position in 1..=total {
                assert_eq!(stored_column(position, total).unwrap().len(), 1 << total);
            }
        }
    }

    #[test]
    fn test_stored_column_invalid_index() {
        assert!(matches!(
            stored_column(0, 3),
            Err(Error::InvalidColumnIndex { index: 0, total: 3 })
        ));
        assert!(matches!(
            stored_column(4, 3),
            Err(Error::InvalidColumnIndex { index: 4, total: 3 })
        ));
    }

    #[test]
    fn test_inputs_only_table() {
        let table = Table::new("A|B", vec![]).unwrap();
        assert_eq!(table.num_rows(), 4);
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.display_names(), &["A", "B"]);
        assert_eq!(table.column("A").unwrap(), &bits(&[0, 0, 1, 1]));
        assert_eq!(table.column("B").unwrap(), &bits(&[0, 1, 0, 1]));
    }

    #[test]
    fn test_derived_column_registers_under_label() {
        let table = Table::new("A|B", vec![Operation::and("A|B")]).unwrap();
        assert_eq!(table.display_names(), &["A", "B", "ANDAB"]);
        assert_eq!(table.column("ANDAB").unwrap(), &bits(&[0, 0, 0, 1]));
    }

    #[test]
    fn test_chained_operations() {
        let table = Table::new(
            "A|B|C",
            vec![
                Operation::not("B").header("NOT B"),
                Operation::and("A|NOT B").header("X"),
                Operation::or("X|C"),
            ],
        )
        .unwrap();

        // A = 00001111, B = 00110011, C = 01010101
        // NOT B = 11001100
        // X = A AND NOT B = 00001100
        // OR(X, C) = 01011101
        assert_eq!(table.column("X").unwrap(), &bits(&[0, 0, 0, 0, 1, 1, 0, 0]));
        assert_eq!(
            table.column("ORXC").unwrap(),
            &bits(&[0, 1, 0, 1, 1, 1, 0, 1])
        );
    }

    #[test]
    fn test_unresolved_reference() {
        let err = Table::new("A|B", vec![Operation::and("A|Z")]).unwrap_err();
        assert!(matches!(err, Error::UnresolvedReference { name } if name == "Z"));
    }

    #[test]
    fn test_forward_reference_is_unresolved() {
        // "late" is declared after the operation that references it.
        let err = Table::new(
            "A|B",
            vec![
                Operation::or("A|late"),
                Operation::and("A|B").header("late"),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnresolvedReference { name } if name == "late"));
    }

    #[test]
    fn test_duplicate_input_name() {
        let err = Table::new("A|A", vec![]).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn { name } if name == "A"));
    }

    #[test]
    fn test_duplicate_operation_label() {
        let err = Table::new("A|B", vec![Operation::and("A|B").header("A")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn { name } if name == "A"));
    }

    #[test]
    fn test_empty_input_name() {
        let err = Table::new("A||B", vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_not_over_two_columns_fails() {
        let err = Table::new("A|B", vec![Operation::not("A|B")]).unwrap_err();
        assert!(matches!(err, Error::InvalidOperandCount { count: 2, .. }));
    }

    #[test]
    #[should_panic(expected = "Input count should be in the range")]
    fn test_too_many_inputs_panics() {
        let names: Vec<String> = (1..=MAX_INPUTS + 1).map(|i| format!("X{}", i)).collect();
        let _ = Table::new(&names.join("|"), vec![]);
    }

    #[test]
    fn test_determinism() {
        let build = || {
            Table::new(
                "A|B|C",
                vec![
                    Operation::xor("A|B").header("P"),
                    Operation::xnor("P|C"),
                ],
            )
            .unwrap()
        };
        let first = build();
        let second = build();
        assert_eq!(first.columns(), second.columns());
        assert_eq!(first.display_names(), second.display_names());
    }
}
