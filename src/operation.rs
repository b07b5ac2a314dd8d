//! Derived-column operations.
//!
//! An [`Operation`] names the columns a gate reads and the label its
//! result registers under. Input columns are given as a pipe-delimited
//! list of names (`"A|NOT B"`); names may refer to raw inputs or to the
//! labels of previously declared operations.

use std::fmt;

use crate::error::Error;
use crate::gate::Gate;
use crate::types::Bit;

/// The delimiter between column names in a specification string.
pub const NAME_DELIMITER: char = '|';

/// A named boolean function over existing table columns.
///
/// Immutable once constructed. The optional header overrides the
/// auto-generated label (gate name followed by the concatenated input
/// names, e.g. `ANDAB` for `AND` over `A|B`).
///
/// # Examples
///
/// ```
/// use ttab_rs::operation::Operation;
///
/// let op = Operation::and("A|B");
/// assert_eq!(op.display_label(), "ANDAB");
///
/// let op = Operation::and("A|B").header("conjunction");
/// assert_eq!(op.display_label(), "conjunction");
/// ```
#[derive(Debug, Clone)]
pub struct Operation {
    inputs: Vec<String>,
    gate: Gate,
    header: Option<String>,
}

// Constructors
impl Operation {
    /// Creates an operation of the given gate kind over a pipe-delimited
    /// list of column names.
    pub fn new(gate: Gate, inputs: &str) -> Self {
        let inputs = inputs.split(NAME_DELIMITER).map(str::to_owned).collect();
        Self {
            inputs,
            gate,
            header: None,
        }
    }

    pub fn and(inputs: &str) -> Self {
        Self::new(Gate::And, inputs)
    }

    pub fn or(inputs: &str) -> Self {
        Self::new(Gate::Or, inputs)
    }

    pub fn not(inputs: &str) -> Self {
        Self::new(Gate::Not, inputs)
    }

    pub fn nand(inputs: &str) -> Self {
        Self::new(Gate::Nand, inputs)
    }

    pub fn nor(inputs: &str) -> Self {
        Self::new(Gate::Nor, inputs)
    }

    pub fn xor(inputs: &str) -> Self {
        Self::new(Gate::Xor, inputs)
    }

    pub fn xnor(inputs: &str) -> Self {
        Self::new(Gate::Xnor, inputs)
    }

    /// Sets an explicit column header, replacing the auto-generated label.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

// Getters
impl Operation {
    /// The referenced column names, in order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// The gate kind this operation applies.
    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// The label this operation's column registers under: the explicit
    /// header if one was set, else the canonical
    /// `{GATE}{concatenated input names}` string.
    pub fn display_label(&self) -> String {
        match &self.header {
            Some(header) => header.clone(),
            None => self.to_string(),
        }
    }
}

impl Operation {
    /// Evaluates the gate over one row's worth of input values,
    /// folding left-to-right.
    ///
    /// # Errors
    ///
    /// `InvalidOperandCount` if `values` is empty, or if a NOT gate is
    /// given more than one value.
    pub fn evaluate(&self, values: &[Bit]) -> Result<Bit, Error> {
        if values.is_empty() || (self.gate.is_unary() && values.len() != 1) {
            return Err(Error::InvalidOperandCount {
                gate: self.gate,
                count: values.len(),
            });
        }
        Ok(self.gate.fold(values))
    }
}

impl fmt::Display for Operation {
    /// The canonical label, ignoring any explicit header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.gate.name(), self.inputs.concat())
    }
}
