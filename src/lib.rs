//! # ttab-rs: Truth Tables in Rust
//!
//! **`ttab-rs`** generates truth tables for boolean logic expressions and renders them into document tables.
//! Given a set of input variable names and a sequence of derived gate operations, it enumerates
//! every combination of the inputs, evaluates each operation column by column, and exports the
//! result through a small document-authoring interface.
//!
//! ## Key Features
//!
//! - **Named Columns**: Every column --- input or derived --- is addressable by name, and a derived
//!   operation may reference the label of an earlier one, so columns chain naturally.
//! - **Explicit Gates**: The seven gate kinds (AND, OR, NOT, NAND, NOR, XOR, XNOR) form a tagged
//!   enum; n-ary application is an explicit left-fold, so `AND(a, b, c)` means `AND(AND(a, b), c)`.
//! - **Deterministic Enumeration**: Stored columns follow the standard truth-table layout --- the
//!   leftmost input toggles slowest, and each row's bits read as the binary row index.
//! - **Pluggable Export**: Rendering goes through the [`Document`][crate::document::Document]
//!   trait; HTML and plain-text backends ship in the crate.
//!
//! ## Quick Start
//!
//! Add `ttab-rs` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ttab-rs = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use ttab_rs::operation::Operation;
//! use ttab_rs::table::Table;
//!
//! // 1. Declare inputs and derived columns
//! let table = Table::new("A|B", vec![
//!     Operation::not("A").header("NOT A"),
//!     Operation::and("A|NOT A").header("always0"),
//! ]).unwrap();
//!
//! // 2. Inspect columns by name
//! let always0 = table.column("always0").unwrap();
//! assert!(always0.iter().all(|bit| bit.is_zero()));
//!
//! // 3. Render into a document backend
//! let mut doc = ttab_rs::document::TextDocument::new();
//! table.to_document(&mut doc);
//! println!("{}", doc.to_text());
//! ```
//!
//! ## Core Components
//!
//! - **[`table`]**: The heart of the crate. Builds stored and derived columns in one pass.
//! - **[`operation`]**: Derived-column declarations over pipe-delimited column names.
//! - **[`document`]**: The document seam and its HTML/text backends.

pub mod document;
pub mod error;
pub mod export;
pub mod gate;
pub mod operation;
pub mod table;
pub mod types;
