//! `tabellchen` reads small delimited text files (CSV, TSV and friends) into an in-memory
//! [`types::Table`], lets you filter rows and rearrange columns, and writes the result back out.
//!
//! ## Format
//!
//! - One record per line, fields separated by a single configurable character.
//! - No quoting or escaping. Runs of the separator act as one delimiter, so empty fields are
//!   never produced when reading.
//! - Empty lines, and lines starting with the comment marker, are skipped when reading.
//! - An optional header line names the columns.
//! - Every data line must have the same number of fields as the first one. Otherwise the
//!   read fails with [`TableError::FieldCountMismatch`].
//!
//! ## Quick example: read, filter, write
//!
//! ```no_run
//! use std::fs::File;
//!
//! use tabellchen::export::{write_table, WriteConfig};
//! use tabellchen::ingestion::{read_table, ReadConfig};
//! use tabellchen::processing::{filter, greater_or_equal};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReadConfig::new("cars.tsv").with_separator('\t');
//! let table = read_table(&config)?;
//!
//! let recent = filter(&table, "Year", greater_or_equal(2023.0))?;
//!
//! let mut out = File::create("recent.tsv")?;
//! write_table(&recent, &mut WriteConfig::new(&mut out, '\t'))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: parsing delimited text into a table
//! - [`export`]: writing a table as delimited text
//! - [`processing`]: filter, add column, reorder columns
//! - [`types`]: the [`types::Table`] data model
//! - [`observability`]: observer hooks for read/write outcomes
//! - [`error`]: the error type shared by every operation

pub mod error;
pub mod export;
pub mod ingestion;
pub mod observability;
pub mod processing;
pub mod types;

pub use error::{IoOperation, TableError, TableResult};
pub use types::Table;
