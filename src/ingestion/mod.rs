//! Reading delimited text into a [`crate::types::Table`].
//!
//! - [`read_table`] reads a file named by a [`ReadConfig`]
//! - [`read_table_from_reader`] parses any buffered reader
//! - [`read_table_with`] reads a file and reports the outcome to an observer

pub mod delimited;
pub mod unified;

pub use delimited::{read_table, read_table_from_reader, split_fields, ReadConfig};
pub use unified::read_table_with;
