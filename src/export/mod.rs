//! Writing a [`crate::types::Table`] back to delimited text.
//!
//! The write path is always clean: no comment lines and no blank lines are produced, and the
//! header line appears only when the table has one.

pub mod delimited;
pub mod unified;

pub use delimited::{write_table, WriteConfig};
pub use unified::write_table_with;
