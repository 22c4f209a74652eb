//! In-memory table transformations.
//!
//! The processing layer operates on [`crate::types::Table`] values produced by ingestion (or
//! built directly with [`crate::types::Table::new`]).
//!
//! Currently implemented:
//!
//! - [`filter()`]: row filtering by a predicate over one column's raw text
//! - [`greater_or_equal()`]: numeric threshold predicate for [`filter()`]
//! - [`new_column()`]: append an empty column
//! - [`reorder_columns()`]: permute columns
//!
//! ## Example: add a column, move it to the front, keep recent rows
//!
//! ```rust
//! use tabellchen::processing::{filter, greater_or_equal, new_column, reorder_columns};
//! use tabellchen::types::Table;
//!
//! let mut t = Table::new(
//!     vec!["Name".into(), "Year".into()],
//!     vec![
//!         vec!["Bob".into(), "2022".into()],
//!         vec!["Ann".into(), "2024".into()],
//!     ],
//! );
//!
//! new_column(&mut t, "Note");
//! reorder_columns(&mut t, &[2, 0, 1]).unwrap();
//! assert_eq!(t.header, vec!["Note", "Name", "Year"]);
//!
//! let recent = filter(&t, "Year", greater_or_equal(2023.0)).unwrap();
//! assert_eq!(recent.rows, vec![vec!["", "Ann", "2024"]]);
//! ```

pub mod columns;
pub mod filter;

pub use columns::{new_column, reorder_columns};
pub use filter::{filter, greater_or_equal, ColumnSelector};
