//! Core data model.
//!
//! A [`Table`] is an optional header (ordered column names) plus row-major storage where every
//! field is kept as text. Parsing produces tables, the writer serializes them, and the
//! processing layer filters rows and rearranges columns.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// In-memory delimited-text table.
///
/// Rows are stored as `Vec<Vec<String>>`. When `header` is non-empty, every row has the same
/// length as the header. An empty header means the table was read in headerless mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in order. Names need not be unique.
    pub header: Vec<String>,
    /// Row-major field storage, in read/insertion order.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from a header and rows without checking row widths.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Create a table, rejecting rows whose width disagrees with the column count.
    pub fn try_new(header: Vec<String>, rows: Vec<Vec<String>>) -> TableResult<Self> {
        let table = Self::new(header, rows);
        table.validate()?;
        Ok(table)
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    ///
    /// This is the header length when a header is present, otherwise the width of the first
    /// row (0 for an empty headerless table).
    pub fn column_count(&self) -> usize {
        if !self.header.is_empty() {
            return self.header.len();
        }
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the table carries no column names.
    pub fn is_headerless(&self) -> bool {
        self.header.is_empty()
    }

    /// Check that every row is as wide as [`Self::column_count`].
    pub fn validate(&self) -> TableResult<()> {
        let expected = self.column_count();
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, fields)) => Err(TableError::RowWidthMismatch {
                row,
                actual: fields.len(),
                expected,
            }),
            None => Ok(()),
        }
    }

    /// Returns the 0-based index of the first header entry equal to `name`.
    pub fn col_id_by_name(&self, name: &str) -> TableResult<usize> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::ColumnNotFound {
                name: name.to_owned(),
            })
    }

    /// Create a new table containing only rows that match `predicate`.
    ///
    /// The returned table keeps the original header and the relative order of kept rows.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[String]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            header: self.header.clone(),
            rows,
        }
    }

    /// Append a column named `name`, with an empty field in every existing row.
    ///
    /// Duplicate names are allowed.
    pub fn new_column(&mut self, name: impl Into<String>) {
        self.header.push(name.into());
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Rearrange columns so that old column `new_order[i]` becomes column `i`.
    ///
    /// `new_order` must be a permutation of `0..column_count()`. The whole input is validated
    /// before anything is touched, so on error the table is unchanged.
    pub fn reorder_columns(&mut self, new_order: &[usize]) -> TableResult<()> {
        let columns = self.column_count();
        if new_order.len() != columns {
            return Err(TableError::ArityMismatch {
                expected: columns,
                actual: new_order.len(),
            });
        }

        let mut seen = HashSet::with_capacity(columns);
        for &index in new_order {
            if index >= columns {
                return Err(TableError::IndexOutOfRange { index, columns });
            }
            if !seen.insert(index) {
                return Err(TableError::DuplicateIndex { index });
            }
        }
        self.validate()?;

        if !self.header.is_empty() {
            self.header = permute(&self.header, new_order);
        }
        for row in &mut self.rows {
            *row = permute(row, new_order);
        }
        Ok(())
    }
}

fn permute(fields: &[String], order: &[usize]) -> Vec<String> {
    order.iter().map(|&i| fields[i].clone()).collect()
}
