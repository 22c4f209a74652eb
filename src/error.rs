use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// The I/O step that failed, carried by [`TableError::Io`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoOperation {
    /// Opening the input file.
    Open(PathBuf),
    /// Reading a line (1-based, counting skipped lines).
    Read { line: usize },
    /// Writing the header line.
    WriteHeader,
    /// Writing a data row (0-based row index).
    WriteRow(usize),
    /// Flushing buffered output to the sink.
    Flush,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(path) => write!(f, "open '{}'", path.display()),
            Self::Read { line } => write!(f, "read line {line}"),
            Self::WriteHeader => f.write_str("write header"),
            Self::WriteRow(row) => write!(f, "write row {row}"),
            Self::Flush => f.write_str("flush output"),
        }
    }
}

/// Error type returned by reading, writing and mutating a [`crate::types::Table`].
///
/// Every variant carries typed fields so callers can branch on the kind of failure rather
/// than inspect the message.
#[derive(Debug, Error)]
pub enum TableError {
    /// Underlying I/O error (file not found, permission denied, broken sink...).
    #[error("io error: failed to {op}: {source}")]
    Io {
        op: IoOperation,
        #[source]
        source: std::io::Error,
    },

    /// A data line does not have the field count established by the first non-skipped line.
    #[error("line {line} has {actual} fields, expected {expected}")]
    FieldCountMismatch {
        line: usize,
        actual: usize,
        expected: usize,
    },

    /// No header entry matches the requested name.
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    /// A column permutation does not have one index per column.
    #[error("expected {expected} column indices, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// A column permutation references a column that does not exist.
    #[error("column index {index} out of range for {columns} columns")]
    IndexOutOfRange { index: usize, columns: usize },

    /// A column permutation lists the same index more than once.
    #[error("duplicate column index {index}")]
    DuplicateIndex { index: usize },

    /// A dynamic column selector is neither an index nor a name.
    #[error("can't select a column with a value of type {found}")]
    UnsupportedSelectorType { found: String },

    /// An index selector points past the width of the first row.
    #[error("tried to access column {index}, but there are only {width} columns")]
    ColumnOutOfBounds { index: usize, width: usize },

    /// An index selector was used on a table without rows, so there is no width to check against.
    #[error("tried to access column {index}, but the table has no rows")]
    NoRowsToMeasure { index: usize },

    /// A row's width disagrees with the table's column count.
    #[error("row {row} has {actual} fields, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        actual: usize,
        expected: usize,
    },
}

impl TableError {
    pub(crate) fn io(op: IoOperation, source: std::io::Error) -> Self {
        Self::Io { op, source }
    }
}
