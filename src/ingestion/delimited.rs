//! Delimited-text parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IoOperation, TableError, TableResult};
use crate::types::Table;

/// Settings for reading a delimited text file.
///
/// Deserializes with defaults for missing keys, so `{"path": "cars.tsv", "separator": "\t"}`
/// is a complete config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    /// Input file path. Ignored by [`read_table_from_reader`].
    pub path: PathBuf,
    /// Field delimiter.
    pub separator: char,
    /// Lines starting with this character are skipped.
    pub comment_char: char,
    /// Whether the first non-skipped line names the columns.
    pub has_header: bool,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            separator: ',',
            comment_char: '#',
            has_header: true,
        }
    }
}

impl ReadConfig {
    /// Config for `path` with default separator (`,`), comment marker (`#`) and a header.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_comment_char(mut self, comment_char: char) -> Self {
        self.comment_char = comment_char;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// Read the file at `config.path` into a [`Table`].
///
/// The file is closed before this returns, whether parsing succeeded or not.
pub fn read_table(config: &ReadConfig) -> TableResult<Table> {
    let file = File::open(&config.path)
        .map_err(|e| TableError::io(IoOperation::Open(config.path.clone()), e))?;
    read_table_from_reader(BufReader::new(file), config)
}

/// Parse delimited text from any buffered reader.
///
/// Rules:
///
/// - Empty lines and lines whose first character is `config.comment_char` are skipped.
/// - The first remaining line fixes the field count. With a header it becomes
///   [`Table::header`]; otherwise it is the first row and the header stays empty.
/// - Every later line must have exactly that many fields, or the whole read fails with
///   [`TableError::FieldCountMismatch`]. Line numbers are 1-based and include skipped lines.
pub fn read_table_from_reader<R: BufRead>(reader: R, config: &ReadConfig) -> TableResult<Table> {
    let mut table = Table::default();
    let mut expected: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| TableError::io(IoOperation::Read { line: line_no }, e))?;
        if line.is_empty() || line.starts_with(config.comment_char) {
            continue;
        }

        let fields = split_fields(&line, config.separator);
        match expected {
            None => {
                expected = Some(fields.len());
                if config.has_header {
                    table.header = fields;
                } else {
                    table.rows.push(fields);
                }
            }
            Some(n) if fields.len() != n => {
                return Err(TableError::FieldCountMismatch {
                    line: line_no,
                    actual: fields.len(),
                    expected: n,
                });
            }
            Some(_) => table.rows.push(fields),
        }
    }

    Ok(table)
}

/// Split a line on `separator`, treating runs of separators as a single delimiter.
///
/// Leading, trailing and repeated separators never produce empty fields, so `"a,,b,"` yields
/// `["a", "b"]`. There is no quoting or escaping.
pub fn split_fields(line: &str, separator: char) -> Vec<String> {
    line.split(separator)
        .filter(|f| !f.is_empty())
        .map(str::to_owned)
        .collect()
}
