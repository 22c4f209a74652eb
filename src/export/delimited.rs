//! Delimited-text serialization.

use std::io::{self, BufWriter, Write};

use crate::error::{IoOperation, TableError, TableResult};
use crate::types::Table;

/// Destination and separator for [`write_table`].
///
/// The sink's lifecycle stays with the caller; pass `&mut File` to keep using the file
/// afterwards.
#[derive(Debug)]
pub struct WriteConfig<W: Write> {
    pub sink: W,
    pub separator: char,
}

impl<W: Write> WriteConfig<W> {
    pub fn new(sink: W, separator: char) -> Self {
        Self { sink, separator }
    }
}

/// Write `table` to `config.sink`, one record per line.
///
/// The header is written first when it is non-empty. Fields are joined with the separator
/// verbatim (no quoting), and every line ends with `\n`. Output is buffered and flushed
/// before returning; on a failed write the partial output already handed to the sink is
/// left as is.
pub fn write_table<W: Write>(table: &Table, config: &mut WriteConfig<W>) -> TableResult<()> {
    let mut buf = [0u8; 4];
    let separator: &str = config.separator.encode_utf8(&mut buf);
    let mut out = BufWriter::new(&mut config.sink);

    if !table.header.is_empty() {
        write_record(&mut out, &table.header, separator)
            .map_err(|e| TableError::io(IoOperation::WriteHeader, e))?;
    }
    for (idx, row) in table.rows.iter().enumerate() {
        write_record(&mut out, row, separator)
            .map_err(|e| TableError::io(IoOperation::WriteRow(idx), e))?;
    }

    out.flush().map_err(|e| TableError::io(IoOperation::Flush, e))
}

fn write_record<W: Write>(out: &mut W, fields: &[String], separator: &str) -> io::Result<()> {
    let mut line = fields.join(separator);
    line.push('\n');
    out.write_all(line.as_bytes())
}
