//! Observed write entrypoint.

use std::io::Write;

use crate::error::TableResult;
use crate::observability::{IoContext, IoDirection, IoOptions, IoStats};
use crate::types::Table;

use super::delimited::{write_table, WriteConfig};

/// Write a table like [`write_table`], reporting the outcome to `options.observer`.
///
/// Writes have no path of their own (the sink belongs to the caller), so the reported
/// [`IoContext::path`] is `None`.
pub fn write_table_with<W: Write>(
    table: &Table,
    config: &mut WriteConfig<W>,
    options: &IoOptions,
) -> TableResult<()> {
    let ctx = IoContext {
        direction: IoDirection::Write,
        path: None,
    };
    let result = write_table(table, config);
    options.report(&ctx, &result, |_| IoStats {
        rows: table.row_count(),
        columns: table.column_count(),
    });
    result
}
