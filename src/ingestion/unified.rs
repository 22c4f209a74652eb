//! Observed read entrypoint.

use crate::error::TableResult;
use crate::observability::{IoContext, IoDirection, IoOptions, IoStats};
use crate::types::Table;

use super::delimited::{read_table, ReadConfig};

/// Read a table like [`read_table`], reporting the outcome to `options.observer`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use tabellchen::ingestion::{read_table_with, ReadConfig};
/// use tabellchen::observability::{IoOptions, IoSeverity, StdErrObserver};
///
/// # fn main() -> Result<(), tabellchen::TableError> {
/// let opts = IoOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: IoSeverity::Critical,
/// };
/// let table = read_table_with(&ReadConfig::new("cars.tsv").with_separator('\t'), &opts)?;
/// println!("rows={}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn read_table_with(config: &ReadConfig, options: &IoOptions) -> TableResult<Table> {
    let ctx = IoContext {
        direction: IoDirection::Read,
        path: Some(config.path.clone()),
    };
    let result = read_table(config);
    options.report(&ctx, &result, |t| IoStats {
        rows: t.row_count(),
        columns: t.column_count(),
    });
    result
}
