//! Observer hooks for table reads and writes.
//!
//! Nothing is logged unless the caller passes an observer through [`IoOptions`]. The
//! `*_with` entry points in [`crate::ingestion`] and [`crate::export`] report every outcome to
//! it.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TableError;

/// Which way data was moving when the event happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoDirection {
    /// Parsing a delimited source into a table.
    Read,
    /// Serializing a table to a sink.
    Write,
}

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IoSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed on bad input).
    Error,
    /// Critical error (I/O failures).
    Critical,
}

impl IoSeverity {
    /// Severity assigned to a failed read or write.
    pub fn for_error(error: &TableError) -> Self {
        match error {
            TableError::Io { .. } => Self::Critical,
            _ => Self::Error,
        }
    }
}

/// Context about a read or write attempt.
#[derive(Debug, Clone)]
pub struct IoContext {
    pub direction: IoDirection,
    /// Input path for reads. Writes go to a caller-owned sink and carry no path.
    pub path: Option<PathBuf>,
}

impl IoContext {
    fn target(&self) -> String {
        match &self.path {
            Some(p) => p.display().to_string(),
            None => "<sink>".to_string(),
        }
    }

    /// `key=value` summary of a successful operation, shared by the built-in observers.
    fn success_line(&self, stats: IoStats) -> String {
        format!(
            "direction={:?} target={} rows={} columns={}",
            self.direction,
            self.target(),
            stats.rows,
            stats.columns
        )
    }

    fn failure_line(&self, severity: IoSeverity, error: &TableError) -> String {
        format!(
            "severity={:?} direction={:?} target={} err={}",
            severity,
            self.direction,
            self.target(),
            error
        )
    }
}

/// Shape of the table that was read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoStats {
    pub rows: usize,
    pub columns: usize,
}

/// Observer interface for read/write outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait TableObserver: Send + Sync {
    /// Called when the operation succeeds.
    fn on_success(&self, _ctx: &IoContext, _stats: IoStats) {}

    /// Called when the operation fails.
    fn on_failure(&self, _ctx: &IoContext, _severity: IoSeverity, _error: &TableError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Observer settings shared by the read and write entry points.
#[derive(Clone)]
pub struct IoOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn TableObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IoSeverity,
}

impl fmt::Debug for IoOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IoOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IoSeverity::Critical,
        }
    }
}

impl IoOptions {
    /// Report `result` to the configured observer, if any.
    pub(crate) fn report<T>(
        &self,
        ctx: &IoContext,
        result: &Result<T, TableError>,
        stats: impl FnOnce(&T) -> IoStats,
    ) {
        let Some(obs) = self.observer.as_ref() else {
            return;
        };
        match result {
            Ok(value) => obs.on_success(ctx, stats(value)),
            Err(e) => {
                let sev = IoSeverity::for_error(e);
                obs.on_failure(ctx, sev, e);
                if sev >= self.alert_at_or_above {
                    obs.on_alert(ctx, sev, e);
                }
            }
        }
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn TableObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn TableObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl TableObserver for CompositeObserver {
    fn on_success(&self, ctx: &IoContext, stats: IoStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs table events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl TableObserver for StdErrObserver {
    fn on_success(&self, ctx: &IoContext, stats: IoStats) {
        eprintln!("[table][ok] {}", ctx.success_line(stats));
    }

    fn on_failure(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        eprintln!("[table][fail] {}", ctx.failure_line(severity, error));
    }

    fn on_alert(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        eprintln!("[ALERT][table] {}", ctx.failure_line(severity, error));
    }
}

/// Appends table events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl TableObserver for FileObserver {
    fn on_success(&self, ctx: &IoContext, stats: IoStats) {
        self.append_line(&format!("{} ok {}", unix_ts(), ctx.success_line(stats)));
    }

    fn on_failure(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        self.append_line(&format!("{} fail {}", unix_ts(), ctx.failure_line(severity, error)));
    }

    fn on_alert(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        self.append_line(&format!("{} ALERT {}", unix_ts(), ctx.failure_line(severity, error)));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoOperation;

    fn io_error() -> TableError {
        TableError::Io {
            op: IoOperation::Flush,
            source: std::io::Error::other("boom"),
        }
    }

    #[test]
    fn io_errors_are_critical_everything_else_is_error() {
        assert_eq!(IoSeverity::for_error(&io_error()), IoSeverity::Critical);
        let missing = TableError::ColumnNotFound {
            name: "x".to_string(),
        };
        assert_eq!(IoSeverity::for_error(&missing), IoSeverity::Error);
    }

    #[test]
    fn file_observer_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("events.log");
        let obs = FileObserver::new(&log);
        let ctx = IoContext {
            direction: IoDirection::Write,
            path: None,
        };

        obs.on_success(&ctx, IoStats { rows: 2, columns: 3 });
        obs.on_alert(&ctx, IoSeverity::Critical, &io_error());

        let text = std::fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("ok direction=Write target=<sink> rows=2 columns=3"));
        assert!(lines[1].contains("ALERT severity=Critical"));
    }

    #[test]
    fn event_lines_name_the_path_for_reads() {
        let ctx = IoContext {
            direction: IoDirection::Read,
            path: Some(PathBuf::from("cars.tsv")),
        };
        assert_eq!(
            ctx.success_line(IoStats { rows: 4, columns: 2 }),
            "direction=Read target=cars.tsv rows=4 columns=2"
        );
        let missing = TableError::ColumnNotFound {
            name: "City".to_string(),
        };
        assert_eq!(
            ctx.failure_line(IoSeverity::Error, &missing),
            "severity=Error direction=Read target=cars.tsv err=column 'City' not found"
        );
    }

    #[test]
    fn debug_hides_observer_internals() {
        let opts = IoOptions {
            observer: Some(Arc::new(StdErrObserver)),
            ..Default::default()
        };
        let dbg = format!("{opts:?}");
        assert!(dbg.contains("observer_set: true"));
        assert!(dbg.contains("alert_at_or_above: Critical"));
    }
}
