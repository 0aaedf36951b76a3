//! The `TraceWriter` trait implemented by trace backends.

use crate::{AgentSnapshotRow, OutputResult, RunEventRow};

/// Sink for trace rows.
///
/// Errors are returned to [`TraceObserver`][crate::TraceObserver], which
/// keeps the first one for [`take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one event row.
    fn write_event(&mut self, row: &RunEventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
