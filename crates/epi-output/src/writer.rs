//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, OutputResult, StateCountsRow};

/// Backend-agnostic sink for simulation output.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one per-step counts row.
    fn write_counts(&mut self, row: &StateCountsRow) -> OutputResult<()>;

    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — called at the end of every run of an ensemble.
    fn finish(&mut self) -> OutputResult<()>;
}
