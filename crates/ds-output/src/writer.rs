//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, SnapshotRow};

/// Trait implemented by snapshot writers.
///
/// Methods return errors to the caller.  [`SnapshotOutputObserver`] keeps
/// the first one, retrievable with
/// [`take_error`][crate::SnapshotOutputObserver::take_error].
///
/// [`SnapshotOutputObserver`]: crate::SnapshotOutputObserver
pub trait OutputWriter {
    /// Write one snapshot row.
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
