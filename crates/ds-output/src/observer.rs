//! `SnapshotOutputObserver<W>` — bridges `SnapshotObserver` to an `OutputWriter`.

use ds_sim::{SimulationSnapshot, SnapshotObserver};
use tracing::warn;

use crate::row::SnapshotRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SnapshotObserver`] that writes every snapshot to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After playback, call [`finish`][Self::finish] and
/// check for errors with [`take_error`][Self::take_error].
pub struct SnapshotOutputObserver<W: OutputWriter> {
    writer:     W,
    seq:        u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SnapshotOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            seq:        0,
            last_error: None,
        }
    }

    /// Rows written (or attempted) so far.
    pub fn rows(&self) -> u64 {
        self.seq
    }

    /// Flush the writer.  The playback itself never ends an output file,
    /// since a finished route can be seeked and resumed.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after playback).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_row(&mut self, snapshot: &SimulationSnapshot) {
        self.seq += 1;
        let row = SnapshotRow::from_snapshot(self.seq, snapshot);
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "snapshot output failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SnapshotObserver for SnapshotOutputObserver<W> {
    fn on_snapshot(&mut self, snapshot: &SimulationSnapshot) {
        self.write_row(snapshot);
    }

    /// The final snapshot is written as a `finished` row.
    fn on_finished(&mut self, snapshot: &SimulationSnapshot) {
        self.write_row(snapshot);
    }
}
