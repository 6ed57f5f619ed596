//! `ds-output` — playback output writers.
//!
//! [`CsvWriter`] writes one row per emitted snapshot to `snapshots.csv` in
//! the configured directory.  Writers implement [`OutputWriter`] and are
//! driven by [`SnapshotOutputObserver`], which implements
//! `ds_sim::SnapshotObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ds_output::{CsvWriter, SnapshotOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SnapshotOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SnapshotOutputObserver;
pub use row::SnapshotRow;
pub use writer::OutputWriter;
