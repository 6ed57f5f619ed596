//! CSV output backend.
//!
//! Creates `snapshots.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SnapshotRow};

/// File name created inside the output directory.
pub const SNAPSHOTS_FILE: &str = "snapshots.csv";

const HEADER: [&str; 10] = [
    "seq", "tick", "phase", "lat", "lng", "distance_km", "progress_pct",
    "elapsed_secs", "segment", "heading",
];

/// Writes playback snapshots to a CSV file.
pub struct CsvWriter {
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) `snapshots.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record(HEADER)?;

        Ok(Self {
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        self.snapshots.write_record(&[
            row.seq.to_string(),
            row.tick.to_string(),
            row.phase.to_string(),
            format!("{:.7}", row.lat),
            format!("{:.7}", row.lng),
            format!("{:.3}", row.distance_km),
            format!("{:.2}", row.progress_pct),
            format!("{:.1}", row.elapsed_secs),
            row.segment.to_string(),
            row.heading.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        Ok(())
    }
}
