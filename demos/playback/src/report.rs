//! Progress logging observer, optionally teeing into a CSV writer.

use tracing::info;

use ds_output::{CsvWriter, OutputError, SnapshotOutputObserver};
use ds_sim::{SimulationSnapshot, SnapshotObserver};

pub struct ProgressReporter {
    every_pct:     f64,
    next_pct:      f64,
    last_progress: f64,
    emitted:       u64,
    output:        Option<SnapshotOutputObserver<CsvWriter>>,
}

impl ProgressReporter {
    pub fn new(every_pct: f64, output: Option<SnapshotOutputObserver<CsvWriter>>) -> Self {
        Self {
            every_pct:     every_pct.max(0.1),
            next_pct:      0.0,
            last_progress: 0.0,
            emitted:       0,
            output,
        }
    }

    pub fn last_progress(&self) -> f64 {
        self.last_progress
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Flush any CSV output and return its first error.
    pub fn finish(&mut self) -> Option<OutputError> {
        let out = self.output.as_mut()?;
        out.finish();
        out.take_error()
    }
}

impl SnapshotObserver for ProgressReporter {
    fn on_snapshot(&mut self, s: &SimulationSnapshot) {
        self.emitted += 1;
        self.last_progress = s.progress_percent;

        // A seek can move progress backwards; re-arm from there.
        if s.progress_percent + self.every_pct < self.next_pct {
            self.next_pct = s.progress_percent;
        }
        if s.progress_percent >= self.next_pct {
            info!(
                "{:5.1}%  {}  {:8.3} km  {:>7.0} s  heading {}",
                s.progress_percent, s.position, s.distance_traveled_km, s.elapsed_secs, s.heading
            );
            let steps = (s.progress_percent / self.every_pct).floor() + 1.0;
            self.next_pct = steps * self.every_pct;
        }

        if let Some(out) = self.output.as_mut() {
            out.on_snapshot(s);
        }
    }

    fn on_finished(&mut self, s: &SimulationSnapshot) {
        info!(
            distance_km = s.distance_traveled_km,
            elapsed_secs = s.elapsed_secs,
            "arrived at {}",
            s.position
        );
        if let Some(out) = self.output.as_mut() {
            out.on_finished(s);
        }
    }
}
