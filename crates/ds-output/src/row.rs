//! Plain data row type written by output backends.

use ds_core::Cardinal;
use ds_sim::{Phase, SimulationSnapshot};

/// One emitted snapshot, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    /// Emission order, counting ticks and seeks alike.
    pub seq:          u64,
    pub tick:         u64,
    pub phase:        Phase,
    pub lat:          f64,
    pub lng:          f64,
    pub distance_km:  f64,
    pub progress_pct: f64,
    pub elapsed_secs: f64,
    pub segment:      usize,
    pub heading:      Cardinal,
}

impl SnapshotRow {
    pub fn from_snapshot(seq: u64, s: &SimulationSnapshot) -> Self {
        Self {
            seq,
            tick:         s.tick,
            phase:        s.phase,
            lat:          s.position.lat,
            lng:          s.position.lng,
            distance_km:  s.distance_traveled_km,
            progress_pct: s.progress_percent,
            elapsed_secs: s.elapsed_secs,
            segment:      s.segment,
            heading:      s.heading,
        }
    }
}
