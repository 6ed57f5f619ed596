//! Snapshot observer trait for rendering and data collection.

use crate::SimulationSnapshot;

/// Callbacks invoked by the
/// [`SimulationController`][crate::SimulationController] as snapshots are
/// produced.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SnapshotObserver for ProgressPrinter {
///     fn on_snapshot(&mut self, s: &SimulationSnapshot) {
///         println!("{:5.1}%  {}  {:.2} km", s.progress_percent, s.position, s.distance_traveled_km);
///     }
/// }
/// ```
pub trait SnapshotObserver {
    /// Called after every tick and every seek.
    fn on_snapshot(&mut self, _snapshot: &SimulationSnapshot) {}

    /// Called once when the final segment completes, with the vehicle at the
    /// destination and `phase == Finished`.
    fn on_finished(&mut self, _final_snapshot: &SimulationSnapshot) {}
}

/// A [`SnapshotObserver`] that does nothing.
pub struct NoopObserver;

impl SnapshotObserver for NoopObserver {}

/// Collects every emitted snapshot in order.
impl SnapshotObserver for Vec<SimulationSnapshot> {
    fn on_snapshot(&mut self, snapshot: &SimulationSnapshot) {
        self.push(snapshot.clone());
    }
}

impl<O: SnapshotObserver + ?Sized> SnapshotObserver for &mut O {
    fn on_snapshot(&mut self, snapshot: &SimulationSnapshot) {
        (**self).on_snapshot(snapshot)
    }

    fn on_finished(&mut self, final_snapshot: &SimulationSnapshot) {
        (**self).on_finished(final_snapshot)
    }
}
