//! `ds-sim` — the route playback state machine.
//!
//! # Phases
//!
//! ```text
//!            start                 pause
//!   Idle ───────────▶ Running ◀──────────▶ Paused
//!    ▲                   │      resume       ▲
//!    │ reset (any)       │ last step         │ seek_to (any but Idle)
//!    └────────────── Finished ───────────────┘
//! ```
//!
//! # Tick
//!
//! Every route segment is divided into `num_steps` steps.  One step takes the
//! same simulated time everywhere on the route:
//!
//! ```text
//! tick_interval_secs = total_duration_secs / (num_steps * segment_count)
//! ```
//!
//! Each tick advances the segment fraction by `1 / num_steps`, adds one tick
//! interval to `elapsed_secs`, and emits a [`SimulationSnapshot`].  The real
//! time between ticks is `tick_interval_secs / speed`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ds_clock::IntervalClock;
//! use ds_route::RouteInput;
//! use ds_sim::{PlaybackConfig, SimulationController};
//!
//! let mut sim = SimulationController::new(PlaybackConfig::default(), IntervalClock::new());
//! sim.start(&route_input)?;
//! let mut log: Vec<ds_sim::SimulationSnapshot> = Vec::new();
//! sim.run(&mut log);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod observer;
pub mod snapshot;
pub mod state;


pub use config::{IntervalPolicy, PlaybackConfig};
pub use controller::SimulationController;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SnapshotObserver};
pub use snapshot::SimulationSnapshot;
pub use state::{Phase, SimulationState};
