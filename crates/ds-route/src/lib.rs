//! `ds-route` — the route a vehicle plays back, and where it is along it.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`input`]       | `RouteInput` — unvalidated waypoints + per-leg durations      |
//! | [`model`]       | `RouteModel` — validated route with cumulative tables         |
//! | [`interpolate`] | `PositionInterpolator` — (segment, fraction) → position/distance |
//! | [`loader`]      | CSV → `RouteInput`                                            |
//! | [`error`]       | `RouteError`, `RouteResult<T>`                                |
//!
//! # Route shape
//!
//! A route is `n >= 2` waypoints and `n - 1` strictly positive leg durations.
//! Segment `i` runs from `waypoints[i]` to `waypoints[i + 1]` and takes
//! `durations[i]` seconds.  The origin has no duration of its own.

pub mod error;
pub mod input;
pub mod interpolate;
pub mod loader;
pub mod model;


pub use error::{RouteError, RouteResult};
pub use input::RouteInput;
pub use interpolate::PositionInterpolator;
pub use loader::{load_route_csv, load_route_reader};
pub use model::RouteModel;
