//! `ds-core` — foundational geometry for the drone-sim playback engine.
//!
//! Every other `ds-*` crate depends on this one.  It has no `ds-*`
//! dependencies and deliberately small external ones (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, haversine distance, initial bearing         |
//! | [`compass`]   | `Cardinal` eight-point compass heading                  |
//! | [`error`]     | `GeoError`, `GeoResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod compass;
pub mod error;
pub mod geo;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use compass::Cardinal;
pub use error::{GeoError, GeoResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint, bearing_degrees, distance_m};
