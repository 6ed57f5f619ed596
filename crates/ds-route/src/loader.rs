//! CSV route loader.
//!
//! # CSV format
//!
//! One row per waypoint, in travel order.  `duration_secs` is the duration of
//! the leg *ending* at that row's waypoint, so it is left empty (or ignored)
//! on the first row.
//!
//! ```csv
//! lat,lng,duration_secs
//! 28.5223,77.3966,
//! 28.6139,77.2090,900
//! 28.4595,77.0266,1200
//! ```
//!
//! The loader only parses; structural checks (at least two rows, positive
//! durations) happen when the returned [`RouteInput`] is built.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ds_core::GeoPoint;

use crate::{RouteError, RouteInput};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    lat:           f64,
    lng:           f64,
    duration_secs: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RouteInput`] from a CSV file.
pub fn load_route_csv(path: &Path) -> Result<RouteInput, RouteError> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_route_reader(file)
}

/// Like [`load_route_csv`] but accepts any `Read` source.
pub fn load_route_reader<R: Read>(reader: R) -> Result<RouteInput, RouteError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut input = RouteInput::default();

    for (row, result) in csv_reader.deserialize::<RouteRecord>().enumerate() {
        let rec = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        input.waypoints.push(GeoPoint::new(rec.lat, rec.lng));

        if row == 0 {
            continue;
        }
        let secs = rec.duration_secs.ok_or_else(|| {
            RouteError::Parse(format!("row {}: missing duration_secs", row + 1))
        })?;
        input.durations_secs.push(secs);
    }

    Ok(input)
}
