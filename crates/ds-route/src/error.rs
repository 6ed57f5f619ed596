use thiserror::Error;

/// Why a route was rejected, or why one could not be loaded.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("a route needs at least 2 waypoints, got {got}")]
    TooFewWaypoints { got: usize },

    #[error("expected {expected} leg durations for the waypoints given, got {got}")]
    DurationCountMismatch { expected: usize, got: usize },

    #[error("segment {segment} has non-positive duration {secs} s")]
    NonPositiveDuration { segment: usize, secs: f64 },

    #[error("waypoint {index} is invalid: {source}")]
    InvalidWaypoint {
        index:  usize,
        #[source]
        source: ds_core::GeoError,
    },

    #[error("route parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouteError {
    /// `true` for the variants that describe a structurally invalid route
    /// (as opposed to a failure to read one).
    pub fn is_invalid_route(&self) -> bool {
        matches!(
            self,
            RouteError::TooFewWaypoints { .. }
                | RouteError::DurationCountMismatch { .. }
                | RouteError::NonPositiveDuration { .. }
                | RouteError::InvalidWaypoint { .. }
        )
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
