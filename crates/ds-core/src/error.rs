//! Geometry error type.

use thiserror::Error;

/// Errors produced when constructing geographic values.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("latitude {0} is not a finite number")]
    NonFiniteLatitude(f64),

    #[error("longitude {0} is not a finite number")]
    NonFiniteLongitude(f64),

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
}

/// Shorthand result type for geometry constructors.
pub type GeoResult<T> = Result<T, GeoError>;
