use ds_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] RouteError),

    #[error("simulation is already running; pause or reset it first")]
    AlreadyRunning,

    #[error("playback configuration error: {0}")]
    InvalidConfig(String),

    #[error("tick interval of {secs} s cannot be scheduled")]
    IntervalOutOfRange { secs: f64 },
}

pub type SimResult<T> = Result<T, SimError>;
