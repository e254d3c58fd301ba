use std::time::Duration;

use thiserror::Error;

use crate::domain::DataAvailability;

/// Errors surfaced from the statistical forecast path.
///
/// The external predictor path never surfaces errors to callers; its
/// failures are logged and downgraded to the synthetic fallback forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Fewer than 3 historical points. Carries the computed availability so
    /// the caller can explain to the user why no forecast was produced.
    #[error("insufficient historical data (<3 periods), cannot generate reliable prediction")]
    InsufficientData { availability: DataAvailability },

    #[error("forecast computation error: {0}")]
    Computation(String),

    #[error("invalid period: {0}")]
    InvalidPeriod(String),
}

/// Internal diagnostics for the external predictor pipeline. These never
/// cross the `SolarPredictor` boundary; every variant degrades to the
/// synthetic fallback.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("no external prediction runtime available (tried: {tried})")]
    Unavailable { tried: String },

    #[error("failed to spawn external predictor: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("external predictor timed out after {0:?}")]
    Timeout(Duration),

    #[error("external predictor exited with {status}: {stderr}")]
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("external predictor protocol violation: {0}")]
    Protocol(String),
}
