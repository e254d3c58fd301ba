//! Tiered forecasting engine for the EcoSphere building-monitoring dashboard.
//!
//! Given a sparse monthly history of meter readings, the engine assesses how
//! much the data can be trusted, picks the best prediction algorithm for that
//! trust level, and computes a forecast with full algorithmic provenance.
//! Solar-generation forecasts are delegated to an external model process,
//! with caching, a hard timeout, and a deterministic synthetic fallback when
//! that process is unavailable.

pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod external;
pub mod forecast;
pub mod telemetry;

pub use config::Config;
pub use error::ForecastError;
pub use forecast::ForecastEngine;
