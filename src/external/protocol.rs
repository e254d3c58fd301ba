//! Wire types for the external predictor process.
//!
//! The predictor is invoked as `<runtime> <script> <date_from> <date_to>`
//! and must reply with exactly one JSON document on stdout; stderr carries
//! free-form diagnostics. Anything else on stdout is a protocol violation.

use serde::{Deserialize, Serialize};
use strum::Display;

/// One hourly prediction from the model (or the synthetic fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub timestamp: String,
    pub predicted_kw: f64,
    pub hour: u32,
    pub date: String,
    pub is_daylight: u8,
    /// Set on every synthetic point so consumers can render a
    /// "reference only" disclaimer per point, not just per response.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_kwh: f64,
    pub peak_kw: f64,
    pub prediction_count: usize,
    pub date_range: DateRange,
    pub avg_kw_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub r2_score: f64,
    pub features_used: u32,
}

/// Raw response document from the predictor process.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<PredictionPoint>,
    #[serde(default)]
    pub summary: Option<ForecastSummary>,
    #[serde(default)]
    pub model_info: Option<ModelInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Where a solar forecast came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ForecastSource {
    Model,
    Fallback,
}

/// The always-available result of the external path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarForecast {
    pub source: ForecastSource,
    pub data: Vec<PredictionPoint>,
    pub summary: ForecastSummary,
    pub model_info: ModelInfo,
}
