use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::period::Month;

/// A single historical meter reading. Supplied by the caller in ascending
/// period order; never mutated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub period: Month,
    pub value: f64,
}

/// What the historical series can support, recomputed per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAvailability {
    pub total_points: usize,
    pub has_two_years: bool,
    pub has_six_months: bool,
    pub has_three_months: bool,
    pub has_last_year_same_period: bool,
    pub has_two_years_ago_same_period: bool,
}

/// The four prediction tiers, ranked by required data maturity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StrategyId {
    SeasonalWeighted,
    TrendBased,
    MovingAverage,
    InsufficientData,
}

/// A selected tier with its self-reported reliability metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strategy {
    pub id: StrategyId,
    pub display_name: &'static str,
    /// Self-reported reliability score, 0-100.
    pub confidence: u8,
    /// Human-readable star rating paired with the confidence, for display.
    pub accuracy_stars: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

/// Weighted contributions of the seasonal blend, kept for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalComponents {
    pub last_year: f64,
    pub two_years_ago: f64,
    pub recent_average: f64,
}

/// One forecast period. `value` is always >= 0; `components` is populated
/// only by the seasonal tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub period: Month,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<SeasonalComponents>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastMetadata {
    #[serde(flatten)]
    pub strategy: Strategy,
    pub data_availability: DataAvailability,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastResult {
    pub predictions: Vec<ForecastPoint>,
    pub metadata: ForecastMetadata,
}

/// The measured quantity a forecast is requested for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ForecastDomain {
    Electricity,
    Water,
    Thermal,
}
