//! Deterministic, dependency-free stand-in for the external predictor.
//!
//! A seasonal base power shaped by a sin² intraday curve over the daylight
//! window. Every point and the summary carry an explicit fallback marker.

use chrono::{Datelike, Duration, NaiveDate};
use itertools::Itertools;

use super::protocol::{
    DateRange, ForecastSource, ForecastSummary, ModelInfo, PredictionPoint, SolarForecast,
};

/// The fixed window within which solar predictions are meaningful.
pub const DAYLIGHT_START: u32 = 6;
pub const DAYLIGHT_END: u32 = 21;

fn seasonal_base_kw(month: u32) -> f64 {
    match month {
        5..=8 => 12.0,
        3..=10 => 6.0,
        _ => 2.0,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn generate(date_from: NaiveDate, date_to: NaiveDate) -> SolarForecast {
    let mut data = Vec::new();
    let mut day = date_from;
    while day <= date_to {
        let base_kw = seasonal_base_kw(day.month());
        let date = day.format("%Y-%m-%d").to_string();
        for hour in DAYLIGHT_START..=DAYLIGHT_END {
            let hour_factor =
                ((hour - DAYLIGHT_START) as f64 * std::f64::consts::PI / 15.0).sin();
            // squared to sharpen the midday peak
            let predicted_kw = (base_kw * hour_factor * hour_factor).max(0.0);
            data.push(PredictionPoint {
                timestamp: format!("{date}T{hour:02}:00:00"),
                predicted_kw: round2(predicted_kw),
                hour,
                date: date.clone(),
                is_daylight: 1,
                fallback: true,
            });
        }
        day += Duration::days(1);
    }

    let total_kwh: f64 = data.iter().map(|p| p.predicted_kw).sum();
    let peak_kw = data.iter().map(|p| p.predicted_kw).fold(0.0f64, f64::max);
    let day_count = data.iter().map(|p| p.date.as_str()).unique().count().max(1);

    SolarForecast {
        source: ForecastSource::Fallback,
        summary: ForecastSummary {
            total_kwh: round2(total_kwh),
            peak_kw: round2(peak_kw),
            prediction_count: data.len(),
            date_range: DateRange {
                start: date_from.format("%Y-%m-%d").to_string(),
                end: date_to.format("%Y-%m-%d").to_string(),
            },
            avg_kw_per_day: round2(total_kwh / day_count as f64),
        },
        model_info: ModelInfo {
            name: "seasonal_daylight_fallback".to_string(),
            r2_score: 0.0,
            features_used: 0,
        },
        data,
    }
}
