use crate::domain::{ForecastPoint, HistoricalPoint, Month};

const WINDOW: usize = 3;

/// Tier 3: mean of the last 3 readings (or fewer if unavailable), repeated
/// as a constant for every forecast period. Clamped to >= 0.
pub fn predict(points: &[HistoricalPoint], horizon: usize, target: Month) -> Vec<ForecastPoint> {
    let window = &points[points.len().saturating_sub(WINDOW)..];
    let mean = if window.is_empty() {
        0.0
    } else {
        window.iter().map(|p| p.value).sum::<f64>() / window.len() as f64
    };
    let value = mean.max(0.0);

    (1..=horizon)
        .map(|i| ForecastPoint {
            period: target.plus_months(i as i32),
            value,
            components: None,
        })
        .collect()
}
