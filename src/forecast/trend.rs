use tracing::error;

use super::{moving_average, stats};
use crate::domain::{ForecastPoint, HistoricalPoint, Month};

const WINDOW: usize = 6;

/// Tier 2: OLS line over the last 6 readings (or fewer, minimum 2),
/// extrapolated forward. A single reading degrades to a constant forecast.
/// Clamped to >= 0.
pub fn predict(points: &[HistoricalPoint], horizon: usize, target: Month) -> Vec<ForecastPoint> {
    let window = &points[points.len().saturating_sub(WINDOW)..];
    if window.len() < 2 {
        debug_assert!(!window.is_empty(), "trend predictor called with no history");
        return moving_average::predict(points, horizon, target);
    }

    let x: Vec<f64> = (0..window.len()).map(|i| i as f64).collect();
    let y: Vec<f64> = window.iter().map(|p| p.value).collect();
    let fit = match stats::linear_regression(&x, &y) {
        Ok(fit) => fit,
        // unreachable with index regressors; degrade rather than panic
        Err(err) => {
            error!(%err, "trend regression failed, degrading to moving average");
            return moving_average::predict(points, horizon, target);
        }
    };

    let n = window.len() as f64;
    (1..=horizon)
        .map(|i| ForecastPoint {
            period: target.plus_months(i as i32),
            value: (fit.intercept + fit.slope * (n + i as f64 - 1.0)).max(0.0),
            components: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<HistoricalPoint> {
        let start = Month::new(2024, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| HistoricalPoint {
                period: start.plus_months(i as i32),
                value,
            })
            .collect()
    }

    #[test]
    fn test_extrapolates_fitted_line() {
        // slope 10, intercept 10; step i predicts 10 + 10*(6 + i - 1)
        let points = series(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        let target = Month::new(2024, 6).unwrap();
        let predictions = predict(&points, 3, target);
        assert!((predictions[0].value - 70.0).abs() < 1e-9);
        assert!((predictions[1].value - 80.0).abs() < 1e-9);
        assert!((predictions[2].value - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_uses_only_last_six_points() {
        // the early outlier falls outside the window
        let points = series(&[9999.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        let target = Month::new(2024, 7).unwrap();
        let predictions = predict(&points, 1, target);
        assert!((predictions[0].value - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_degrades_to_constant() {
        let points = series(&[42.0]);
        let predictions = predict(&points, 4, Month::new(2024, 1).unwrap());
        assert_eq!(predictions.len(), 4);
        for p in &predictions {
            assert_eq!(p.value, 42.0);
        }
    }

    #[test]
    fn test_downward_trend_clamps_at_zero() {
        let points = series(&[50.0, 40.0, 30.0, 20.0, 10.0, 0.0]);
        let predictions = predict(&points, 3, Month::new(2024, 6).unwrap());
        for p in &predictions {
            assert_eq!(p.value, 0.0);
        }
    }

    #[test]
    fn test_two_point_window() {
        let points = series(&[10.0, 20.0]);
        let predictions = predict(&points, 2, Month::new(2024, 2).unwrap());
        assert!((predictions[0].value - 30.0).abs() < 1e-9);
        assert!((predictions[1].value - 40.0).abs() < 1e-9);
    }
}
