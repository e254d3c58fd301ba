use crate::domain::{ForecastPoint, HistoricalPoint, Month, SeasonalComponents};

const WEIGHT_LAST_YEAR: f64 = 0.4;
const WEIGHT_TWO_YEARS_AGO: f64 = 0.4;
const WEIGHT_RECENT: f64 = 0.2;
const RECENT_WINDOW: usize = 3;

/// Tier 1: blends same-period-last-year, same-period-two-years-ago and the
/// recent average at 0.4/0.4/0.2. The weighted components are kept on each
/// point so the dashboard can show where a number came from. Clamped to >= 0.
pub fn predict(points: &[HistoricalPoint], horizon: usize, target: Month) -> Vec<ForecastPoint> {
    let recent = recent_average(points);

    (1..=horizon)
        .map(|i| {
            let period = target.plus_months(i as i32);
            let components = SeasonalComponents {
                last_year: WEIGHT_LAST_YEAR * value_at_same_period(points, period.minus_months(12)),
                two_years_ago: WEIGHT_TWO_YEARS_AGO
                    * value_at_same_period(points, period.minus_months(24)),
                recent_average: WEIGHT_RECENT * recent,
            };
            let value =
                (components.last_year + components.two_years_ago + components.recent_average)
                    .max(0.0);
            ForecastPoint {
                period,
                value,
                components: Some(components),
            }
        })
        .collect()
}

/// Same-period lookup ladder: exact month, then the average of all readings
/// sharing that calendar month across years, then the overall average.
fn value_at_same_period(points: &[HistoricalPoint], period: Month) -> f64 {
    if let Some(p) = points.iter().find(|p| p.period == period) {
        return p.value;
    }
    let same_month: Vec<f64> = points
        .iter()
        .filter(|p| p.period.month() == period.month())
        .map(|p| p.value)
        .collect();
    if !same_month.is_empty() {
        return same_month.iter().sum::<f64>() / same_month.len() as f64;
    }
    if points.is_empty() {
        0.0
    } else {
        points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64
    }
}

fn recent_average(points: &[HistoricalPoint]) -> f64 {
    let window = &points[points.len().saturating_sub(RECENT_WINDOW)..];
    if window.is_empty() {
        0.0
    } else {
        window.iter().map(|p| p.value).sum::<f64>() / window.len() as f64
    }
}
