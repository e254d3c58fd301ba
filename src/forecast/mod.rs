pub mod availability;
pub mod engine;
pub mod moving_average;
pub mod seasonal;
pub mod stats;
pub mod strategy;
pub mod trend;

pub use engine::ForecastEngine;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::domain::{HistoricalPoint, Month};

    fn series(values: &[f64]) -> Vec<HistoricalPoint> {
        let start = Month::new(2020, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| HistoricalPoint {
                period: start.plus_months(i as i32),
                value,
            })
            .collect()
    }

    proptest! {
        // Cross-tier contract: every predictor emits exactly `horizon`
        // points, strictly increasing starting the month after the target,
        // and never a negative value, no matter how hostile the input.
        #[test]
        fn tiers_hold_shape_and_clamp(
            values in proptest::collection::vec(-1000.0f64..1000.0, 1..40),
            horizon in 1usize..25,
        ) {
            let points = series(&values);
            let target = points.last().unwrap().period;
            let tiers = [
                super::seasonal::predict(&points, horizon, target),
                super::trend::predict(&points, horizon, target),
                super::moving_average::predict(&points, horizon, target),
            ];
            for predictions in tiers {
                prop_assert_eq!(predictions.len(), horizon);
                prop_assert_eq!(predictions[0].period, target.plus_months(1));
                for pair in predictions.windows(2) {
                    prop_assert!(pair[0].period < pair[1].period);
                }
                for p in &predictions {
                    prop_assert!(p.value >= 0.0);
                }
            }
        }
    }
}
