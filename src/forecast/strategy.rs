use crate::domain::{DataAvailability, Strategy, StrategyId};

/// Maps availability to a prediction tier, first match wins: more data
/// earns a better tier.
///
/// Selection is count-based only. The same-period flags in `availability`
/// ride along for display and error payloads but do not influence the tier:
/// a 24-point series clustered in recent months still qualifies for the
/// seasonal tier even without true last-year coverage. Kept that way to
/// match the dashboard's established behavior.
pub fn select(availability: &DataAvailability) -> Strategy {
    if availability.has_two_years {
        Strategy {
            id: StrategyId::SeasonalWeighted,
            display_name: "Seasonal Weighted",
            confidence: 75,
            accuracy_stars: "★★★★☆",
            warning: None,
        }
    } else if availability.has_six_months {
        Strategy {
            id: StrategyId::TrendBased,
            display_name: "Trend-Based",
            confidence: 60,
            accuracy_stars: "★★★☆☆",
            warning: Some("limited historical data, using trend-based prediction"),
        }
    } else if availability.has_three_months {
        Strategy {
            id: StrategyId::MovingAverage,
            display_name: "Moving Average",
            confidence: 45,
            accuracy_stars: "★★☆☆☆",
            warning: Some("minimal historical data, low accuracy"),
        }
    } else {
        Strategy {
            id: StrategyId::InsufficientData,
            display_name: "Insufficient Data",
            confidence: 0,
            accuracy_stars: "Cannot Predict",
            warning: Some(
                "insufficient historical data (<3 periods), cannot generate reliable prediction",
            ),
        }
    }
}
