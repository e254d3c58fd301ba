use crate::domain::{DataAvailability, HistoricalPoint, Month};

/// Thresholds are expressed in the series' native granularity (months).
const TWO_YEARS: usize = 24;
const SIX_MONTHS: usize = 6;
const THREE_MONTHS: usize = 3;

/// Inspects the historical series against the target period. Pure, O(n).
pub fn assess(points: &[HistoricalPoint], target: Month) -> DataAvailability {
    let total_points = points.len();
    let last_year = target.minus_months(12);
    let two_years_ago = target.minus_months(24);

    DataAvailability {
        total_points,
        has_two_years: total_points >= TWO_YEARS,
        has_six_months: total_points >= SIX_MONTHS,
        has_three_months: total_points >= THREE_MONTHS,
        has_last_year_same_period: points.iter().any(|p| p.period == last_year),
        has_two_years_ago_same_period: points.iter().any(|p| p.period == two_years_ago),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn series(len: usize) -> Vec<HistoricalPoint> {
        let start = Month::new(2022, 1).unwrap();
        (0..len)
            .map(|i| HistoricalPoint {
                period: start.plus_months(i as i32),
                value: 10.0,
            })
            .collect()
    }

    #[rstest]
    #[case(0, false, false, false)]
    #[case(2, false, false, false)]
    #[case(3, false, false, true)]
    #[case(5, false, false, true)]
    #[case(6, false, true, true)]
    #[case(23, false, true, true)]
    #[case(24, true, true, true)]
    fn count_thresholds_are_exact(
        #[case] len: usize,
        #[case] two_years: bool,
        #[case] six_months: bool,
        #[case] three_months: bool,
    ) {
        let target = Month::new(2024, 6).unwrap();
        let availability = assess(&series(len), target);
        assert_eq!(availability.total_points, len);
        assert_eq!(availability.has_two_years, two_years);
        assert_eq!(availability.has_six_months, six_months);
        assert_eq!(availability.has_three_months, three_months);
    }

    #[test]
    fn test_same_period_flags() {
        // 2022-01 .. 2023-12
        let points = series(24);
        let availability = assess(&points, Month::new(2024, 6).unwrap());
        assert!(availability.has_last_year_same_period); // 2023-06 present
        assert!(availability.has_two_years_ago_same_period); // 2022-06 present

        let availability = assess(&points, Month::new(2025, 6).unwrap());
        assert!(!availability.has_last_year_same_period); // 2024-06 absent
        assert!(availability.has_two_years_ago_same_period); // 2023-06 present
    }

    #[test]
    fn test_same_period_requires_same_calendar_month() {
        let points = vec![HistoricalPoint {
            period: Month::new(2023, 5).unwrap(),
            value: 1.0,
        }];
        let availability = assess(&points, Month::new(2024, 6).unwrap());
        assert!(!availability.has_last_year_same_period);
    }
}
