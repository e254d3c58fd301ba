use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ForecastError;

/// A calendar month (`YYYY-MM`), the native granularity of meter readings.
///
/// Month stepping is done with explicit integer carry/borrow across year
/// boundaries rather than date-library increments, so forecast periods never
/// drift at a year rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, ForecastError> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidPeriod(format!(
                "month out of range: {year}-{month}"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    /// Months since 0000-01, the carry/borrow basis for all stepping.
    fn ordinal(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_ordinal(ordinal: i64) -> Self {
        Self {
            year: ordinal.div_euclid(12) as i32,
            month: (ordinal.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn plus_months(self, n: i32) -> Self {
        Self::from_ordinal(self.ordinal() + n as i64)
    }

    pub fn minus_months(self, n: i32) -> Self {
        self.plus_months(-n)
    }

    pub fn next(self) -> Self {
        self.plus_months(1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = ForecastError;

    /// Accepts `YYYY-MM` and `YYYY-MM-DD` (the day is ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(|| ForecastError::InvalidPeriod(s.to_string()))?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| ForecastError::InvalidPeriod(s.to_string()))?;
        Self::new(year, month)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_months_carries_across_year() {
        let dec = Month::new(2024, 12).unwrap();
        assert_eq!(dec.plus_months(1), Month::new(2025, 1).unwrap());
        assert_eq!(dec.plus_months(3), Month::new(2025, 3).unwrap());
        assert_eq!(dec.plus_months(13), Month::new(2026, 1).unwrap());
    }

    #[test]
    fn test_minus_months_borrows_across_year() {
        let jan = Month::new(2025, 1).unwrap();
        assert_eq!(jan.minus_months(1), Month::new(2024, 12).unwrap());
        assert_eq!(jan.minus_months(12), Month::new(2024, 1).unwrap());
        assert_eq!(jan.minus_months(24), Month::new(2023, 1).unwrap());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = Month::new(2024, 12).unwrap();
        let b = Month::new(2025, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_parse_both_forms() {
        assert_eq!("2024-06".parse::<Month>().unwrap(), Month::new(2024, 6).unwrap());
        assert_eq!(
            "2024-06-15".parse::<Month>().unwrap(),
            Month::new(2024, 6).unwrap()
        );
        assert!("2024-13".parse::<Month>().is_err());
        assert!("junk".parse::<Month>().is_err());
    }

    #[test]
    fn test_display_and_serde() {
        let m = Month::new(2024, 6).unwrap();
        assert_eq!(m.to_string(), "2024-06");
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"2024-06\"");
        let back: Month = serde_json::from_str("\"2024-06\"").unwrap();
        assert_eq!(back, m);
    }
}
