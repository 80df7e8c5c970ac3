use std::ops::RangeInclusive;

use chrono::{
    Datelike,
    NaiveDate
};

use crate::holidayerror::{HolidayError, Result};

/// Inclusive range of calendar dates.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<RangeOfDates> {
        if start_date > end_date {
            Err(HolidayError::InvalidRange { start: start_date, end: end_date })
        } else {
            Ok(RangeOfDates { start_date, end_date })
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Every calendar year the range touches.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_date.year()..=self.end_date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reversed_range_is_rejected() {
        let result = RangeOfDates::new(date(2024, 1, 2), date(2024, 1, 1));
        assert!(matches!(result, Err(HolidayError::InvalidRange { .. })));
    }

    #[test]
    fn single_day_range() {
        let range = RangeOfDates::new(date(2024, 2, 29), date(2024, 2, 29)).unwrap();
        assert_eq!(range.len(), 1);
        assert!(range.contain(date(2024, 2, 29)));
        assert!(!range.contain(date(2024, 3, 1)));
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2024]);
    }

    #[test]
    fn years_spanning_boundary() {
        let range = RangeOfDates::new(date(2023, 12, 28), date(2025, 1, 3)).unwrap();
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2023, 2024, 2025]);
        assert!(range.contain(date(2023, 12, 28)));
        assert!(range.contain(date(2025, 1, 3)));
    }
}
