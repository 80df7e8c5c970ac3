use chrono::NaiveDate;

use crate::holidayerror::{HolidayError, Result};
use super::recurringholiday::RecurringHoliday;

// 2000 is a leap year, so February 29th passes validation
const VALIDATION_YEAR: i32 = 2000;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Result<FixedDateHoliday> {
        if NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day).is_none() {
            return Err(HolidayError::InvalidDate { month, day });
        }
        Ok(FixedDateHoliday { month, day })
    }

    /// For statically known dates; the caller guarantees validity.
    pub(crate) const fn new_unchecked(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn holiday_date(&self, year: i32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or(HolidayError::UnsupportedYear(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(matches!(FixedDateHoliday::new(2, 30), Err(HolidayError::InvalidDate { month: 2, day: 30 })));
        assert!(FixedDateHoliday::new(13, 1).is_err());
        assert!(FixedDateHoliday::new(4, 0).is_err());
    }

    #[test]
    fn same_date_every_year() {
        let unity = FixedDateHoliday::new(10, 3).unwrap();
        assert_eq!(unity.holiday_date(1990).unwrap(), NaiveDate::from_ymd_opt(1990, 10, 3).unwrap());
        assert_eq!(unity.holiday_date(2024).unwrap(), NaiveDate::from_ymd_opt(2024, 10, 3).unwrap());
        assert!(unity.is_holiday(&NaiveDate::from_ymd_opt(2031, 10, 3).unwrap()).unwrap());
        assert!(!unity.is_holiday(&NaiveDate::from_ymd_opt(2031, 10, 4).unwrap()).unwrap());
    }

    #[test]
    fn leap_day_missing_in_common_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert!(leap_day.holiday_date(2024).is_ok());
        assert!(leap_day.holiday_date(2023).is_err());
    }
}
