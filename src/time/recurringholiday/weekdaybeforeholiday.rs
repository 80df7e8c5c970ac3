use chrono::{Days, NaiveDate, Weekday};

use crate::holidayerror::{HolidayError, Result};
use crate::time::movablefeast::{find_nearest_weekday, SearchDirection};
use super::recurringholiday::RecurringHoliday;

const ONE_DAY: Days = Days::new(1);

/// The last given weekday strictly before a fixed anchor date,
/// e.g. the Wednesday before November 23rd.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WeekdayBeforeHoliday {
    month: u32,
    day: u32,
    weekday: Weekday
}

impl WeekdayBeforeHoliday {
    pub fn new(month: u32, day: u32, weekday: Weekday) -> Result<WeekdayBeforeHoliday> {
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(HolidayError::InvalidDate { month, day });
        }
        Ok(WeekdayBeforeHoliday { month, day, weekday })
    }

    pub(crate) const fn new_unchecked(month: u32, day: u32, weekday: Weekday) -> WeekdayBeforeHoliday {
        WeekdayBeforeHoliday { month, day, weekday }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for WeekdayBeforeHoliday {
    fn holiday_date(&self, year: i32) -> Result<NaiveDate> {
        let day_before_anchor = NaiveDate::from_ymd_opt(year, self.month, self.day)
            .and_then(|anchor| anchor.checked_sub_days(ONE_DAY))
            .ok_or(HolidayError::UnsupportedYear(year))?;
        find_nearest_weekday(day_before_anchor, self.weekday, SearchDirection::Backward)
    }
}
