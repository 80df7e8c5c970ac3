use chrono::{Datelike, NaiveDate};

use crate::holidayerror::Result;

/// A holiday that recurs once every year according to a fixed rule.
pub trait RecurringHoliday: Send + Sync {

    fn holiday_date(&self, year: i32) -> Result<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> Result<bool> {
        Ok(self.holiday_date(d.year())? == *d)
    }
}
