use chrono::{Datelike, NaiveDate};

use crate::holidayerror::Result;
use crate::time::rangeofdates::RangeOfDates;
use super::holidayset::HolidaySet;

/// Query surface of a public holiday table.
///
/// Implementors provide the candidate set and the observed (statutory) set
/// for a year; membership and range queries follow from those two.
pub trait PublicHolidayCalendar: Send + Sync {
    /// Every holiday of the year, whether or not it is a day off anywhere.
    fn all_holidays(&self, year: i32) -> Result<HolidaySet>;

    /// Holidays that are statutory days off for the configured jurisdiction.
    fn observed_holidays(&self, year: i32) -> Result<HolidaySet>;

    fn is_observed_holiday(&self, d: NaiveDate) -> Result<bool> {
        Ok(self.observed_holidays(d.year())?.contains(&d))
    }

    fn is_any_holiday(&self, d: NaiveDate) -> Result<bool> {
        Ok(self.all_holidays(d.year())?.contains(&d))
    }

    fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<HolidaySet> {
        collect_in_range(start, end, |year| self.all_holidays(year))
    }

    fn observed_holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<HolidaySet> {
        collect_in_range(start, end, |year| self.observed_holidays(year))
    }

    fn all_holiday_dates(&self, year: i32) -> Result<Vec<NaiveDate>> {
        Ok(self.all_holidays(year)?.dates())
    }

    fn observed_holiday_dates(&self, year: i32) -> Result<Vec<NaiveDate>> {
        Ok(self.observed_holidays(year)?.dates())
    }

    fn holiday_dates_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
        Ok(self.holidays_in_range(start, end)?.dates())
    }

    fn observed_holiday_dates_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
        Ok(self.observed_holidays_in_range(start, end)?.dates())
    }
}

fn collect_in_range<F>(start: NaiveDate, end: NaiveDate, mut holidays_of_year: F) -> Result<HolidaySet>
    where F: FnMut(i32) -> Result<HolidaySet> {
    let range = RangeOfDates::new(start, end)?;
    let mut holidays = HolidaySet::new();
    for year in range.years() {
        let in_range = holidays_of_year(year)?.filtered(|d, _| range.contain(*d));
        holidays.merge(in_range);
    }
    Ok(holidays)
}
