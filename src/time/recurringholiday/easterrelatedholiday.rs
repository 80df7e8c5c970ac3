use chrono::{Days, NaiveDate};

use crate::holidayerror::{HolidayError, Result};
use crate::time::movablefeast::{easter_for, EasterType};
use super::recurringholiday::RecurringHoliday;

/// A movable feast: Easter Sunday shifted by a whole number of days.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub const fn new(easter_type: EasterType, shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            easter_type,
            shift_days
        }
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn holiday_date(&self, year: i32) -> Result<NaiveDate> {
        let easter_day = easter_for(self.easter_type, year)?;
        let shift = Days::new(self.shift_days.unsigned_abs() as u64);
        let shifted = if self.shift_days >= 0 {
            easter_day.checked_add_days(shift)
        } else {
            easter_day.checked_sub_days(shift)
        };
        shifted.ok_or(HolidayError::UnsupportedYear(year))
    }
}
