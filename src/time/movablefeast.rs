use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use crate::holidayerror::{HolidayError, Result};

/// Years for which the Gregorian computus is defined.
pub const FIRST_SUPPORTED_YEAR: i32 = 1583;
pub const LAST_SUPPORTED_YEAR: i32 = 4099;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchDirection {
    /// On or before the starting date.
    Backward,
    /// On or after the starting date.
    Forward
}

#[inline]
pub fn is_supported_year(year: i32) -> bool {
    (FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&year)
}

/// Western Easter Sunday of `year`.
pub fn easter(year: i32) -> Result<NaiveDate> {
    easter_for(EasterType::Western, year)
}

/// Easter Sunday of `year` as a Gregorian date, for either tradition.
///
/// The Orthodox date is computed with the Julian computus and then shifted
/// by the Julian/Gregorian drift of the century.
pub fn easter_for(easter_type: EasterType, year: i32) -> Result<NaiveDate> {
    if !is_supported_year(year) {
        return Err(HolidayError::UnsupportedYear(year));
    }

    let g = year % 19;

    // days after March 21st, may be negative for the earliest dates
    let p = match easter_type {
        EasterType::Orthodox => {
            let i = (19 * g + 15) % 30;
            let j = (year + year / 4 + i) % 7;
            let e = if year <= 1600 {
                10
            } else {
                10 + year / 100 - 16 - (year / 100 - 16) / 4
            };
            i - j + e
        },
        EasterType::Western => {
            let c = year / 100;
            let c_div_4 = c / 4;
            let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let h_div_28 = h / 28;
            let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
            i - j
        }
    };

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(HolidayError::UnsupportedYear(year))
}

/// Nearest date on or before (`Backward`) or on or after (`Forward`) `d`
/// that falls on `weekday`.
pub fn find_nearest_weekday(d: NaiveDate, weekday: Weekday, direction: SearchDirection) -> Result<NaiveDate> {
    let from = d.weekday().num_days_from_monday() as i32;
    let to = weekday.num_days_from_monday() as i32;

    let shifted = match direction {
        SearchDirection::Backward => {
            d.checked_sub_days(Days::new((from - to).rem_euclid(7) as u64))
        },
        SearchDirection::Forward => {
            d.checked_add_days(Days::new((to - from).rem_euclid(7) as u64))
        }
    };

    shifted.ok_or(HolidayError::UnsupportedYear(d.year()))
}
