use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolidayError {
    /// The computus is only defined for the Gregorian calendar era we support.
    #[error("year {0} is outside the supported range 1583..=4099")]
    UnsupportedYear(i32),

    #[error("invalid range: end date {end} precedes start date {start}")]
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate
    },

    #[error("invalid fixed date: month {month}, day {day}")]
    InvalidDate {
        month: u32,
        day: u32
    },

    #[error("unknown state '{0}'")]
    UnknownState(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error)
}

pub type Result<T, E = HolidayError> = std::result::Result<T, E>;
