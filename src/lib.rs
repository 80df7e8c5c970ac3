pub mod configuration;
pub mod holidayerror;

pub mod publicholiday {
    pub mod state;
    pub mod observance;
    pub mod holidaykind;
    pub mod holidayset;
    pub mod publicholidaycalendar;
    pub mod germanpublicholiday;
}

pub mod time {
    pub mod movablefeast;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod weekdaybeforeholiday;
    }
}
