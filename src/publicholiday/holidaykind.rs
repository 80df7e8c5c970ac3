use std::fmt;

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{
    Serialize,
    Deserialize
};

use crate::holidayerror::Result;
use crate::time::movablefeast::EasterType;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekdaybeforeholiday::WeekdayBeforeHoliday;
use super::observance::{
    Observance,
    ALL_SAINTS_STATES,
    ASSUMPTION_STATES,
    CORPUS_CHRISTI_STATES,
    EPIPHANY_STATES,
    REFORMATION_STATES,
    REPENTANCE_STATES
};

pub const GOOD_FRIDAY_SHIFT: i32 = -2;
pub const EASTER_MONDAY_SHIFT: i32 = 1;
pub const ASCENSION_SHIFT: i32 = 39;
pub const PENTECOST_SUNDAY_SHIFT: i32 = 49;
pub const PENTECOST_MONDAY_SHIFT: i32 = 50;
pub const CORPUS_CHRISTI_SHIFT: i32 = 60;

/// How the date of a holiday is determined.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HolidayRule {
    FixedDate(FixedDateHoliday),
    EasterRelated(EasterRelatedHoliday),
    WeekdayBefore(WeekdayBeforeHoliday)
}

impl RecurringHoliday for HolidayRule {
    fn holiday_date(&self, year: i32) -> Result<NaiveDate> {
        match self {
            HolidayRule::FixedDate(holiday) => holiday.holiday_date(year),
            HolidayRule::EasterRelated(holiday) => holiday.holiday_date(year),
            HolidayRule::WeekdayBefore(holiday) => holiday.holiday_date(year)
        }
    }
}

const fn fixed(month: u32, day: u32) -> HolidayRule {
    HolidayRule::FixedDate(FixedDateHoliday::new_unchecked(month, day))
}

const fn easter_shift(shift_days: i32) -> HolidayRule {
    HolidayRule::EasterRelated(EasterRelatedHoliday::new(EasterType::Western, shift_days))
}

/// Every German federal or state holiday, in the order the candidate set is
/// assembled.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HolidayKind {
    NewYear,
    Epiphany,
    GoodFriday,
    EasterSunday,
    EasterMonday,
    LabourDay,
    Ascension,
    PentecostSunday,
    PentecostMonday,
    CorpusChristi,
    Assumption,
    GermanUnity,
    Reformation,
    AllSaints,
    Repentance,
    ChristmasEve,
    Christmas,
    StStephen,
    NewYearsEve
}

impl HolidayKind {
    /// Assembly order. Earlier entries win when two rules share a date.
    pub const VALUES: [HolidayKind; 19] = [
        HolidayKind::NewYear,
        HolidayKind::Epiphany,
        HolidayKind::GoodFriday,
        HolidayKind::EasterSunday,
        HolidayKind::EasterMonday,
        HolidayKind::LabourDay,
        HolidayKind::Ascension,
        HolidayKind::PentecostSunday,
        HolidayKind::PentecostMonday,
        HolidayKind::CorpusChristi,
        HolidayKind::Assumption,
        HolidayKind::GermanUnity,
        HolidayKind::Reformation,
        HolidayKind::AllSaints,
        HolidayKind::Repentance,
        HolidayKind::ChristmasEve,
        HolidayKind::Christmas,
        HolidayKind::StStephen,
        HolidayKind::NewYearsEve
    ];

    /// Canonical statutory name.
    pub fn name(&self) -> &'static str {
        match self {
            HolidayKind::NewYear => "Neujahrstag",
            HolidayKind::Epiphany => "Heilige Drei Könige",
            HolidayKind::GoodFriday => "Karfreitag",
            HolidayKind::EasterSunday => "Ostersonntag",
            HolidayKind::EasterMonday => "Ostermontag",
            HolidayKind::LabourDay => "Tag der Arbeit",
            HolidayKind::Ascension => "Christi Himmelfahrt",
            HolidayKind::PentecostSunday => "Pfingstsonntag",
            HolidayKind::PentecostMonday => "Pfingstmontag",
            HolidayKind::CorpusChristi => "Fronleichnam",
            HolidayKind::Assumption => "Mariä Himmelfahrt",
            HolidayKind::GermanUnity => "Tag der Deutschen Einheit",
            HolidayKind::Reformation => "Reformationstag",
            HolidayKind::AllSaints => "Allerheiligen",
            HolidayKind::Repentance => "Buß- und Bettag",
            HolidayKind::ChristmasEve => "Heiligabend",
            HolidayKind::Christmas => "Weihnachtstag",
            HolidayKind::StStephen => "Zweiter Weihnachtsfeiertag",
            HolidayKind::NewYearsEve => "Silvester"
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            HolidayKind::NewYear => "New Year's Day",
            HolidayKind::Epiphany => "Epiphany",
            HolidayKind::GoodFriday => "Good Friday",
            HolidayKind::EasterSunday => "Easter Sunday",
            HolidayKind::EasterMonday => "Easter Monday",
            HolidayKind::LabourDay => "Labour Day",
            HolidayKind::Ascension => "Ascension Day",
            HolidayKind::PentecostSunday => "Whit Sunday",
            HolidayKind::PentecostMonday => "Whit Monday",
            HolidayKind::CorpusChristi => "Corpus Christi",
            HolidayKind::Assumption => "Assumption Day",
            HolidayKind::GermanUnity => "German Unity Day",
            HolidayKind::Reformation => "Reformation Day",
            HolidayKind::AllSaints => "All Saints' Day",
            HolidayKind::Repentance => "Day of Repentance and Prayer",
            HolidayKind::ChristmasEve => "Christmas Eve",
            HolidayKind::Christmas => "Christmas Day",
            HolidayKind::StStephen => "St. Stephen's Day",
            HolidayKind::NewYearsEve => "New Year's Eve"
        }
    }

    pub fn from_name(name: &str) -> Option<HolidayKind> {
        HolidayKind::VALUES.iter().find(|kind| kind.name() == name).copied()
    }

    pub fn rule(&self) -> HolidayRule {
        match self {
            HolidayKind::NewYear => fixed(1, 1),
            HolidayKind::Epiphany => fixed(1, 6),
            HolidayKind::GoodFriday => easter_shift(GOOD_FRIDAY_SHIFT),
            HolidayKind::EasterSunday => easter_shift(0),
            HolidayKind::EasterMonday => easter_shift(EASTER_MONDAY_SHIFT),
            HolidayKind::LabourDay => fixed(5, 1),
            HolidayKind::Ascension => easter_shift(ASCENSION_SHIFT),
            HolidayKind::PentecostSunday => easter_shift(PENTECOST_SUNDAY_SHIFT),
            HolidayKind::PentecostMonday => easter_shift(PENTECOST_MONDAY_SHIFT),
            HolidayKind::CorpusChristi => easter_shift(CORPUS_CHRISTI_SHIFT),
            HolidayKind::Assumption => fixed(8, 15),
            HolidayKind::GermanUnity => fixed(10, 3),
            HolidayKind::Reformation => fixed(10, 31),
            HolidayKind::AllSaints => fixed(11, 1),
            HolidayKind::Repentance => HolidayRule::WeekdayBefore(
                WeekdayBeforeHoliday::new_unchecked(11, 23, Weekday::Wed)
            ),
            HolidayKind::ChristmasEve => fixed(12, 24),
            HolidayKind::Christmas => fixed(12, 25),
            HolidayKind::StStephen => fixed(12, 26),
            HolidayKind::NewYearsEve => fixed(12, 31)
        }
    }

    pub fn observance(&self) -> Observance {
        match self {
            HolidayKind::Epiphany => Observance::Regional(EPIPHANY_STATES),
            HolidayKind::CorpusChristi => Observance::Regional(CORPUS_CHRISTI_STATES),
            HolidayKind::Assumption => Observance::Regional(ASSUMPTION_STATES),
            HolidayKind::Reformation => Observance::Regional(REFORMATION_STATES),
            HolidayKind::AllSaints => Observance::Regional(ALL_SAINTS_STATES),
            HolidayKind::Repentance => Observance::Regional(REPENTANCE_STATES),
            HolidayKind::EasterSunday
            | HolidayKind::PentecostSunday
            | HolidayKind::ChristmasEve
            | HolidayKind::NewYearsEve => Observance::Never,
            HolidayKind::NewYear
            | HolidayKind::GoodFriday
            | HolidayKind::EasterMonday
            | HolidayKind::LabourDay
            | HolidayKind::Ascension
            | HolidayKind::PentecostMonday
            | HolidayKind::GermanUnity
            | HolidayKind::Christmas
            | HolidayKind::StStephen => Observance::Nationwide
        }
    }

    /// Afternoon closing time by convention. Display only.
    pub fn conventional_time(&self) -> Option<NaiveTime> {
        match self {
            HolidayKind::ChristmasEve | HolidayKind::NewYearsEve => NaiveTime::from_hms_opt(14, 0, 0),
            _ => None
        }
    }

    pub fn date(&self, year: i32) -> Result<NaiveDate> {
        self.rule().holiday_date(year)
    }
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn names_are_unique_and_resolvable() {
        let names: HashSet<&str> = HolidayKind::VALUES.iter().map(|kind| kind.name()).collect();
        assert_eq!(names.len(), HolidayKind::VALUES.len());
        for kind in HolidayKind::VALUES {
            assert_eq!(HolidayKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(HolidayKind::from_name("Ostern"), None);
    }

    #[test]
    fn movable_feasts_2024() {
        // Easter 2024: March 31st
        assert_eq!(HolidayKind::GoodFriday.date(2024).unwrap(), date(2024, 3, 29));
        assert_eq!(HolidayKind::EasterSunday.date(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(HolidayKind::EasterMonday.date(2024).unwrap(), date(2024, 4, 1));
        assert_eq!(HolidayKind::Ascension.date(2024).unwrap(), date(2024, 5, 9));
        assert_eq!(HolidayKind::PentecostSunday.date(2024).unwrap(), date(2024, 5, 19));
        assert_eq!(HolidayKind::PentecostMonday.date(2024).unwrap(), date(2024, 5, 20));
        assert_eq!(HolidayKind::CorpusChristi.date(2024).unwrap(), date(2024, 5, 30));
        assert_eq!(HolidayKind::Repentance.date(2024).unwrap(), date(2024, 11, 20));
    }

    #[test]
    fn movable_feasts_fall_on_expected_weekdays() {
        use chrono::Datelike;
        for year in 1990..2060 {
            assert_eq!(HolidayKind::GoodFriday.date(year).unwrap().weekday(), Weekday::Fri);
            assert_eq!(HolidayKind::EasterMonday.date(year).unwrap().weekday(), Weekday::Mon);
            assert_eq!(HolidayKind::Ascension.date(year).unwrap().weekday(), Weekday::Thu);
            assert_eq!(HolidayKind::PentecostSunday.date(year).unwrap().weekday(), Weekday::Sun);
            assert_eq!(HolidayKind::PentecostMonday.date(year).unwrap().weekday(), Weekday::Mon);
            assert_eq!(HolidayKind::CorpusChristi.date(year).unwrap().weekday(), Weekday::Thu);
            assert_eq!(HolidayKind::Repentance.date(year).unwrap().weekday(), Weekday::Wed);
        }
    }

    #[test]
    fn only_the_eves_carry_a_time() {
        let two_pm = NaiveTime::from_hms_opt(14, 0, 0);
        for kind in HolidayKind::VALUES {
            match kind {
                HolidayKind::ChristmasEve | HolidayKind::NewYearsEve => assert_eq!(kind.conventional_time(), two_pm),
                _ => assert_eq!(kind.conventional_time(), None)
            }
        }
    }

    #[test]
    fn decorative_holidays_are_never_observed() {
        for kind in [
            HolidayKind::EasterSunday,
            HolidayKind::PentecostSunday,
            HolidayKind::ChristmasEve,
            HolidayKind::NewYearsEve
        ] {
            assert_eq!(kind.observance(), Observance::Never);
        }
    }
}
