use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::holidayerror::Result;
use super::holidaykind::HolidayKind;
use super::holidayset::HolidaySet;
use super::observance::historical_exception;
use super::publicholidaycalendar::PublicHolidayCalendar;
use super::state::State;

/// German federal holidays plus the holidays of one federal state.
///
/// `State::ALL` observes the federal holidays only.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct GermanPublicHoliday {
    state: State
}

impl GermanPublicHoliday {
    pub fn new(state: State) -> GermanPublicHoliday {
        GermanPublicHoliday { state }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Whether `kind` is a statutory day off in the configured state in `year`.
    pub fn observes(&self, kind: HolidayKind, year: i32) -> bool {
        match historical_exception(kind, year) {
            Some(effect) => effect.is_observed(),
            None => kind.observance().applies_to(self.state)
        }
    }

    pub fn new_year(year: i32) -> Result<NaiveDate> {
        HolidayKind::NewYear.date(year)
    }

    pub fn epiphany(year: i32) -> Result<NaiveDate> {
        HolidayKind::Epiphany.date(year)
    }

    pub fn good_friday(year: i32) -> Result<NaiveDate> {
        HolidayKind::GoodFriday.date(year)
    }

    pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
        HolidayKind::EasterSunday.date(year)
    }

    pub fn easter_monday(year: i32) -> Result<NaiveDate> {
        HolidayKind::EasterMonday.date(year)
    }

    pub fn labour_day(year: i32) -> Result<NaiveDate> {
        HolidayKind::LabourDay.date(year)
    }

    pub fn ascension(year: i32) -> Result<NaiveDate> {
        HolidayKind::Ascension.date(year)
    }

    pub fn pentecost_sunday(year: i32) -> Result<NaiveDate> {
        HolidayKind::PentecostSunday.date(year)
    }

    pub fn pentecost_monday(year: i32) -> Result<NaiveDate> {
        HolidayKind::PentecostMonday.date(year)
    }

    pub fn corpus_christi(year: i32) -> Result<NaiveDate> {
        HolidayKind::CorpusChristi.date(year)
    }

    pub fn assumption(year: i32) -> Result<NaiveDate> {
        HolidayKind::Assumption.date(year)
    }

    pub fn german_unity(year: i32) -> Result<NaiveDate> {
        HolidayKind::GermanUnity.date(year)
    }

    pub fn reformation(year: i32) -> Result<NaiveDate> {
        HolidayKind::Reformation.date(year)
    }

    pub fn all_saints(year: i32) -> Result<NaiveDate> {
        HolidayKind::AllSaints.date(year)
    }

    /// Buß- und Bettag: the Wednesday before November 23rd.
    pub fn repentance(year: i32) -> Result<NaiveDate> {
        HolidayKind::Repentance.date(year)
    }

    pub fn christmas_eve(year: i32) -> Result<NaiveDate> {
        HolidayKind::ChristmasEve.date(year)
    }

    pub fn christmas(year: i32) -> Result<NaiveDate> {
        HolidayKind::Christmas.date(year)
    }

    pub fn st_stephen(year: i32) -> Result<NaiveDate> {
        HolidayKind::StStephen.date(year)
    }

    pub fn new_years_eve(year: i32) -> Result<NaiveDate> {
        HolidayKind::NewYearsEve.date(year)
    }
}

impl PublicHolidayCalendar for GermanPublicHoliday {
    fn all_holidays(&self, year: i32) -> Result<HolidaySet> {
        let mut holidays = HolidaySet::new();
        for kind in HolidayKind::VALUES {
            holidays.insert(kind.date(year)?, kind);
        }
        trace!(year, count = holidays.len(), "assembled candidate holidays");
        Ok(holidays)
    }

    fn observed_holidays(&self, year: i32) -> Result<HolidaySet> {
        let candidates = self.all_holidays(year)?;

        let excluded: BTreeSet<NaiveDate> = candidates
            .iter()
            .filter(|(_, kind)| !self.observes(**kind, year))
            .map(|(d, _)| *d)
            .collect();

        let observed = candidates.filtered(|d, _| !excluded.contains(d));
        debug!(
            year,
            state = %self.state,
            observed = observed.len(),
            excluded = excluded.len(),
            "filtered holidays by state"
        );
        Ok(observed)
    }
}
