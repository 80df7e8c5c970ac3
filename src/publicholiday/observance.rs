use super::holidaykind::HolidayKind;
use super::state::State;

/// Where a holiday counts as a statutory day off.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Observance {
    Nationwide,
    Regional(&'static [State]),
    /// Listed among the holidays but never a statutory day off.
    Never
}

impl Observance {
    pub fn applies_to(&self, state: State) -> bool {
        match self {
            Observance::Nationwide => true,
            Observance::Regional(states) => states.contains(&state),
            Observance::Never => false
        }
    }
}

pub const EPIPHANY_STATES: &[State] = &[State::BW, State::BY, State::ST];

pub const CORPUS_CHRISTI_STATES: &[State] = &[
    State::BW, State::BY, State::HE, State::NW, State::RP, State::SL
];

pub const ASSUMPTION_STATES: &[State] = &[State::SL];

pub const REFORMATION_STATES: &[State] = &[
    State::BB, State::MV, State::SN, State::ST, State::TH
];

pub const ALL_SAINTS_STATES: &[State] = &[
    State::BW, State::BY, State::NW, State::RP, State::SL
];

pub const REPENTANCE_STATES: &[State] = &[State::SN];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExceptionEffect {
    ObservedEverywhere,
    ObservedNowhere
}

impl ExceptionEffect {
    pub fn is_observed(&self) -> bool {
        matches!(self, ExceptionEffect::ObservedEverywhere)
    }
}

/// One-off deviation from the observance table for a single year.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct HistoricalException {
    pub kind: HolidayKind,
    pub year: i32,
    pub effect: ExceptionEffect
}

pub const HISTORICAL_EXCEPTIONS: &[HistoricalException] = &[
    // 500th anniversary of the Reformation
    HistoricalException {
        kind: HolidayKind::Reformation,
        year: 2017,
        effect: ExceptionEffect::ObservedEverywhere
    }
];

pub fn historical_exception(kind: HolidayKind, year: i32) -> Option<ExceptionEffect> {
    HISTORICAL_EXCEPTIONS
        .iter()
        .find(|exception| exception.kind == kind && exception.year == year)
        .map(|exception| exception.effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_membership() {
        let observance = Observance::Regional(CORPUS_CHRISTI_STATES);
        assert!(observance.applies_to(State::HE));
        assert!(!observance.applies_to(State::SN));
        assert!(!observance.applies_to(State::ALL));
    }

    #[test]
    fn nationwide_and_never() {
        for state in State::VALUES {
            assert!(Observance::Nationwide.applies_to(state));
            assert!(!Observance::Never.applies_to(state));
        }
    }

    #[test]
    fn reformation_2017_only() {
        assert_eq!(
            historical_exception(HolidayKind::Reformation, 2017),
            Some(ExceptionEffect::ObservedEverywhere)
        );
        assert_eq!(historical_exception(HolidayKind::Reformation, 2018), None);
        assert_eq!(historical_exception(HolidayKind::AllSaints, 2017), None);
    }

    #[test]
    fn no_state_table_names_all() {
        for states in [
            EPIPHANY_STATES,
            CORPUS_CHRISTI_STATES,
            ASSUMPTION_STATES,
            REFORMATION_STATES,
            ALL_SAINTS_STATES,
            REPENTANCE_STATES
        ] {
            assert!(!states.contains(&State::ALL));
        }
    }
}
