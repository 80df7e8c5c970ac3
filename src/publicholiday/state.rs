use std::fmt;
use std::str::FromStr;

use serde::{
    Serialize,
    Deserialize
};

use crate::holidayerror::HolidayError;

/// German federal states (ISO 3166-2:DE), plus `ALL` for the nationwide
/// holidays only.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
#[serde(try_from = "String", into = "String")]
pub enum State {
    #[default]
    ALL,
    /// Baden-Württemberg
    BW,
    /// Bayern
    BY,
    /// Berlin
    BE,
    /// Brandenburg
    BB,
    /// Bremen
    HB,
    /// Hamburg
    HH,
    /// Hessen
    HE,
    /// Mecklenburg-Vorpommern
    MV,
    /// Niedersachsen
    NI,
    /// Nordrhein-Westfalen
    NW,
    /// Rheinland-Pfalz
    RP,
    /// Saarland
    SL,
    /// Sachsen
    SN,
    /// Sachsen-Anhalt
    ST,
    /// Schleswig-Holstein
    SH,
    /// Thüringen
    TH
}

impl State {
    pub const VALUES: [State; 17] = [
        State::ALL,
        State::BW, State::BY, State::BE, State::BB,
        State::HB, State::HH, State::HE, State::MV,
        State::NI, State::NW, State::RP, State::SL,
        State::SN, State::ST, State::SH, State::TH
    ];

    pub fn code(&self) -> &'static str {
        match self {
            State::ALL => "ALL",
            State::BW => "BW",
            State::BY => "BY",
            State::BE => "BE",
            State::BB => "BB",
            State::HB => "HB",
            State::HH => "HH",
            State::HE => "HE",
            State::MV => "MV",
            State::NI => "NI",
            State::NW => "NW",
            State::RP => "RP",
            State::SL => "SL",
            State::SN => "SN",
            State::ST => "ST",
            State::SH => "SH",
            State::TH => "TH"
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            State::ALL => "Deutschland",
            State::BW => "Baden-Württemberg",
            State::BY => "Bayern",
            State::BE => "Berlin",
            State::BB => "Brandenburg",
            State::HB => "Bremen",
            State::HH => "Hamburg",
            State::HE => "Hessen",
            State::MV => "Mecklenburg-Vorpommern",
            State::NI => "Niedersachsen",
            State::NW => "Nordrhein-Westfalen",
            State::RP => "Rheinland-Pfalz",
            State::SL => "Saarland",
            State::SN => "Sachsen",
            State::ST => "Sachsen-Anhalt",
            State::SH => "Schleswig-Holstein",
            State::TH => "Thüringen"
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for State {
    type Err = HolidayError;

    /// Accepts the ISO code with or without the `DE-` prefix, any case.
    fn from_str(s: &str) -> Result<State, HolidayError> {
        let trimmed = s.trim();
        let code = trimmed
            .strip_prefix("DE-")
            .or_else(|| trimmed.strip_prefix("de-"))
            .unwrap_or(trimmed);
        State::VALUES
            .iter()
            .find(|state| state.code().eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| HolidayError::UnknownState(s.to_owned()))
    }
}

impl TryFrom<String> for State {
    type Error = HolidayError;

    fn try_from(s: String) -> Result<State, HolidayError> {
        s.parse()
    }
}

impl From<State> for String {
    fn from(state: State) -> String {
        state.code().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("BY".parse::<State>().unwrap(), State::BY);
        assert_eq!("sn".parse::<State>().unwrap(), State::SN);
        assert_eq!("DE-NW".parse::<State>().unwrap(), State::NW);
        assert_eq!(" all ".parse::<State>().unwrap(), State::ALL);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(matches!("XX".parse::<State>(), Err(HolidayError::UnknownState(code)) if code == "XX"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for state in State::VALUES {
            assert_eq!(state.to_string().parse::<State>().unwrap(), state);
        }
    }

    #[test]
    fn serde_uses_iso_code() {
        assert_eq!(serde_json::to_string(&State::RP).unwrap(), "\"RP\"");
        assert_eq!(serde_json::from_str::<State>("\"th\"").unwrap(), State::TH);
        assert!(serde_json::from_str::<State>("\"Bavaria\"").is_err());
    }

    #[test]
    fn default_is_nationwide() {
        assert_eq!(State::default(), State::ALL);
    }
}
