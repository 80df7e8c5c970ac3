use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Serialize,
    Deserialize
};
use tracing::debug;

use crate::holidayerror::Result;
use crate::publicholiday::germanpublicholiday::GermanPublicHoliday;
use crate::publicholiday::state::State;

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(default)]
    state: State
}

impl Configuration {
    pub fn new(state: State) -> Configuration {
        Configuration { state }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration> {
        Ok(serde_json::from_value(json_value)?)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        debug!(path = %file_path.as_ref().display(), state = %configuration.state, "loaded configuration");
        Ok(configuration)
    }

    pub fn calendar(&self) -> GermanPublicHoliday {
        GermanPublicHoliday::new(self.state)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::holidayerror::HolidayError;

    #[test]
    fn state_defaults_to_all() {
        let configuration = Configuration::from_json_value(json!({})).unwrap();
        assert_eq!(configuration.state(), State::ALL);
        assert_eq!(configuration.calendar().state(), State::ALL);
    }

    #[test]
    fn reads_state_code() {
        let configuration = Configuration::from_json_value(json!({ "state": "by" })).unwrap();
        assert_eq!(configuration, Configuration::new(State::BY));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Configuration::from_json_value(json!({ "state": "Bavaria" })),
            Err(HolidayError::JsonParse(_))
        ));
        assert!(Configuration::from_json_value(json!({ "land": "BY" })).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Configuration::from_reader("/nonexistent/publicholiday/config.json");
        assert!(matches!(result, Err(HolidayError::Io(_))));
    }
}
