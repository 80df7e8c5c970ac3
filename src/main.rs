use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use publicholiday::configuration::Configuration;
use publicholiday::holidayerror::Result;
use publicholiday::publicholiday::publicholidaycalendar::PublicHolidayCalendar;

fn run(config_path: &str, year: i32) -> Result<()> {
    let config = Configuration::from_reader(config_path)?;
    let calendar = config.calendar();
    for (date, kind) in &calendar.observed_holidays(year)? {
        println!("{}, {}", date, kind.name());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <config.json> <year>", args[0]);
        return ExitCode::FAILURE;
    }

    let year = match args[2].parse::<i32>() {
        Ok(year) => year,
        Err(err) => {
            error!(input = %args[2], %err, "invalid year");
            return ExitCode::FAILURE;
        }
    };

    match run(&args[1], year) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "failed to list holidays");
            ExitCode::FAILURE
        }
    }
}
