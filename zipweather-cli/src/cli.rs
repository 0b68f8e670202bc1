use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use tracing::debug;
use zipweather_core::{
    Config, UnitSystem, WarningSink, ZipWeatherError, ZippopotamClient, provider_from_config,
};

use crate::terminal::{ColoredWarnings, postal_input};

/// Top-level CLI struct. Runs interactively with no arguments.
#[derive(Debug, Parser)]
#[command(
    name = "zipweather",
    version,
    about = "Current weather for a US zip code",
    after_help = "Set WEATHER_API_KEY to your OpenWeatherMap API key."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Unit system for temperatures: "imperial" or "metric".
    #[arg(long, default_value = "imperial", value_parser = parse_units)]
    pub units: UnitSystem,
}

fn parse_units(value: &str) -> anyhow::Result<UnitSystem> {
    UnitSystem::try_from(value)
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = Config::from_env();
        debug!(?config, units = %self.units, "starting lookup");

        let geocoder = ZippopotamClient::new(config.geocode_base_url.clone());
        let weather = provider_from_config(&config);
        let mut input = postal_input();
        let mut warnings = ColoredWarnings;

        let outcome = zipweather_core::run(
            self.units,
            input.as_mut(),
            &mut warnings,
            &geocoder,
            weather.as_ref(),
        )
        .await;

        let status = report(outcome, &mut io::stdout().lock(), &mut warnings)?;
        Ok(ExitCode::from(status))
    }
}

/// Print the summary on success or a single warning on failure, and return
/// the process exit status.
pub fn report<W: Write>(
    outcome: Result<String, ZipWeatherError>,
    out: &mut W,
    warnings: &mut dyn WarningSink,
) -> io::Result<u8> {
    match outcome {
        Ok(summary) => {
            writeln!(out, "{summary}")?;
            Ok(0)
        }
        Err(err) => {
            debug!(error = %err, "lookup failed");
            warnings.warn(err.warning());
            Ok(1)
        }
    }
}
