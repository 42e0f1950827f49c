use anyhow::Context;
use chrono::{Local, Timelike};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Select, Text};
use std::process::ExitCode;
use weather_widget_core::{Config, TemperatureUnit, Widget, WidgetView, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for a city")]
pub struct Cli {
    /// Temperature unit; overrides the configured one.
    #[arg(long, global = true, value_parser = parse_unit)]
    pub unit: Option<TemperatureUnit>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com API key and preferred unit.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, e.g. "London" or "New York".
        #[arg(required = true)]
        city: Vec<String>,
    },

    /// Prompt for cities until cancelled (default).
    Interactive,
}

fn parse_unit(value: &str) -> Result<TemperatureUnit, String> {
    TemperatureUnit::try_from(value).map_err(|err| err.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let mut config = Config::load()?;
        if let Some(unit) = self.unit {
            config.unit = unit;
        }

        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(config).map(|()| ExitCode::SUCCESS),
            Command::Show { city } => show(&config, &city.join(" ")).await,
            Command::Interactive => interactive(&config).await.map(|()| ExitCode::SUCCESS),
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("weatherapi.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let units = TemperatureUnit::all().to_vec();
    let start = units.iter().position(|u| *u == config.unit).unwrap_or(0);
    config.unit = Select::new("Temperature unit:", units)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read temperature unit")?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Exits with status 1 when the search ends in the error state.
async fn show(config: &Config, city: &str) -> anyhow::Result<ExitCode> {
    let mut widget = Widget::new(provider_from_config(config)?);
    widget.search(city).await;

    let view = widget.view(Local::now().hour());
    print!("{}", render::card(&view));

    Ok(exit_code(&view))
}

fn exit_code(view: &WidgetView) -> ExitCode {
    match view {
        WidgetView::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

async fn interactive(config: &Config) -> anyhow::Result<()> {
    let mut widget = Widget::new(provider_from_config(config)?);
    print!("{}", render::header());

    loop {
        let input = match Text::new(widget.submit_label())
            .with_placeholder("Enter the city name")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        if let Some(query) = widget.begin_search(&input) {
            println!("{}", widget.submit_label());
            let result = widget.fetch(&query).await;
            widget.finish_search(&query, result);
        }
        print!("{}", render::body(&widget.view(Local::now().hour())));
    }

    Ok(())
}
