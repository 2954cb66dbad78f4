use clap::{Parser, Subcommand};

use cityweather_core::{KeyFile, WeatherLookup, WeatherReport};

use crate::prompt::InquirePrompt;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an API key for future lookups.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let key_file = KeyFile::in_home_dir()?;

    let key = inquire::Text::new("OpenWeatherMap API key:").prompt()?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("No API key entered; nothing saved.");
    }

    key_file.save(key)?;
    println!("API key saved to {}", key_file.path().display());

    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let key_file = KeyFile::in_home_dir()?;
    let lookup = WeatherLookup::new(key_file)?;

    let report = lookup.lookup(city, &InquirePrompt).await?;
    println!("{}", format_report(&report));

    Ok(())
}

fn format_report(report: &WeatherReport) -> String {
    format!(
        "Temperature: {}°C\nHumidity: {}%\nCondition: {}",
        report.temperature_c, report.humidity_pct, report.condition
    )
}
