use clap::Parser;

use crate::config::Config;
use crate::core::models::DisplayMode;

/// Timezone Converter
///
/// An interactive terminal tool that converts a date and time from one IANA
/// timezone to another and keeps a favorites list for the session.
///
/// ## Usage
/// ```bash
/// tz-converter --military --favorite Europe/Berlin --favorite Asia/Tokyo
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "tz-converter")]
#[command(about = "Convert times between IANA timezones from an interactive menu")]
#[command(version)]
pub struct Cli {
    /// Start with 24-hour (military) output instead of 12-hour
    #[arg(short, long)]
    pub military: bool,

    /// Timezone to add to favorites at startup (repeatable)
    #[arg(long = "favorite", value_name = "ZONE")]
    pub favorites: Vec<String>,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> Config {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> Config {
        let display_mode = if self.military {
            DisplayMode::TwentyFourHour
        } else {
            DisplayMode::TwelveHour
        };

        Config {
            display_mode,
            favorites: self.favorites,
        }
    }
}
