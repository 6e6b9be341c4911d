mod app;
mod cli;
mod config;
mod core;
mod utils;

use std::io;

use app::{Session, console::Console};
use cli::Cli;
use utils::logging;

/// Timezone Converter
///
/// Reads one command per line from stdin and writes the menus and results to
/// stdout. Exits with success on `Q` or when stdin closes.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse_config();

    // Initialize logging based on environment
    logging::init_logging()?;

    let mut session = Session::new(&config);
    tracing::info!(
        "Starting timezone converter ({}, {} favorites)",
        session.settings().mode(),
        session.favorites().list().len()
    );

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    if let Err(e) = session.run(&mut console) {
        tracing::error!("Session failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
