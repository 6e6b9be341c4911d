//! Interactive session: the menu loop and everything it drives

pub mod console;
pub mod conversion;
pub mod dispatcher;
pub mod screens;

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::core::{
    error::{ConverterError, ConverterResult},
    favorites::FavoritesStore,
    models::{Continent, TimezoneId},
    provider::{TimeZoneResolver, TzDatabase},
    settings::DisplaySettings,
};

use console::Console;
use conversion::ConversionFlow;
use dispatcher::{Action, MenuContext, Transition, transition};

/// Whether the loop keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns all session state; nothing here is global
pub struct Session<Z: TimeZoneResolver = TzDatabase> {
    resolver: Z,
    favorites: FavoritesStore,
    settings: DisplaySettings,
    context: MenuContext,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self::with_resolver(config, TzDatabase::new())
    }
}

impl<Z: TimeZoneResolver> Session<Z> {
    pub fn with_resolver(config: &Config, resolver: Z) -> Self {
        let mut favorites = FavoritesStore::new();
        for zone in &config.favorites {
            favorites.add(zone);
        }

        Self {
            resolver,
            favorites,
            settings: DisplaySettings::new(config.display_mode),
            context: MenuContext::Main,
        }
    }

    pub fn context(&self) -> MenuContext {
        self.context
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Show the banner and process commands until `Q` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> ConverterResult<()> {
        console.say(screens::banner(self.resolver.local_timezone()))?;

        loop {
            let line = match console.read_line() {
                Ok(line) => line,
                Err(ConverterError::InputClosed) => {
                    tracing::info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            match self.step(console, &line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    tracing::info!("Session ended by user");
                    return Ok(());
                }
                Err(ConverterError::InputClosed) => {
                    tracing::info!("Input closed mid-command, ending session");
                    return Ok(());
                }
                Err(e) if e.is_user_facing() => console.say(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Consume one command line
    ///
    /// Unrecognised commands leave the context unchanged and come back as
    /// `ConverterError::UnrecognizedCommand`.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        line: &str,
    ) -> ConverterResult<Flow> {
        let Transition { action, next } = transition(self.context, line)?;
        tracing::debug!("{:?} --{:?}--> {:?}", self.context(), action, next);

        self.context = next;
        self.execute(action, console)
    }

    fn execute<R: BufRead, W: Write>(
        &mut self,
        action: Action,
        console: &mut Console<R, W>,
    ) -> ConverterResult<Flow> {
        match action {
            Action::ShowBanner => console.say(screens::banner(self.resolver.local_timezone()))?,
            Action::ShowCommands => console.say(screens::commands())?,
            Action::ShowInstructions => console.say(screens::instructions())?,
            Action::ListTimezones => self.list_timezones(console)?,
            Action::AddFavorite => {
                let zone = console.prompt(screens::PROMPT_ADD_FAVORITE)?;
                self.favorites.add(&zone);
                console.say(format!("Added {} to favorites.", zone))?;
            }
            Action::RemoveFavorite => {
                let zone = console.prompt(screens::PROMPT_REMOVE_FAVORITE)?;
                self.favorites.remove(&zone);
                console.say(format!("Removed {} from favorites.", zone))?;
            }
            Action::ViewFavorites => self.view_favorites(console)?,
            Action::ShowSettings => console.say(screens::SETTINGS)?,
            Action::ShowTimeOutputSettings => console.say(screens::TIME_OUTPUT_SETTINGS)?,
            Action::SetMode(mode) => {
                self.settings.set_mode(mode);
                console.say(format!("{} enabled.", mode))?;
                console.say(screens::SETTINGS)?;
            }
            Action::RunConversion => {
                ConversionFlow::new(&self.resolver, &self.settings).run(console)?;
            }
            Action::RunSelfTest => {
                console.say("Running tests...")?;
                console.say(ConversionFlow::new(&self.resolver, &self.settings).self_test())?;
            }
            Action::Quit => {
                console.say(screens::FAREWELL)?;
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    fn list_timezones<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> ConverterResult<()> {
        let code = console.prompt(&screens::continent_menu())?;
        let continent =
            Continent::from_code(&code).ok_or(ConverterError::UnrecognizedCommand { input: code })?;

        let zones: Vec<TimezoneId> = match continent {
            Continent::All => self.resolver.list_all(),
            _ => continent
                .region_prefixes()
                .iter()
                .flat_map(|prefix| self.resolver.list_by_region_prefix(prefix))
                .collect(),
        };

        tracing::debug!("Listing {} zones for {:?}", zones.len(), continent);
        for zone in zones {
            console.say(zone)?;
        }
        console.say(format!("{}\n", screens::SEPARATOR))
    }

    fn view_favorites<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> ConverterResult<()> {
        if self.favorites.is_empty() {
            return console.say(screens::NO_FAVORITES);
        }

        console.say("Favorite timezones:")?;
        for zone in self.favorites.list() {
            match self.resolver.resolve(zone) {
                Ok(id) => {
                    let now = self.settings.render(&self.resolver.now_in(id));
                    console.say(format!("  {}  (now {})", zone, now))?;
                }
                Err(_) => console.say(format!("  {}", zone))?,
            }
        }
        console.say(screens::SEPARATOR)
    }
}
