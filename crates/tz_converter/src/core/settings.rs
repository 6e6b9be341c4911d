use crate::core::{
    models::{CivilDateTime, DisplayMode},
    utils::{TWELVE_HOUR_FORMAT, TWENTY_FOUR_HOUR_FORMAT},
};

/// Output format toggle, read only when rendering a converted time
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplaySettings {
    mode: DisplayMode,
}

impl DisplaySettings {
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        tracing::debug!("Display mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    pub fn render(&self, moment: &CivilDateTime) -> String {
        let pattern = match self.mode {
            DisplayMode::TwelveHour => TWELVE_HOUR_FORMAT,
            DisplayMode::TwentyFourHour => TWENTY_FOUR_HOUR_FORMAT,
        };
        moment.naive().format(pattern).to_string()
    }
}
