use crate::core::{
    error::{ConverterError, ConverterResult},
    models::DisplayMode,
};

/// Which command vocabulary is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuContext {
    #[default]
    Main,
    Instructions,
    Settings,
    TimeOutputSettings,
}

/// Work the session performs for one accepted command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowBanner,
    ShowCommands,
    ShowInstructions,
    ListTimezones,
    AddFavorite,
    RemoveFavorite,
    ViewFavorites,
    ShowSettings,
    ShowTimeOutputSettings,
    SetMode(DisplayMode),
    RunConversion,
    RunSelfTest,
    Quit,
}

/// Result of feeding one line to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: MenuContext,
}

impl Transition {
    fn to(action: Action, next: MenuContext) -> Self {
        Self { action, next }
    }
}

/// Map one input line to an action and the next context
///
/// Matching ignores case and surrounding whitespace. Unrecognised input
/// yields `ConverterError::UnrecognizedCommand`; the caller keeps the
/// current context in that case.
pub fn transition(context: MenuContext, input: &str) -> ConverterResult<Transition> {
    use Action::*;
    use MenuContext::*;

    let command = input.trim().to_ascii_uppercase();

    let transition = match (context, command.as_str()) {
        (Main, "X") => Transition::to(ShowCommands, Main),
        (Main, "O") => Transition::to(ShowInstructions, Instructions),
        (Main, "L") => Transition::to(ListTimezones, Main),
        (Main, "F") => Transition::to(AddFavorite, Main),
        (Main, "D") => Transition::to(RemoveFavorite, Main),
        (Main, "V") => Transition::to(ViewFavorites, Main),
        (Main, "S") => Transition::to(ShowSettings, Settings),
        (Main, "B") => Transition::to(ShowBanner, Main),
        (Main, "T") => Transition::to(RunSelfTest, Main),

        (Instructions, "C") => Transition::to(RunConversion, Main),
        (Instructions, "B") => Transition::to(ShowBanner, Main),

        (Settings, "Z") => Transition::to(ShowTimeOutputSettings, TimeOutputSettings),
        (Settings, "B") => Transition::to(ShowBanner, Main),

        (TimeOutputSettings, "M") => {
            Transition::to(SetMode(DisplayMode::TwentyFourHour), Settings)
        }
        (TimeOutputSettings, "T") => Transition::to(SetMode(DisplayMode::TwelveHour), Settings),
        (TimeOutputSettings, "B") => Transition::to(ShowSettings, Settings),

        (_, "Q") => Transition::to(Quit, context),

        _ => {
            return Err(ConverterError::UnrecognizedCommand {
                input: input.to_string(),
            });
        }
    };

    Ok(transition)
}
