use crate::core::models::DisplayMode;

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub display_mode: DisplayMode,
    /// Favorites to start the session with, in order
    pub favorites: Vec<String>,
}
