//! # Timezone Converter Core
//!
//! Domain state and timezone operations for the interactive converter.
//!
//! ## Modules
//! - `error`: Error taxonomy shared by the session
//! - `favorites`: In-memory favorites list
//! - `models`: Zone, civil time and display types
//! - `provider`: Resolver trait and the `chrono-tz` backed database
//! - `settings`: 12/24-hour display toggle
//! - `utils`: Format constants and small helpers

pub mod error;
pub mod favorites;
pub mod models;
pub mod provider;
pub mod settings;
pub mod utils;
