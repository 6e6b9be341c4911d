//! Fixed text shown by the session

use crate::core::models::TimezoneId;

pub const SEPARATOR: &str = "--------------------------------------------";
const RULE: &str = "----------------------------------------------------------------------";

pub fn banner(local_timezone: TimezoneId) -> String {
    format!(
        r#"****************************************
*          TIME ZONE CONVERTER         *
****************************************
Local timezone: {}
Press (X) for All Commands"#,
        local_timezone
    )
}

pub fn commands() -> String {
    format!(
        r#"COMMANDS:
(O) Instructions
(L) List All Timezones
(F) Add to Favorites
(V) View Favorites
(D) Delete from Favorites
(S) Settings
(B) Back
(Q) Quit
(T) Run Tests

{RULE}
"#
    )
}

pub fn instructions() -> String {
    format!(
        r#"{RULE}
INSTRUCTIONS:
1. Enter your timezone:          (Example: Europe/Berlin)
2. Enter the time to convert:    (Example: 2024-04-16 15:30)
3. Enter your target timezone:   (Example: America/Los_Angeles)

OUTPUT MAY LOOK LIKE THIS
{SEPARATOR}
Converted Time: 2024-04-16 06:30 AM America/Los_Angeles
{SEPARATOR}

TIMEZONE CONVERTER COMMANDS:
(C) Start TimeZone Converter
(B) Back
(Q) Quit

{RULE}
"#
    )
}

pub fn continent_menu() -> String {
    format!(
        r#"List of all timezones:
{SEPARATOR}
(AF) Africa
(AM) America
(AA) Asia
(EU) Europe
(OZ) Oceania
(ALL) All
{SEPARATOR}"#
    )
}

pub const SETTINGS: &str = r#"****************************************
*             Settings                 *
****************************************
COMMANDS:
(Z) Time Output
(B) Back
(Q) Quit
"#;

pub const TIME_OUTPUT_SETTINGS: &str = r#"****************************************
*         Time Output Settings         *
****************************************
Choose the time format:
(M) Military Time (24H)
(T) Standard Time (12H)
(B) Back to Settings Menu
"#;

pub const PROMPT_ADD_FAVORITE: &str = "Enter the timezone you want to add to favorites:";
pub const PROMPT_REMOVE_FAVORITE: &str = "Enter the timezone you want to remove from favorites:";
pub const PROMPT_SOURCE_ZONE: &str = "Enter your timezone: ";
pub const PROMPT_DATETIME: &str = "Enter the time to convert (Format: yyyy-MM-dd HH:mm): ";
pub const PROMPT_TARGET_ZONE: &str = "Enter your target timezone: ";

pub const NO_FAVORITES: &str = "No favorite timezones yet.";
pub const FAREWELL: &str = "Goodbye!";
