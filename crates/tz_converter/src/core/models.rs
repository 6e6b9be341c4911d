use std::fmt;

use chrono::NaiveDateTime;
use chrono_tz::Tz;

use crate::core::{
    error::{ConverterError, ConverterResult},
    utils::{DATETIME_INPUT_FORMAT, has_wire_shape},
};

/// A timezone recognised by the resolver
///
/// Only the resolver constructs these, so holding one means the name was
/// found in the timezone database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneId {
    tz: Tz,
}

impl TimezoneId {
    pub(crate) fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Canonical identifier, e.g. `Europe/Berlin`
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    pub(crate) fn tz(&self) -> Tz {
        self.tz
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calendar date plus time of day with minute precision and no zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilDateTime(NaiveDateTime);

impl CivilDateTime {
    /// Parse the fixed `yyyy-MM-dd HH:mm` input pattern
    pub fn parse(input: &str) -> ConverterResult<Self> {
        let malformed = || ConverterError::MalformedDateTime {
            input: input.to_string(),
        };

        if !has_wire_shape(input) {
            return Err(malformed());
        }

        NaiveDateTime::parse_from_str(input, DATETIME_INPUT_FORMAT)
            .map(Self)
            .map_err(|_| malformed())
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for CivilDateTime {
    fn from(value: NaiveDateTime) -> Self {
        use chrono::Timelike;

        // Minute precision only
        Self(
            value
                .with_second(0)
                .and_then(|v| v.with_nanosecond(0))
                .unwrap_or(value),
        )
    }
}

/// One real-world instant as observed in a specific zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedMoment {
    pub civil: CivilDateTime,
    pub zone: TimezoneId,
}

impl ZonedMoment {
    pub fn new(civil: CivilDateTime, zone: TimezoneId) -> Self {
        Self { civil, zone }
    }
}

/// How converted times are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::TwelveHour => f.write_str("Standard Time (12H)"),
            DisplayMode::TwentyFourHour => f.write_str("Military Time (24H)"),
        }
    }
}

/// Region filters offered by the timezone listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continent {
    Africa,
    America,
    Asia,
    Europe,
    Oceania,
    All,
}

impl Continent {
    /// Map a listing code (`AF`, `AM`, `AA`, `EU`, `OZ`, `ALL`) to a continent
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "AF" => Some(Continent::Africa),
            "AM" => Some(Continent::America),
            "AA" => Some(Continent::Asia),
            "EU" => Some(Continent::Europe),
            "OZ" => Some(Continent::Oceania),
            "ALL" => Some(Continent::All),
            _ => None,
        }
    }

    /// Region prefixes of the identifiers belonging to this continent
    ///
    /// The database has no `Oceania` region; its zones live under
    /// `Australia` and `Pacific`.
    pub fn region_prefixes(&self) -> &'static [&'static str] {
        match self {
            Continent::Africa => &["Africa"],
            Continent::America => &["America"],
            Continent::Asia => &["Asia"],
            Continent::Europe => &["Europe"],
            Continent::Oceania => &["Australia", "Pacific"],
            Continent::All => &[],
        }
    }
}
