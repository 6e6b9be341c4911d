use std::str::FromStr;

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::{TZ_VARIANTS, Tz};

use crate::core::{
    error::{ConverterError, ConverterResult},
    models::{CivilDateTime, TimezoneId, ZonedMoment},
    utils,
};

/// Timezone database operations consumed by the session
///
/// Abstracts the offset calculations so the dispatcher and the conversion
/// flow can be exercised against any implementation.
pub trait TimeZoneResolver {
    /// Look up a zone identifier
    ///
    /// # Returns
    /// * `Ok(TimezoneId)` - The identifier is known to the database
    /// * `Err(ConverterError::UnrecognizedZone)` - It is not
    fn resolve(&self, identifier: &str) -> ConverterResult<TimezoneId>;

    /// All known identifiers, sorted
    fn list_all(&self) -> Vec<TimezoneId>;

    /// Identifiers whose region (the part before the first `/`) equals `prefix`
    fn list_by_region_prefix(&self, prefix: &str) -> Vec<TimezoneId> {
        self.list_all()
            .into_iter()
            .filter(|id| {
                id.name()
                    .split_once('/')
                    .is_some_and(|(region, _)| region == prefix)
            })
            .collect()
    }

    /// Civil time in `target` denoting the same instant as `moment`
    fn convert(&self, moment: &ZonedMoment, target: TimezoneId) -> CivilDateTime;

    /// Signed UTC offset difference from the moment's zone to `target`, e.g. `-9h`
    fn offset_difference(&self, moment: &ZonedMoment, target: TimezoneId) -> String;

    /// Current civil time in `zone`
    fn now_in(&self, zone: TimezoneId) -> CivilDateTime;

    /// Zone of the host system, shown in the banner
    fn local_timezone(&self) -> TimezoneId;
}

/// Resolver backed by the IANA database compiled into `chrono-tz`
#[derive(Debug, Clone)]
pub struct TzDatabase {
    local_timezone: TimezoneId,
}

impl TzDatabase {
    pub fn new() -> Self {
        // Try to detect the system's local timezone
        let local_tz = match iana_time_zone::get_timezone() {
            Ok(tz_name) => match tz_name.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                    chrono_tz::UTC
                }
            },
            Err(_) => {
                tracing::warn!("Could not detect system timezone, defaulting to UTC");
                chrono_tz::UTC
            }
        };

        Self {
            local_timezone: TimezoneId::new(local_tz),
        }
    }

    /// Pin a civil time to an instant in its zone
    ///
    /// Ambiguous local times take the earlier offset. Local times skipped by
    /// a forward transition are read with the offset in force before it,
    /// which moves them forward by the length of the gap.
    fn localize(&self, moment: &ZonedMoment) -> DateTime<Tz> {
        let tz = moment.zone.tz();
        let naive = moment.civil.naive();

        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
            LocalResult::None => {
                let before_gap = naive - TimeDelta::days(1);
                let offset = tz.offset_from_utc_datetime(&before_gap).fix();
                let utc: NaiveDateTime =
                    naive - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
                tz.from_utc_datetime(&utc)
            }
        }
    }
}

impl Default for TzDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeZoneResolver for TzDatabase {
    fn resolve(&self, identifier: &str) -> ConverterResult<TimezoneId> {
        Tz::from_str(identifier.trim())
            .map(TimezoneId::new)
            .map_err(|_| ConverterError::UnrecognizedZone {
                zone: identifier.to_string(),
            })
    }

    fn list_all(&self) -> Vec<TimezoneId> {
        let mut zones: Vec<TimezoneId> = TZ_VARIANTS.iter().copied().map(TimezoneId::new).collect();
        zones.sort_by_key(|id| id.name());
        zones
    }

    fn convert(&self, moment: &ZonedMoment, target: TimezoneId) -> CivilDateTime {
        let source_time = self.localize(moment);
        source_time.with_timezone(&target.tz()).naive_local().into()
    }

    fn offset_difference(&self, moment: &ZonedMoment, target: TimezoneId) -> String {
        let source_time = self.localize(moment);
        let target_time = source_time.with_timezone(&target.tz());
        utils::calculate_time_difference(&source_time, &target_time)
    }

    fn now_in(&self, zone: TimezoneId) -> CivilDateTime {
        Utc::now().with_timezone(&zone.tz()).naive_local().into()
    }

    fn local_timezone(&self) -> TimezoneId {
        self.local_timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civil(input: &str) -> CivilDateTime {
        CivilDateTime::parse(input).unwrap()
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let db = TzDatabase::new();

        let berlin = db.resolve("Europe/Berlin").unwrap();
        assert_eq!(berlin.name(), "Europe/Berlin");
        assert_eq!(db.resolve("  UTC  ").unwrap().name(), "UTC");

        let result = db.resolve("Invalid/Timezone");
        assert!(matches!(
            result,
            Err(ConverterError::UnrecognizedZone { ref zone }) if zone == "Invalid/Timezone"
        ));
    }

    #[test]
    fn test_local_timezone_detected() {
        let db = TzDatabase::new();
        assert!(!db.local_timezone().name().is_empty());
    }

    #[test]
    fn test_berlin_to_los_angeles() {
        let db = TzDatabase::new();
        let berlin = db.resolve("Europe/Berlin").unwrap();
        let la = db.resolve("America/Los_Angeles").unwrap();

        let moment = ZonedMoment::new(civil("2024-04-16 15:30"), berlin);
        assert_eq!(db.convert(&moment, la), civil("2024-04-16 06:30"));
        assert_eq!(db.offset_difference(&moment, la), "-9h");
    }

    #[test]
    fn test_round_trip_restores_civil_time() {
        let db = TzDatabase::new();
        let pairs = [
            ("Europe/Berlin", "America/Los_Angeles", "2024-04-16 15:30"),
            ("Asia/Kolkata", "Pacific/Auckland", "2024-12-31 23:59"),
            ("Asia/Kathmandu", "UTC", "2024-01-01 00:00"),
        ];

        for (a, b, time) in pairs {
            let zone_a = db.resolve(a).unwrap();
            let zone_b = db.resolve(b).unwrap();
            let original = civil(time);

            let there = db.convert(&ZonedMoment::new(original, zone_a), zone_b);
            let back = db.convert(&ZonedMoment::new(there, zone_b), zone_a);
            assert_eq!(back, original, "{a} -> {b} -> {a}");
        }
    }

    #[test]
    fn test_fractional_offset_difference() {
        let db = TzDatabase::new();
        let utc = db.resolve("UTC").unwrap();
        let kathmandu = db.resolve("Asia/Kathmandu").unwrap();

        let moment = ZonedMoment::new(civil("2024-06-01 12:00"), utc);
        assert_eq!(db.convert(&moment, kathmandu), civil("2024-06-01 17:45"));
        assert_eq!(db.offset_difference(&moment, kathmandu), "+5.75h");
    }

    #[test]
    fn test_gap_time_moves_forward() {
        let db = TzDatabase::new();
        let berlin = db.resolve("Europe/Berlin").unwrap();
        let utc = db.resolve("UTC").unwrap();

        // 02:30 does not exist in Berlin on 2024-03-31; read with +01:00
        let moment = ZonedMoment::new(civil("2024-03-31 02:30"), berlin);
        assert_eq!(db.convert(&moment, utc), civil("2024-03-31 01:30"));
        assert_eq!(db.convert(&moment, berlin), civil("2024-03-31 03:30"));
    }

    #[test]
    fn test_ambiguous_time_takes_earlier_offset() {
        let db = TzDatabase::new();
        let berlin = db.resolve("Europe/Berlin").unwrap();
        let utc = db.resolve("UTC").unwrap();

        // 02:30 occurs twice in Berlin on 2024-10-27; first at +02:00
        let moment = ZonedMoment::new(civil("2024-10-27 02:30"), berlin);
        assert_eq!(db.convert(&moment, utc), civil("2024-10-27 00:30"));
    }

    #[test]
    fn test_region_listing() {
        let db = TzDatabase::new();

        let europe = db.list_by_region_prefix("Europe");
        assert!(!europe.is_empty());
        assert!(europe.iter().all(|id| id.name().starts_with("Europe/")));
        assert!(europe.iter().any(|id| id.name() == "Europe/Berlin"));

        assert!(db.list_by_region_prefix("Oceania").is_empty());
        assert!(db.list_all().len() > europe.len());
    }

    #[test]
    fn test_list_all_sorted() {
        let db = TzDatabase::new();
        let names: Vec<&str> = db.list_all().iter().map(|id| id.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"America/Los_Angeles"));
    }
}
