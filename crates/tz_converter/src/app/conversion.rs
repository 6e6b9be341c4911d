use std::io::{BufRead, Write};

use crate::app::{console::Console, screens};
use crate::core::{
    error::ConverterResult,
    models::{CivilDateTime, TimezoneId, ZonedMoment},
    provider::TimeZoneResolver,
    settings::DisplaySettings,
};

const SELF_TEST_SOURCE: &str = "Europe/Berlin";
const SELF_TEST_TARGET: &str = "America/Los_Angeles";
const SELF_TEST_INPUT: &str = "2024-04-16 15:30";
const SELF_TEST_EXPECTED: &str = "2024-04-16 06:30";

/// What one successful conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub converted: CivilDateTime,
    pub rendered: String,
    /// Target zone exactly as the user typed it
    pub target_input: String,
    pub time_difference: String,
}

/// Prompt, validate and convert a single time
pub struct ConversionFlow<'a, Z: TimeZoneResolver> {
    resolver: &'a Z,
    settings: &'a DisplaySettings,
}

impl<'a, Z: TimeZoneResolver> ConversionFlow<'a, Z> {
    pub fn new(resolver: &'a Z, settings: &'a DisplaySettings) -> Self {
        Self { resolver, settings }
    }

    /// Run one attempt
    ///
    /// An unknown source or target zone ends the attempt with
    /// `ConverterError::UnrecognizedZone`. A malformed date-time is reported
    /// and asked for again until it parses, keeping the source zone.
    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> ConverterResult<ConversionOutcome> {
        let source_input = console.prompt(screens::PROMPT_SOURCE_ZONE)?;
        let source = self.resolver.resolve(&source_input)?;

        let civil = loop {
            let input = console.prompt(screens::PROMPT_DATETIME)?;
            match CivilDateTime::parse(&input) {
                Ok(civil) => break civil,
                Err(e) => {
                    tracing::debug!("Rejected date-time input '{}'", input);
                    console.say(&e)?;
                }
            }
        };

        let target_input = console.prompt(screens::PROMPT_TARGET_ZONE)?;
        let target = self.resolver.resolve(&target_input)?;

        let outcome = self.convert(ZonedMoment::new(civil, source), target, target_input);
        tracing::debug!("Converted {:?} from {} to {}", civil, source, target);

        console.say(format!(
            "\nConverted Time: {} {}",
            outcome.rendered, outcome.target_input
        ))?;
        console.say(format!("Time Difference: {}", outcome.time_difference))?;
        console.say(format!("{}\n", screens::SEPARATOR))?;

        Ok(outcome)
    }

    pub fn convert(
        &self,
        moment: ZonedMoment,
        target: TimezoneId,
        target_input: String,
    ) -> ConversionOutcome {
        let converted = self.resolver.convert(&moment, target);

        ConversionOutcome {
            converted,
            rendered: self.settings.render(&converted),
            target_input,
            time_difference: self.resolver.offset_difference(&moment, target),
        }
    }

    /// Convert the fixed Berlin to Los Angeles scenario and report the verdict
    pub fn self_test(&self) -> String {
        match self.self_test_scenario() {
            Ok((outcome, expected)) if outcome.converted == expected => {
                format!("Test Passed: {} {}", outcome.rendered, outcome.target_input)
            }
            Ok((outcome, _)) => format!(
                "Test Failed: expected {} but got {} {}",
                SELF_TEST_EXPECTED, outcome.rendered, outcome.target_input
            ),
            Err(e) => format!("Test Failed: {}", e),
        }
    }

    fn self_test_scenario(&self) -> ConverterResult<(ConversionOutcome, CivilDateTime)> {
        let source = self.resolver.resolve(SELF_TEST_SOURCE)?;
        let target = self.resolver.resolve(SELF_TEST_TARGET)?;
        let civil = CivilDateTime::parse(SELF_TEST_INPUT)?;
        let expected = CivilDateTime::parse(SELF_TEST_EXPECTED)?;

        let outcome = self.convert(
            ZonedMoment::new(civil, source),
            target,
            SELF_TEST_TARGET.to_string(),
        );
        Ok((outcome, expected))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::core::{error::ConverterError, models::DisplayMode, provider::TzDatabase};

    fn run_flow(
        mode: DisplayMode,
        input: &str,
    ) -> (ConverterResult<ConversionOutcome>, String, String) {
        let db = TzDatabase::new();
        let settings = DisplaySettings::new(mode);
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());

        let result = ConversionFlow::new(&db, &settings).run(&mut console);
        let mut rest = String::new();
        while let Ok(line) = console.read_line() {
            rest.push_str(&line);
            rest.push('\n');
        }
        let output = String::from_utf8(console.into_writer()).unwrap();
        (result, output, rest)
    }

    #[test]
    fn test_fixed_scenario_twenty_four_hour() {
        let (result, output, _) = run_flow(
            DisplayMode::TwentyFourHour,
            "Europe/Berlin\n2024-04-16 15:30\nAmerica/Los_Angeles\n",
        );

        let outcome = result.unwrap();
        assert_eq!(outcome.rendered, "2024-04-16 06:30");
        assert_eq!(outcome.time_difference, "-9h");
        assert!(output.contains("Converted Time: 2024-04-16 06:30 America/Los_Angeles\n"));
        assert!(!output.contains(" AM") && !output.contains(" PM"));
    }

    #[test]
    fn test_fixed_scenario_twelve_hour() {
        let (result, output, _) = run_flow(
            DisplayMode::TwelveHour,
            "Europe/Berlin\n2024-04-16 15:30\nAmerica/Los_Angeles\n",
        );

        assert_eq!(result.unwrap().rendered, "2024-04-16 06:30 AM");
        assert!(output.contains("Converted Time: 2024-04-16 06:30 AM America/Los_Angeles"));
    }

    #[test]
    fn test_target_echoed_as_typed() {
        let (result, output, _) = run_flow(
            DisplayMode::TwentyFourHour,
            "UTC\n2024-01-01 12:00\n  Asia/Tokyo \n",
        );

        let outcome = result.unwrap();
        assert_eq!(outcome.target_input, "  Asia/Tokyo ");
        assert!(output.contains("Converted Time: 2024-01-01 21:00   Asia/Tokyo \n"));
    }

    #[test]
    fn test_invalid_source_aborts_without_reading_further() {
        let (result, output, rest) = run_flow(
            DisplayMode::TwentyFourHour,
            "Nowhere/Special\n2024-04-16 15:30\nUTC\n",
        );

        assert!(matches!(
            result,
            Err(ConverterError::UnrecognizedZone { ref zone }) if zone == "Nowhere/Special"
        ));
        assert!(!output.contains("Enter the time to convert"));
        assert_eq!(rest, "2024-04-16 15:30\nUTC\n");
    }

    #[test]
    fn test_malformed_time_retries_only_that_step() {
        let (result, output, _) = run_flow(
            DisplayMode::TwentyFourHour,
            "Europe/Berlin\n2024-13-40 99:99\n2024-04-16 15:30\nAmerica/Los_Angeles\n",
        );

        assert_eq!(result.unwrap().rendered, "2024-04-16 06:30");
        assert_eq!(output.matches("Invalid time format. Please try again.").count(), 1);
        assert_eq!(output.matches("Enter your timezone").count(), 1);
        assert_eq!(output.matches("Enter the time to convert").count(), 2);
    }

    #[test]
    fn test_invalid_target_aborts_flow() {
        let (result, output, _) = run_flow(
            DisplayMode::TwentyFourHour,
            "Europe/Berlin\n2024-04-16 15:30\nAmerica/Atlantis\n",
        );

        assert!(matches!(
            result,
            Err(ConverterError::UnrecognizedZone { ref zone }) if zone == "America/Atlantis"
        ));
        assert!(!output.contains("Converted Time"));
    }

    #[test]
    fn test_closed_input_mid_flow() {
        let (result, _, _) = run_flow(DisplayMode::TwelveHour, "Europe/Berlin\nnot a time\n");
        assert!(matches!(result, Err(ConverterError::InputClosed)));
    }

    #[test]
    fn test_self_test_verdict_follows_display_mode() {
        let db = TzDatabase::new();

        let twelve = DisplaySettings::new(DisplayMode::TwelveHour);
        assert_eq!(
            ConversionFlow::new(&db, &twelve).self_test(),
            "Test Passed: 2024-04-16 06:30 AM America/Los_Angeles"
        );

        let twenty_four = DisplaySettings::new(DisplayMode::TwentyFourHour);
        assert_eq!(
            ConversionFlow::new(&db, &twenty_four).self_test(),
            "Test Passed: 2024-04-16 06:30 America/Los_Angeles"
        );
    }
}
