use chrono::{DateTime, Offset};
use chrono_tz::Tz;

// Constants for format strings
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const TWENTY_FOUR_HOUR_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const TWELVE_HOUR_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Positions of the separators in `yyyy-MM-dd HH:mm`
const WIRE_SEPARATORS: [(usize, u8); 4] = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':')];
const WIRE_LENGTH: usize = 16;

/// Check that `input` has the exact shape `yyyy-MM-dd HH:mm`
///
/// chrono accepts single-digit fields and signed years, so the fixed
/// two-digit wire format is enforced here before parsing.
pub fn has_wire_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != WIRE_LENGTH {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| {
        match WIRE_SEPARATORS.iter().find(|(pos, _)| *pos == i) {
            Some((_, sep)) => b == sep,
            None => b.is_ascii_digit(),
        }
    })
}

/// Format a time difference in hours
///
/// # Arguments
///
/// * `hours_difference` - The time difference in hours
///
/// # Returns
///
/// A formatted string representing the time difference
pub fn format_time_difference(hours_difference: f64) -> String {
    match hours_difference.fract() {
        0.0 => format!("{:+.0}h", hours_difference),
        _ => {
            let formatted = format!("{:+}", hours_difference);
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
            format!("{}h", trimmed)
        }
    }
}

/// Calculate the offset difference between two zoned views of one instant
pub fn calculate_time_difference(source_time: &DateTime<Tz>, target_time: &DateTime<Tz>) -> String {
    let source_offset = source_time.offset().fix().local_minus_utc();
    let target_offset = target_time.offset().fix().local_minus_utc();
    let hours_difference = f64::from(target_offset - source_offset) / 3600.0;

    format_time_difference(hours_difference)
}
