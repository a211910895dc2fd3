//! Human-friendly trip duration formatting.

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;

/// Format a duration in seconds using the largest sensible unit.
///
/// Units are tried smallest first; a unit is kept while the value does not
/// exceed its upper bound (120 s, 120 min, 48 h, 60 d, 48 months). Values on
/// a bound stay in the smaller unit.
pub fn format_duration(seconds: f64) -> String {
    let (value, unit) = if seconds <= 120.0 {
        (seconds, "seconds")
    } else if seconds <= 120.0 * MINUTE {
        (seconds / MINUTE, "minutes")
    } else if seconds <= 48.0 * HOUR {
        (seconds / HOUR, "hours")
    } else if seconds <= 60.0 * DAY {
        (seconds / DAY, "days")
    } else if seconds <= 48.0 * MONTH {
        (seconds / MONTH, "months")
    } else {
        (seconds / YEAR, "years")
    };

    format!("{value:.2} {unit}")
}
