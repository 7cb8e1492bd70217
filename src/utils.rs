use crate::config::MAX_HOUR_PIPS;
use crate::{TimeRemaining, MS_PER_HOUR, MS_PER_MINUTE};
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for duration parsing
static DURATION_UNITS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+)h)?\s*(?:(\d+)m)?\s*(?:(\d+)s)?$").unwrap()
});
static DURATION_CLOCK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d{2}):(\d{2})$").unwrap());
static QUERY_PARAM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^\??|&)([^=&]+)=([^&]*)").unwrap());

/// Zero-padded two-digit display, e.g. `7` → `"07"`.
pub fn format_two_digits(value: u64) -> String {
    format!("{:02}", value)
}

/// Compact `"{h}h {m}m"` form used by the timer info panel.
pub fn format_hours_minutes(total_ms: u64) -> String {
    format!(
        "{}h {}m",
        total_ms / MS_PER_HOUR,
        (total_ms % MS_PER_HOUR) / MS_PER_MINUTE
    )
}

/// Percentage of `duration_ms` already elapsed, clamped to `[0, 100]`.
pub fn progress_percent(remaining: &TimeRemaining, duration_ms: i64) -> f64 {
    if duration_ms <= 0 {
        return 100.0;
    }
    let elapsed = duration_ms as f64 - remaining.total as f64;
    (elapsed / duration_ms as f64 * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipState {
    Completed,
    Current,
    Pending,
}

/// One pip per started hour of `duration_ms`, at most [`MAX_HOUR_PIPS`].
///
/// An hour counts as completed once it has fully elapsed, so a fresh
/// countdown shows every pip pending except the current one. Longer
/// countdowns only show their last `MAX_HOUR_PIPS` hours.
pub fn hour_pips(remaining: &TimeRemaining, duration_ms: i64, is_active: bool) -> Vec<PipState> {
    let cap = MAX_HOUR_PIPS as u64;
    let pip_count = (duration_ms.max(0) as u64).div_ceil(MS_PER_HOUR).min(cap) as usize;
    let hours_left = remaining.total.div_ceil(MS_PER_HOUR).min(cap) as usize;
    let passed = pip_count.saturating_sub(hours_left);

    (0..pip_count)
        .map(|i| {
            if i < passed {
                PipState::Completed
            } else if i == passed && is_active {
                PipState::Current
            } else {
                PipState::Pending
            }
        })
        .collect()
}

/// Duration parsing error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    EmptyInput,
    InvalidFormat(String),
    InvalidMinutes(u64),
    InvalidSeconds(u64),
    TooLong,
}

impl std::fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationParseError::EmptyInput => write!(f, "Duration cannot be empty"),
            DurationParseError::InvalidFormat(hint) => {
                write!(f, "Invalid duration format. {}", hint)
            }
            DurationParseError::InvalidMinutes(m) => {
                write!(f, "Invalid minutes: {} (must be 0-59)", m)
            }
            DurationParseError::InvalidSeconds(s) => {
                write!(f, "Invalid seconds: {} (must be 0-59)", s)
            }
            DurationParseError::TooLong => write!(f, "Duration is too long"),
        }
    }
}

impl std::error::Error for DurationParseError {}

fn capture_u64(captures: &regex::Captures<'_>, index: usize) -> Result<u64, DurationParseError> {
    match captures.get(index) {
        Some(m) => m.as_str().parse().map_err(|_| DurationParseError::TooLong),
        None => Ok(0),
    }
}

fn to_millis(hours: u64, minutes: u64, seconds: u64) -> Result<i64, DurationParseError> {
    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|h| h.checked_add(minutes.checked_mul(MS_PER_MINUTE)?))
        .and_then(|hm| hm.checked_add(seconds.checked_mul(1_000)?))
        .and_then(|ms| i64::try_from(ms).ok())
        .ok_or(DurationParseError::TooLong)
}

/// Parse a countdown duration to milliseconds.
///
/// Supported formats:
/// - Pure number: "5400000" (milliseconds)
/// - Clock: "01:30:00" (hours:minutes:seconds)
/// - Units: "24h", "1h30m", "90m", "45s", "1h 30m 15s"
///
/// # Examples
/// ```
/// use hackathon_countdown::utils::parse_duration_to_ms;
/// assert_eq!(parse_duration_to_ms("1h30m"), Ok(5_400_000));
/// assert_eq!(parse_duration_to_ms("01:30:00"), Ok(5_400_000));
/// assert_eq!(parse_duration_to_ms("90m"), Ok(5_400_000));
/// assert_eq!(parse_duration_to_ms("5400000"), Ok(5_400_000));
/// ```
pub fn parse_duration_to_ms(input: &str) -> Result<i64, DurationParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::EmptyInput);
    }

    if let Ok(ms) = trimmed.parse::<i64>() {
        return Ok(ms);
    }

    if let Some(captures) = DURATION_CLOCK_REGEX.captures(trimmed) {
        let hours = capture_u64(&captures, 1)?;
        let minutes = capture_u64(&captures, 2)?;
        let seconds = capture_u64(&captures, 3)?;
        if minutes > 59 {
            return Err(DurationParseError::InvalidMinutes(minutes));
        }
        if seconds > 59 {
            return Err(DurationParseError::InvalidSeconds(seconds));
        }
        return to_millis(hours, minutes, seconds);
    }

    if let Some(captures) = DURATION_UNITS_REGEX.captures(trimmed) {
        let hours = capture_u64(&captures, 1)?;
        let minutes = capture_u64(&captures, 2)?;
        let seconds = capture_u64(&captures, 3)?;
        return to_millis(hours, minutes, seconds);
    }

    Err(DurationParseError::InvalidFormat(
        "Use: 24h, 1h30m, 90m, 45s, 01:30:00, or 5400000".to_string(),
    ))
}

/// Decoded value of `key` in a URL query string such as `"?duration=2h&x=1"`.
///
/// `+` and percent escapes are decoded; a value that is not valid UTF-8 once
/// decoded is treated as absent.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let raw = QUERY_PARAM_REGEX
        .captures_iter(search)
        .find(|c| &c[1] == key)
        .and_then(|c| c.get(2))?
        .as_str()
        .replace('+', " ");
    urlencoding::decode(&raw).ok().map(|value| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting() {
        assert_eq!(format_two_digits(7), "07");
        assert_eq!(format_two_digits(23), "23");
        assert_eq!(format_two_digits(124), "124");
        assert_eq!(format_hours_minutes(5 * MS_PER_HOUR + 7 * MS_PER_MINUTE + 59_999), "5h 7m");
        assert_eq!(format_hours_minutes(0), "0h 0m");
    }

    #[test]
    fn test_progress_percent() {
        let day = crate::defaults::DURATION_MS;
        let half = TimeRemaining::from_millis(day / 2);
        assert_eq!(progress_percent(&half, day), 50.0);
        assert_eq!(progress_percent(&TimeRemaining::ZERO, day), 100.0);
        assert_eq!(progress_percent(&TimeRemaining::from_millis(day), day), 0.0);
        assert_eq!(progress_percent(&TimeRemaining::ZERO, 0), 100.0);
    }

    #[test]
    fn test_hour_pips() {
        let day = crate::defaults::DURATION_MS;
        let fresh = hour_pips(&TimeRemaining::from_millis(day - 1_000), day, true);
        assert_eq!(fresh.len(), 24);
        assert_eq!(fresh[0], PipState::Current);
        assert!(fresh[1..].iter().all(|p| *p == PipState::Pending));

        let later = hour_pips(&TimeRemaining::from_millis(20 * 3_600_000 - 1), day, true);
        assert_eq!(later.iter().filter(|p| **p == PipState::Completed).count(), 4);
        assert_eq!(later[4], PipState::Current);

        let done = hour_pips(&TimeRemaining::ZERO, day, false);
        assert!(done.iter().all(|p| *p == PipState::Completed));

        // Partial hours still get a pip.
        assert_eq!(hour_pips(&TimeRemaining::from_millis(5_400_000), 5_400_000, true).len(), 2);
    }

    #[test]
    fn test_hour_pips_cap_long_durations() {
        let longest = parse_duration_to_ms("9223372036854775807").unwrap();
        assert_eq!(longest, i64::MAX);
        let pips = hour_pips(&TimeRemaining::from_millis(longest), longest, true);
        assert_eq!(pips.len(), MAX_HOUR_PIPS);
        assert_eq!(pips[0], PipState::Current);

        let long = parse_duration_to_ms("100000h").unwrap();
        let early = hour_pips(&TimeRemaining::from_millis(long - 1), long, true);
        assert_eq!(early.len(), MAX_HOUR_PIPS);
        assert!(early[1..].iter().all(|p| *p == PipState::Pending));

        // The last day of a long countdown fills in like a normal one.
        let late = hour_pips(&TimeRemaining::from_millis(20 * 3_600_000 - 1), long, true);
        assert_eq!(late.iter().filter(|p| **p == PipState::Completed).count(), 4);
        assert_eq!(late[4], PipState::Current);

        assert!(hour_pips(&TimeRemaining::ZERO, -5, false).is_empty());
    }

    #[test]
    fn test_parse_duration_formats() {
        assert_eq!(parse_duration_to_ms("24h"), Ok(86_400_000));
        assert_eq!(parse_duration_to_ms("1h30m"), Ok(5_400_000));
        assert_eq!(parse_duration_to_ms("1h 30m 15s"), Ok(5_415_000));
        assert_eq!(parse_duration_to_ms("90m"), Ok(5_400_000));
        assert_eq!(parse_duration_to_ms("45s"), Ok(45_000));
        assert_eq!(parse_duration_to_ms("01:30:00"), Ok(5_400_000));
        assert_eq!(parse_duration_to_ms(" 1800000 "), Ok(1_800_000));
        assert_eq!(parse_duration_to_ms("-5"), Ok(-5));
    }

    #[test]
    fn test_parse_duration_errors() {
        assert_eq!(parse_duration_to_ms("  "), Err(DurationParseError::EmptyInput));
        assert_eq!(
            parse_duration_to_ms("01:75:00"),
            Err(DurationParseError::InvalidMinutes(75))
        );
        assert_eq!(
            parse_duration_to_ms("01:00:61"),
            Err(DurationParseError::InvalidSeconds(61))
        );
        assert!(matches!(
            parse_duration_to_ms("tomorrow"),
            Err(DurationParseError::InvalidFormat(_))
        ));
        assert_eq!(
            parse_duration_to_ms("99999999999999999999h"),
            Err(DurationParseError::TooLong)
        );
        assert!(parse_duration_to_ms("abc")
            .unwrap_err()
            .to_string()
            .starts_with("Invalid duration format"));
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?duration=2h&mode=x", "duration").as_deref(), Some("2h"));
        assert_eq!(query_param("?mode=x&duration=90m", "duration").as_deref(), Some("90m"));
        assert_eq!(query_param("?mode=x", "duration"), None);
        assert_eq!(query_param("", "duration"), None);
    }

    #[test]
    fn test_query_param_decodes_escapes() {
        let spaced = query_param("?duration=1h%2030m", "duration");
        assert_eq!(spaced.as_deref(), Some("1h 30m"));
        assert_eq!(parse_duration_to_ms(&spaced.unwrap()), Ok(5_400_000));

        let plus = query_param("?duration=1h+30m", "duration");
        assert_eq!(plus.as_deref(), Some("1h 30m"));

        assert_eq!(query_param("?duration=01%3A30%3A00", "duration").as_deref(), Some("01:30:00"));
        assert_eq!(query_param("?duration=%FF", "duration"), None);
    }
}
