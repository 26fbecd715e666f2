//! Formatting helpers for console tables, reports and exports.
//!
//! Durations are shown as `HH:MM`, timestamps in local time using the
//! configured `date_format`, and absent values as `-`.
//!
//! ```rust
//! use coursework::libs::formatter::{format_duration, format_minutes};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(30))), "02:30");
//! assert_eq!(format_minutes(95), "01:35");
//! ```

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Write;
use thiserror::Error;

/// Placeholder for absent values.
pub const EMPTY_CELL: &str = "-";

/// Fallback input format accepted for dates in addition to the configured one.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rendering used when the configured format cannot be applied.
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("'{input}' matches neither '{format}' nor YYYY-MM-DD")]
    Unrecognized { input: String, format: String },

    #[error("'{0}' does not exist in the local time zone")]
    NonexistentLocalTime(String),

    #[error("'{0}' is not a valid date format")]
    InvalidFormat(String),
}

/// Whether `format` only holds specifiers chrono understands.
///
/// ```rust
/// use coursework::libs::formatter::is_valid_date_format;
///
/// assert!(is_valid_date_format("%d/%m/%Y %H:%M"));
/// assert!(!is_valid_date_format("%Q"));
/// ```
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Formats a duration as `HH:MM`. Negative durations show as `00:00`.
///
/// ```rust
/// use coursework::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(8)), "08:00");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// assert_eq!(format_duration(&Duration::hours(24)), "24:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

pub fn format_minutes(minutes: u32) -> String {
    format_duration(&Duration::minutes(i64::from(minutes)))
}

pub fn format_percentage(percentage: u64) -> String {
    format!("{}%", percentage)
}

/// Local-time rendering of `at`, or `-` when unset.
///
/// An unusable `format` falls back to [`FALLBACK_DATE_FORMAT`].
pub fn format_date(at: Option<DateTime<Utc>>, format: &str) -> String {
    let Some(at) = at else {
        return EMPTY_CELL.to_string();
    };
    let local = at.with_timezone(&Local);

    let mut rendered = String::new();
    if is_valid_date_format(format) && write!(rendered, "{}", local.format(format)).is_ok() {
        return rendered;
    }
    tracing::debug!(format, "invalid date format, using fallback");
    local.format(FALLBACK_DATE_FORMAT).to_string()
}

/// Text cell: `-` when absent, cut to `max_chars` characters with a `...` suffix.
pub fn format_text(value: Option<&str>, max_chars: usize) -> String {
    let Some(value) = value else {
        return EMPTY_CELL.to_string();
    };
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let kept: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Parses a local date given on the command line.
///
/// `input` is tried against `format` as a date-time, then as a date, and
/// finally as `YYYY-MM-DD`. Date-only input means midnight local time.
pub fn parse_date(input: &str, format: &str) -> Result<DateTime<Utc>, DateParseError> {
    if !is_valid_date_format(format) {
        return Err(DateParseError::InvalidFormat(format.to_string()));
    }
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, format)
        .ok()
        .or_else(|| NaiveDate::parse_from_str(input, format).ok().and_then(|date| date.and_hms_opt(0, 0, 0)))
        .or_else(|| NaiveDate::parse_from_str(input, ISO_DATE_FORMAT).ok().and_then(|date| date.and_hms_opt(0, 0, 0)))
        .ok_or_else(|| DateParseError::Unrecognized {
            input: input.to_string(),
            format: format.to_string(),
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
        .ok_or_else(|| DateParseError::NonexistentLocalTime(input.to_string()))
}
