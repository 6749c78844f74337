//! Date and time handling.
//!
//! Three representations exist for a task timestamp:
//! - the input form typed by the user, `yyyy M d HH mm` (`2024 3 5 18 00`)
//! - the canonical form used in memory and on disk, `2024-03-05T18:00`
//! - the display form, `Mar 5 2024, 18:00`
//!
//! Input is converted exactly once, when a task is created. Only the
//! canonical form is ever parsed back.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CroError;

/// `yyyy M d HH mm`: 4-digit year, 1-2 digit month and day, 2-digit hour and minute.
static INPUT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}) (\d{1,2}) (\d{1,2}) (\d{2}) (\d{2})$")
        .unwrap_or_else(|e| panic!("Invalid date input regex: {e}"))
});

const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M";
const CANONICAL_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const DISPLAY_FORMAT: &str = "%b %-d %Y, %H:%M";

/// Parse the user's date tokens.
///
/// The tokens are joined with single spaces before matching, so the token
/// stream produced by whitespace splitting is accepted directly.
///
/// # Errors
///
/// Returns [`CroError::InvalidDate`] if the tokens do not form exactly five
/// numeric fields of the right width, or if the fields are out of range.
pub fn parse_input_datetime(tokens: &[&str]) -> Result<NaiveDateTime, CroError> {
    let joined = tokens.join(" ");
    let invalid = || CroError::InvalidDate(joined.clone());

    let caps = INPUT_PATTERN.captures(&joined).ok_or_else(invalid)?;
    let field = |i: usize| -> Result<u32, CroError> {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(invalid)
    };

    let year = i32::try_from(field(1)?).map_err(|_| invalid())?;
    let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?).ok_or_else(invalid)?;
    let time = NaiveTime::from_hms_opt(field(4)?, field(5)?, 0).ok_or_else(invalid)?;

    Ok(NaiveDateTime::new(date, time))
}

/// Render a timestamp in canonical form.
///
/// Seconds are only written when non-zero, which never happens for
/// timestamps that came from user input.
#[must_use]
pub fn to_canonical(datetime: &NaiveDateTime) -> String {
    if datetime.second() == 0 {
        datetime.format(CANONICAL_FORMAT).to_string()
    } else {
        datetime.format(CANONICAL_FORMAT_SECONDS).to_string()
    }
}

/// Parse a timestamp in canonical form.
///
/// # Errors
///
/// Returns [`CroError::InvalidDate`] for anything [`to_canonical`] would not
/// produce, including the raw input form and a `:00` seconds suffix.
pub fn parse_canonical(input: &str) -> Result<NaiveDateTime, CroError> {
    let invalid = || CroError::InvalidDate(input.to_string());

    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, CANONICAL_FORMAT) {
        return Ok(datetime);
    }
    NaiveDateTime::parse_from_str(input, CANONICAL_FORMAT_SECONDS)
        .ok()
        .filter(|datetime| datetime.second() != 0)
        .ok_or_else(invalid)
}

/// Render a timestamp for people, e.g. `Oct 15 2019, 18:00`.
///
/// chrono's month names are fixed English abbreviations, so the output does
/// not depend on the system locale.
#[must_use]
pub fn to_display(datetime: &NaiveDateTime) -> String {
    datetime.format(DISPLAY_FORMAT).to_string()
}
