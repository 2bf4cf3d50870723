//! Command-line argument parsing using clap.
//!
//! Arguments are either empty (current month) or `<year> <month>`. Tokens
//! are taken verbatim, so `-5` or `--` count as arguments like any other;
//! clap only renders `--help` and `--version` when given alone.

use std::ffi::{OsStr, OsString};
use std::num::IntErrorKind;

use chrono::{Datelike, NaiveDate};
use clap::{CommandFactory, Parser, ValueHint};
use log::debug;

use crate::error::CaleError;
use crate::types::Date;

/// Environment variable that pins "today" to a `YYYY-MM-DD` date.
pub const TEST_TIME_VAR: &str = "CALE_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "cale")]
#[command(about = "Displays a colored calendar for one month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Year, 1900 or later (given together with month).
    #[arg(value_name = "YEAR", value_hint = ValueHint::Other)]
    pub year: Option<String>,

    /// Month, 1-12.
    #[arg(value_name = "MONTH", value_hint = ValueHint::Other)]
    pub month: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, display the current month with today highlighted.

Examples:
  cale               Display current month
  cale 2024 2        Display February 2024";

/// Source of the current date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local system time, overridable through `CALE_TEST_TIME`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        if let Ok(test_time) = std::env::var(TEST_TIME_VAR)
            && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
        {
            debug!("using {}={}", TEST_TIME_VAR, date);
            return date;
        }
        chrono::Local::now().date_naive()
    }
}

/// A clock that always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Today's date with the day set for highlighting.
pub fn current_date(clock: &impl Clock) -> Date {
    let today = clock.today();
    Date::new(today.year(), today.month() as i32, Some(today.day()))
}

/// Help or version text when the command line is exactly one such flag.
pub fn informational_text(tokens: &[OsString]) -> Option<String> {
    let [flag] = tokens else {
        return None;
    };
    let mut cmd = Args::command();
    match flag.to_str()? {
        "-h" | "--help" => Some(cmd.render_help().to_string()),
        "-V" | "--version" => Some(cmd.render_version()),
        _ => None,
    }
}

/// Parse a base-10 32-bit signed integer, tolerating surrounding whitespace.
///
/// Overflow of the leading digits is reported before any invalid trailing
/// character, so `99999999999x` is an overflow.
pub fn parse_to_int(token: &str) -> Result<i32, CaleError> {
    let trimmed = token.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let leading = &trimmed[..trimmed.len() - unsigned.len() + digits];

    if let Err(e) = leading.parse::<i32>()
        && matches!(
            e.kind(),
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
        )
    {
        return Err(CaleError::IntegerOverflow {
            token: token.to_string(),
        });
    }

    trimmed.parse::<i32>().map_err(|_| CaleError::InvalidInteger {
        token: token.to_string(),
    })
}

fn parse_token(token: &OsStr) -> Result<i32, CaleError> {
    match token.to_str() {
        Some(text) => parse_to_int(text),
        None => Err(CaleError::InvalidInteger {
            token: token.to_string_lossy().into_owned(),
        }),
    }
}

/// Turn positional arguments into an explicit date.
///
/// Returns `Ok(None)` when no arguments were given, so the caller falls back
/// to the current date. The returned date is not validated yet.
pub fn parse_arguments(args: &[OsString]) -> Result<Option<Date>, CaleError> {
    match args {
        [] => Ok(None),
        [year, month] => {
            let year = parse_token(year)?;
            let month = parse_token(month)?;
            debug!("parsed arguments: year={} month={}", year, month);
            Ok(Some(Date::new(year, month, None)))
        }
        _ => {
            debug!("expected 0 or 2 arguments, got {}", args.len());
            Err(CaleError::Usage)
        }
    }
}

/// Resolve the date to render: explicit arguments, or today from `clock`.
pub fn resolve_date(args: &[OsString], clock: &impl Clock) -> Result<Date, CaleError> {
    match parse_arguments(args)? {
        Some(date) => Ok(date),
        None => Ok(current_date(clock)),
    }
}
