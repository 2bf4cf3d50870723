//! Colored one-month calendar for the terminal.
//!
//! Features:
//! - Current month with today highlighted, or any month from 1900 on
//! - Monday-first grid with colored weekends
//! - Proleptic Gregorian weekday and leap-year rules

use std::ffi::OsString;
use std::io::Write;

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod types;

use crate::args::{Clock, informational_text, resolve_date};
use crate::error::CaleError;
use crate::formatter::print_month;
use crate::types::MonthLayout;

/// Run the whole pipeline: parse, validate, compute, render into `out`.
///
/// `argv` includes the program name. A lone `--help` or `--version` is
/// written to `out` and succeeds.
pub fn run<I, T, W>(argv: I, clock: &impl Clock, out: &mut W) -> Result<(), CaleError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let tokens: Vec<OsString> = argv.into_iter().skip(1).map(Into::into).collect();

    if let Some(text) = informational_text(&tokens) {
        write!(out, "{}", text)?;
        return Ok(());
    }

    let date = resolve_date(&tokens, clock)?;
    let layout = MonthLayout::new(&date)?;
    print_month(out, &layout)?;
    Ok(())
}
