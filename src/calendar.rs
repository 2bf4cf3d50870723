//! Calendar calculation logic using Zeller's algorithm.

use chrono::Weekday;
use log::{debug, trace};

use crate::error::CaleError;
use crate::types::{DAYS_IN_MONTH, DAYS_PER_WEEK, Date, MIN_YEAR, MonthLayout};

/// Check if a year is a leap year: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` of `year`, or `None` when the month is outside 1-12.
pub fn days_in_month(year: i32, month: i32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        return Some(29);
    }
    Some(DAYS_IN_MONTH[(month - 1) as usize])
}

/// Weekday of the first day of the month, using Zeller's congruence on the
/// proleptic Gregorian calendar.
pub fn first_weekday(year: i32, month: u32) -> Weekday {
    let m = if month < 3 { month + 12 } else { month };
    let q: i32 = 1;
    let year_i = if month < 3 { year - 1 } else { year };
    let k: i32 = year_i.rem_euclid(100);
    let j: i32 = year_i.div_euclid(100);

    let h = (q + (13 * (m as i32 + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        _ => Weekday::Fri,
    }
}

/// Blank cells before the 1st in a Monday-first week: Monday is 0, Sunday is 6.
pub fn leading_blank_columns(first_weekday: Weekday) -> usize {
    first_weekday.num_days_from_monday() as usize
}

/// Check that a date can be rendered.
pub fn validate(date: &Date) -> Result<(), CaleError> {
    if date.year < MIN_YEAR {
        return Err(CaleError::YearTooEarly { year: date.year });
    }
    let Some(days) = days_in_month(date.year, date.month) else {
        return Err(CaleError::MonthOutOfRange { month: date.month });
    };
    if let Some(day) = date.day
        && !(1..=days).contains(&day)
    {
        return Err(CaleError::DayOutOfRange {
            year: date.year,
            month: date.month,
            day,
        });
    }
    Ok(())
}

impl MonthLayout {
    /// Build the grid for a date, validating it first.
    pub fn new(date: &Date) -> Result<Self, CaleError> {
        validate(date)?;

        let days_in_month = days_in_month(date.year, date.month)
            .ok_or(CaleError::MonthOutOfRange { month: date.month })?;
        let month = date.month as u32;
        let first_weekday = first_weekday(date.year, month);
        let leading_blanks = leading_blank_columns(first_weekday);

        let mut cells: Vec<Option<u32>> =
            Vec::with_capacity(leading_blanks + days_in_month as usize);
        cells.extend(std::iter::repeat_n(None, leading_blanks));
        cells.extend((1..=days_in_month).map(Some));

        debug!(
            "layout {}-{:02}: starts {:?}, {} days, {} blanks",
            date.year, month, first_weekday, days_in_month, leading_blanks
        );
        trace!("{} rows of {} columns", cells.len().div_ceil(DAYS_PER_WEEK), DAYS_PER_WEEK);

        Ok(MonthLayout {
            highlight: date.day,
            leading_blanks,
            cells,
        })
    }
}
