//! Type definitions and constants for calendar formatting.

/// A year/month pair with an optional day to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i32,
    /// Month number, only guaranteed to be 1-12 after validation.
    pub month: i32,
    /// Day to highlight; `None` renders the month without a highlighted cell.
    pub day: Option<u32>,
}

impl Date {
    pub fn new(year: i32, month: i32, day: Option<u32>) -> Self {
        Date { year, month, day }
    }
}

/// Calendar grid for a single validated month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    pub highlight: Option<u32>,
    pub leading_blanks: usize,
    /// Leading blank cells followed by days `1..=days_in_month`, no trailing padding.
    pub cells: Vec<Option<u32>>,
}

impl MonthLayout {
    /// Grid rows; the last one may be shorter than a full week.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn row_count(&self) -> usize {
        self.cells.len().div_ceil(DAYS_PER_WEEK)
    }
}

pub const DAYS_PER_WEEK: usize = 7;

// A 31-day month starting on Sunday needs six weeks
pub const MAX_ROWS: usize = 6;

pub const MIN_YEAR: i32 = 1900;

/// Days per month for a common year, indexed by `month - 1`.
pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Monday-first weekday abbreviations.
pub const WEEKDAY_HEADER: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Grid columns (0-based) at or past this index are Saturday and Sunday.
pub const FIRST_WEEKEND_COLUMN: usize = 5;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_GREEN: &str = "\x1b[32m";
pub const COLOR_YELLOW: &str = "\x1b[33m";

pub const COLOR_WEEKDAY_HEADER: &str = COLOR_RED;
pub const COLOR_WEEKEND: &str = COLOR_YELLOW;
pub const COLOR_TODAY: &str = COLOR_GREEN;
