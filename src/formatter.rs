//! Calendar formatting and display with ANSI color support.

use std::io::{self, Write};

use crate::types::{
    COLOR_RESET, COLOR_TODAY, COLOR_WEEKDAY_HEADER, COLOR_WEEKEND, FIRST_WEEKEND_COLUMN,
    MonthLayout, WEEKDAY_HEADER,
};

fn paint(color: &str, text: &str) -> String {
    format!("{}{}{}", color, text, COLOR_RESET)
}

/// Format the weekday header row, without the line terminator.
///
/// Mon-Fri use the weekday color and Sat-Sun the weekend color; every
/// name is followed by a tab.
pub fn format_weekday_headers() -> String {
    let mut result = String::new();
    for (i, name) in WEEKDAY_HEADER.iter().enumerate() {
        let color = if i < FIRST_WEEKEND_COLUMN {
            COLOR_WEEKDAY_HEADER
        } else {
            COLOR_WEEKEND
        };
        result.push_str(&paint(color, name));
        result.push('\t');
    }
    result
}

/// Format day cell with color highlighting.
///
/// Color priority: highlighted day > weekend > regular
fn format_day(day: u32, column: usize, highlight: Option<u32>) -> String {
    let day_str = day.to_string();
    if highlight == Some(day) {
        paint(COLOR_TODAY, &day_str)
    } else if column >= FIRST_WEEKEND_COLUMN {
        paint(COLOR_WEEKEND, &day_str)
    } else {
        day_str
    }
}

/// Format month as grid of lines, one per week, without line terminators.
///
/// Every cell, blank or not, is followed by a tab. The last line stops right
/// after the last day of the month.
pub fn format_month_grid(layout: &MonthLayout) -> Vec<String> {
    let mut lines = Vec::with_capacity(layout.row_count());

    for row in layout.rows() {
        let mut line = String::new();
        for (column, cell) in row.iter().enumerate() {
            if let Some(day) = cell {
                line.push_str(&format_day(*day, column, layout.highlight));
            }
            line.push('\t');
        }
        lines.push(line);
    }

    lines
}

/// Print the weekday header row.
pub fn print_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", format_weekday_headers())
}

/// Print the day grid of a month.
pub fn print_grid<W: Write>(out: &mut W, layout: &MonthLayout) -> io::Result<()> {
    for line in format_month_grid(layout) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print header, grid and a trailing empty line.
pub fn print_month<W: Write>(out: &mut W, layout: &MonthLayout) -> io::Result<()> {
    print_header(out)?;
    print_grid(out, layout)?;
    writeln!(out)?;
    out.flush()
}
