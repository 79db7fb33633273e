//! Vertical placement of events inside a week-view day column.
//!
//! Positions are percentages of the column height. Only the time of day
//! participates; a multi-day event is positioned by its clock times in
//! whichever column the caller is rendering.

use chrono::{NaiveDateTime, Timelike};

/// Smallest rendered height, so instants and very short events stay visible.
pub const MIN_HEIGHT_PERCENT: f64 = 2.0;

/// A vertical rectangle within a day column, in percent of column height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPosition {
    /// Offset from the top of the column.
    pub top: f64,
    /// Height of the event block.
    pub height: f64,
}

/// Position an event in a full 00:00–24:00 day column.
pub fn position_in_day(start: NaiveDateTime, end: NaiveDateTime) -> DayPosition {
    position_in_day_window(start, end, 0.0, 24.0)
}

/// Position an event in a column showing only `day_start..day_end` (hours).
///
/// `top` is clamped to 0 for events starting before the window; the bottom
/// is NOT clipped against the window end, so events running past it overflow
/// and the caller caps the rendering.
pub fn position_in_day_window(
    start: NaiveDateTime,
    end: NaiveDateTime,
    day_start: f64,
    day_end: f64,
) -> DayPosition {
    let start_hour = hour_fraction(start);
    let end_hour = hour_fraction(end);
    let total_hours = day_end - day_start;

    let top = (start_hour - day_start) / total_hours * 100.0;
    let height = (end_hour - start_hour) / total_hours * 100.0;

    DayPosition {
        top: top.max(0.0),
        height: height.max(MIN_HEIGHT_PERCENT),
    }
}

/// Hours since midnight as a fraction (9:30 -> 9.5). Seconds are below the
/// grid's resolution and ignored.
fn hour_fraction(dt: NaiveDateTime) -> f64 {
    dt.hour() as f64 + dt.minute() as f64 / 60.0
}
