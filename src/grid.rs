//! Date-grid generation for the month and week views.
//!
//! The grid is always aligned to Sunday-started weeks. Month grids include
//! the leading and trailing days needed to fill complete weeks, so their
//! length is always a multiple of 7.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::view::ViewMode;

/// Days shown per row of the grid.
pub const DAYS_PER_WEEK: u64 = 7;

/// The ordered sequence of dates the given view displays around `reference`.
pub fn visible_days(reference: NaiveDate, view: ViewMode) -> Vec<NaiveDate> {
    match view {
        ViewMode::Month => month_days(reference),
        ViewMode::Week => week_days(reference),
    }
}

/// Every date shown in the month grid containing `reference`: from the
/// Sunday on/before the 1st through the Saturday on/after the last day of
/// the month.
pub fn month_days(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = reference.with_day(1).unwrap();
    let last = end_of_month(reference);

    let start = start_of_week(first);
    let end = end_of_week(last);

    days_between(start, end)
}

/// The 7 dates of the Sunday-started week containing `reference`.
pub fn week_days(reference: NaiveDate) -> Vec<NaiveDate> {
    let start = start_of_week(reference);
    days_between(start, end_of_week(reference))
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday() as u64;
    date - Days::new(back)
}

/// The Saturday on or after `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Days::new(DAYS_PER_WEEK - 1)
}

/// The last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap();
    first + Months::new(1) - Days::new(1)
}

/// One calendar month later, with the day-of-month clamped (Jan 31 -> Feb 28).
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date + Months::new(1)
}

/// One calendar month earlier, with the day-of-month clamped.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    date - Months::new(1)
}

pub fn next_week(date: NaiveDate) -> NaiveDate {
    date + Days::new(DAYS_PER_WEEK)
}

pub fn previous_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(DAYS_PER_WEEK)
}

fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}
