//! Label formatting for grid headers, cells, and the event modal.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const WEEKDAY_NAMES_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Header label for the displayed period, e.g. "March 2025".
pub fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Cell label: the day of month without padding, e.g. "5".
pub fn day_number(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}

/// Column header label, e.g. "Wed".
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Modal header label, e.g. "Thursday, March 20, 2025".
pub fn full_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// 12-hour clock label, e.g. "9:05 AM".
pub fn clock_time(dt: NaiveDateTime) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// Value format for an HTML `datetime-local` input.
pub fn input_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// "HH:MM" labels for the week view's hour gutter, one per `interval_minutes`
/// step through the day. An interval of 0 falls back to hourly labels.
pub fn time_slots(interval_minutes: u32) -> Vec<String> {
    let step = if interval_minutes == 0 { 60 } else { interval_minutes };

    let mut slots = Vec::new();
    let mut minutes = 0;
    while minutes < 24 * 60 {
        let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap();
        slots.push(time.format("%H:%M").to_string());
        minutes += step;
    }
    slots
}
