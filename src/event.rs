//! Calendar event types.
//!
//! `Event` is the unit everything else operates on: the grid and matcher
//! read it, the store owns it, the form produces drafts of it. An event's
//! day span is the inclusive date range from `start.date()` to `end.date()`,
//! so multi-day events show up in every day cell they touch.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A titled time interval displayed on the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, assigned by the store at add time.
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: EventColor,
    pub category: Option<String>,
}

impl Event {
    /// First calendar day this event occupies.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Last calendar day this event occupies (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    /// Whether `date` falls within this event's inclusive day span.
    pub fn occupies(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }
}

/// An event as submitted by the create/edit form, before the store has
/// assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: EventColor,
    pub category: Option<String>,
}

impl EventDraft {
    /// The modal's prefill for a clicked day: an untitled blue event from
    /// 09:00 to 10:00.
    pub fn on(date: NaiveDate) -> Self {
        EventDraft {
            title: String::new(),
            description: None,
            start: date.and_hms_opt(9, 0, 0).unwrap(),
            end: date.and_hms_opt(10, 0, 0).unwrap(),
            color: EventColor::default(),
            category: None,
        }
    }
}

/// A partial update to an existing event.
///
/// Each field is independently optional, enumerating exactly which fields a
/// caller may mutate. For the clearable fields, the outer `Option` is
/// "touch this field at all" and the inner one is the new value, so
/// `Some(None)` clears the field and `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub color: Option<EventColor>,
    pub category: Option<Option<String>>,
}

impl EventPatch {
    /// Merge the populated fields onto `event`.
    pub fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(color) = self.color {
            event.color = color;
        }
        if let Some(category) = &self.category {
            event.category = category.clone();
        }
    }
}

/// The eight colors an event can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Teal,
    Red,
    Yellow,
}

impl EventColor {
    /// All colors in picker order.
    pub const ALL: [EventColor; 8] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Purple,
        EventColor::Orange,
        EventColor::Pink,
        EventColor::Teal,
        EventColor::Red,
        EventColor::Yellow,
    ];

    /// Human-readable label for color pickers.
    pub fn label(&self) -> &'static str {
        match self {
            EventColor::Blue => "Blue",
            EventColor::Green => "Green",
            EventColor::Purple => "Purple",
            EventColor::Orange => "Orange",
            EventColor::Pink => "Pink",
            EventColor::Teal => "Teal",
            EventColor::Red => "Red",
            EventColor::Yellow => "Yellow",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Green => "green",
            EventColor::Purple => "purple",
            EventColor::Orange => "orange",
            EventColor::Pink => "pink",
            EventColor::Teal => "teal",
            EventColor::Red => "red",
            EventColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unrecognized color name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown event color: {0}")]
pub struct ParseColorError(String);

impl FromStr for EventColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(EventColor::Blue),
            "green" => Ok(EventColor::Green),
            "purple" => Ok(EventColor::Purple),
            "orange" => Ok(EventColor::Orange),
            "pink" => Ok(EventColor::Pink),
            "teal" => Ok(EventColor::Teal),
            "red" => Ok(EventColor::Red),
            "yellow" => Ok(EventColor::Yellow),
            other => Err(ParseColorError(other.to_string())),
        }
    }
}

/// Suggested categories offered by the event form.
pub const CATEGORIES: [&str; 6] = [
    "Work",
    "Personal",
    "Meeting",
    "Birthday",
    "Holiday",
    "Other",
];
