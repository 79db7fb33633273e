//! Canned demo events for examples and component galleries.

use chrono::{Datelike, NaiveDate};

use crate::event::{Event, EventColor, EventDraft};
use crate::store::EventStore;

/// Six demo events spread over the month containing `base`.
///
/// Shapes are deterministic; only the ids are freshly generated. Useful for
/// demos and doc examples that need a populated calendar.
pub fn sample_events(base: NaiveDate) -> Vec<Event> {
    let mut store = EventStore::new();
    for (title, description, day, start, end, color, category) in [
        (
            "Team Standup",
            Some("Daily team sync meeting"),
            5,
            (9, 0),
            (9, 30),
            EventColor::Blue,
            Some("Meeting"),
        ),
        (
            "Project Review",
            Some("Quarterly project review with stakeholders"),
            10,
            (14, 0),
            (16, 0),
            EventColor::Purple,
            Some("Work"),
        ),
        (
            "Birthday Party",
            Some("Sarah's birthday celebration"),
            15,
            (18, 0),
            (21, 0),
            EventColor::Pink,
            Some("Birthday"),
        ),
        (
            "Gym Session",
            Some("Weekly workout"),
            8,
            (7, 0),
            (8, 30),
            EventColor::Green,
            Some("Personal"),
        ),
        (
            "Client Call",
            Some("Discussion about new features"),
            12,
            (11, 0),
            (12, 0),
            EventColor::Orange,
            Some("Work"),
        ),
        (
            "Lunch with Team",
            None,
            18,
            (12, 30),
            (13, 30),
            EventColor::Teal,
            Some("Personal"),
        ),
    ] {
        let date = base.with_day(day).unwrap();
        store.add(EventDraft {
            title: title.to_string(),
            description: description.map(String::from),
            start: date.and_hms_opt(start.0, start.1, 0).unwrap(),
            end: date.and_hms_opt(end.0, end.1, 0).unwrap(),
            color,
            category: category.map(String::from),
        });
    }
    store.events().to_vec()
}
