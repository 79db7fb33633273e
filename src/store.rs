//! In-memory event collection.
//!
//! The store is the single owner of all events. Operations are synchronous
//! and total: updating or deleting an unknown id is a silent no-op, matching
//! the widget's observed behavior when a stale id reaches a callback.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::event::{Event, EventDraft, EventPatch};
use crate::query;

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    /// A store seeded with existing events. Ids are taken as-is.
    pub fn with_events(events: Vec<Event>) -> Self {
        EventStore { events }
    }

    /// Assign a fresh id to `draft`, append it, and return the stored event.
    pub fn add(&mut self, draft: EventDraft) -> Event {
        let event = Event {
            id: generate_event_id(),
            title: draft.title,
            description: draft.description,
            start: draft.start,
            end: draft.end,
            color: draft.color,
            category: draft.category,
        };
        self.events.push(event.clone());
        event
    }

    /// Merge `patch` onto the event with the given id. No-op if absent.
    pub fn update(&mut self, id: &str, patch: &EventPatch) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            patch.apply(event);
        }
    }

    /// Remove the event with the given id. No-op if absent.
    pub fn delete(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events occupying `date`, sorted by start time.
    pub fn events_for_day(&self, date: NaiveDate) -> Vec<&Event> {
        query::sorted_by_start(&query::events_on_date(&self.events, date))
    }

    /// Events bucketed by their start date, in insertion order per bucket.
    pub fn events_by_start_date(&self) -> HashMap<NaiveDate, Vec<&Event>> {
        let mut buckets: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();
        for event in &self.events {
            buckets.entry(event.first_day()).or_default().push(event);
        }
        buckets
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn generate_event_id() -> String {
    format!("event-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventColor;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn draft(title: &str, d: u32, hour: u32) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: Some("notes".to_string()),
            start: day(d).and_hms_opt(hour, 0, 0).unwrap(),
            end: day(d).and_hms_opt(hour + 1, 0, 0).unwrap(),
            color: EventColor::Green,
            category: Some("Work".to_string()),
        }
    }

    #[test]
    fn add_assigns_unique_ids_and_appends() {
        let mut store = EventStore::new();
        let a = store.add(draft("a", 10, 9));
        let b = store.add(draft("b", 10, 11));

        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("event-"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.events()[0].id, a.id);
    }

    #[test]
    fn add_then_update_then_get_yields_the_merged_event() {
        let mut store = EventStore::new();
        let stored = store.add(draft("a", 10, 9));

        let patch = EventPatch {
            title: Some("X".to_string()),
            ..EventPatch::default()
        };
        store.update(&stored.id, &patch);

        let fetched = store.get(&stored.id).unwrap();
        assert_eq!(fetched.title, "X");
        // Unpatched fields are untouched.
        assert_eq!(fetched.color, EventColor::Green);
        assert_eq!(fetched.start, stored.start);
    }

    #[test]
    fn delete_then_get_yields_none() {
        let mut store = EventStore::new();
        let stored = store.add(draft("a", 10, 9));

        store.delete(&stored.id);
        assert!(store.get(&stored.id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn update_and_delete_on_unknown_id_are_no_ops() {
        let mut store = EventStore::new();
        let stored = store.add(draft("a", 10, 9));

        let patch = EventPatch {
            title: Some("X".to_string()),
            ..EventPatch::default()
        };
        store.update("event-missing", &patch);
        store.delete("event-missing");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&stored.id).unwrap().title, "a");
    }

    #[test]
    fn events_for_day_is_sorted_by_start() {
        let mut store = EventStore::new();
        store.add(draft("afternoon", 10, 14));
        store.add(draft("morning", 10, 8));
        store.add(draft("elsewhere", 11, 9));

        let day_events = store.events_for_day(day(10));
        let titles: Vec<_> = day_events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["morning", "afternoon"]);
    }

    #[test]
    fn events_by_start_date_buckets_per_day() {
        let mut store = EventStore::new();
        store.add(draft("a", 10, 9));
        store.add(draft("b", 10, 11));
        store.add(draft("c", 12, 9));

        let buckets = store.events_by_start_date();
        assert_eq!(buckets[&day(10)].len(), 2);
        assert_eq!(buckets[&day(12)].len(), 1);
        assert!(!buckets.contains_key(&day(11)));
    }
}
