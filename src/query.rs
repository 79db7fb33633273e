//! Matching events against grid days and weeks.

use chrono::NaiveDate;

use crate::event::Event;
use crate::grid;

/// Events whose day span includes `date`, in input order.
///
/// The day span is inclusive on both ends, so an event ending at 00:30 still
/// occupies its final day. Each event appears at most once.
pub fn events_on_date<'a>(events: &'a [Event], date: NaiveDate) -> Vec<&'a Event> {
    events.iter().filter(|e| e.occupies(date)).collect()
}

/// Events visible in the week containing `reference`: those starting in the
/// week, ending in the week, or spanning it entirely.
pub fn events_in_week<'a>(events: &'a [Event], reference: NaiveDate) -> Vec<&'a Event> {
    let week_start = grid::start_of_week(reference);
    let week_end = grid::end_of_week(reference);

    events
        .iter()
        .filter(|e| {
            let first = e.first_day();
            let last = e.last_day();

            (first >= week_start && first <= week_end)
                || (last >= week_start && last <= week_end)
                || (first <= week_start && last >= week_end)
        })
        .collect()
}

/// Stable sort by start time, preserving input order for ties.
pub fn sorted_by_start<'a>(events: &[&'a Event]) -> Vec<&'a Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.start);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventColor;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn event(id: &str, start: (u32, u32, u32, u32), end: (u32, u32, u32, u32)) -> Event {
        Event {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            start: date(start.0, start.1).and_hms_opt(start.2, start.3, 0).unwrap(),
            end: date(end.0, end.1).and_hms_opt(end.2, end.3, 0).unwrap(),
            color: EventColor::Blue,
            category: None,
        }
    }

    #[test]
    fn same_day_event_matches_only_its_day() {
        let events = vec![event("a", (3, 10, 9, 0), (3, 10, 10, 0))];

        assert_eq!(events_on_date(&events, date(3, 10)).len(), 1);
        assert!(events_on_date(&events, date(3, 9)).is_empty());
        assert!(events_on_date(&events, date(3, 11)).is_empty());
    }

    #[test]
    fn three_day_span_appears_on_all_three_days() {
        let events = vec![event("span", (3, 10, 18, 0), (3, 12, 9, 0))];

        for d in 10..=12 {
            let matched = events_on_date(&events, date(3, d));
            assert_eq!(matched.len(), 1, "missing on March {}", d);
        }
        assert!(events_on_date(&events, date(3, 13)).is_empty());
    }

    #[test]
    fn matching_preserves_input_order_and_is_idempotent() {
        let events = vec![
            event("later", (3, 10, 14, 0), (3, 10, 15, 0)),
            event("earlier", (3, 10, 9, 0), (3, 10, 10, 0)),
        ];

        let first = events_on_date(&events, date(3, 10));
        let second = events_on_date(&events, date(3, 10));
        let ids: Vec<_> = first.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["later", "earlier"]);
        assert_eq!(first, second);
    }

    #[test]
    fn sorted_by_start_orders_a_days_events() {
        let events = vec![
            event("later", (3, 10, 14, 0), (3, 10, 15, 0)),
            event("earlier", (3, 10, 9, 0), (3, 10, 10, 0)),
        ];

        let matched = events_on_date(&events, date(3, 10));
        let sorted = sorted_by_start(&matched);
        let ids: Vec<_> = sorted.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["earlier", "later"]);
    }

    #[test]
    fn week_filter_keeps_overlapping_events() {
        // Week of Sunday March 16 – Saturday March 22.
        let events = vec![
            event("inside", (3, 18, 9, 0), (3, 18, 10, 0)),
            event("ends-inside", (3, 14, 9, 0), (3, 17, 10, 0)),
            event("starts-inside", (3, 21, 9, 0), (3, 25, 10, 0)),
            event("spans", (3, 10, 9, 0), (3, 30, 10, 0)),
            event("before", (3, 10, 9, 0), (3, 12, 10, 0)),
            event("after", (3, 24, 9, 0), (3, 25, 10, 0)),
        ];

        let matched = events_in_week(&events, date(3, 19));
        let ids: Vec<_> = matched.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["inside", "ends-inside", "starts-inside", "spans"]);
    }
}
