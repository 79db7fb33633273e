//! Calendar view state and navigation.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::grid;

/// Granularity of the displayed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

/// The displayed period and selection of a calendar widget.
///
/// `current_date` anchors the grid: the month view shows the month
/// containing it, the week view the week containing it. Navigation steps it
/// by one month or one week depending on the active view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarView {
    pub current_date: NaiveDate,
    pub view: ViewMode,
    pub selected_date: Option<NaiveDate>,
}

impl CalendarView {
    /// A month view anchored at `initial`, with nothing selected.
    pub fn new(initial: NaiveDate) -> Self {
        CalendarView {
            current_date: initial,
            view: ViewMode::Month,
            selected_date: None,
        }
    }

    /// A month view anchored at today's local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// The dates the active view displays, in grid order.
    pub fn days(&self) -> Vec<NaiveDate> {
        grid::visible_days(self.current_date, self.view)
    }

    /// Step forward by one month or one week, per the active view.
    pub fn next(&mut self) {
        match self.view {
            ViewMode::Month => self.next_month(),
            ViewMode::Week => self.next_week(),
        }
    }

    /// Step backward by one month or one week, per the active view.
    pub fn previous(&mut self) {
        match self.view {
            ViewMode::Month => self.previous_month(),
            ViewMode::Week => self.previous_week(),
        }
    }

    pub fn next_month(&mut self) {
        self.current_date = grid::next_month(self.current_date);
    }

    pub fn previous_month(&mut self) {
        self.current_date = grid::previous_month(self.current_date);
    }

    pub fn next_week(&mut self) {
        self.current_date = grid::next_week(self.current_date);
    }

    pub fn previous_week(&mut self) {
        self.current_date = grid::previous_week(self.current_date);
    }

    /// Jump back to today, selecting it as well.
    pub fn go_to_today(&mut self) {
        let today = Local::now().date_naive();
        self.current_date = today;
        self.selected_date = Some(today);
    }

    /// Re-anchor the grid on `date` without changing the selection.
    pub fn go_to(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    /// Select a date, or clear the selection with `None`.
    pub fn select(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Whether `date` is in the anchored month. Month-view cells outside the
    /// current month render dimmed.
    pub fn is_current_month(&self, date: NaiveDate) -> bool {
        date.year() == self.current_date.year() && date.month() == self.current_date.month()
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected_date == Some(date)
    }

    /// Whether `date` is today's local date.
    pub fn is_today(date: NaiveDate) -> bool {
        date == Local::now().date_naive()
    }
}
