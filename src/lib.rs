//! Core logic for a month/week calendar widget.
//!
//! This crate holds everything about the widget that is not rendering:
//! - `grid` computes the ordered day sequence a view displays
//! - `query` matches events against days and weeks
//! - `layout` turns event times into vertical positions in a day column
//! - `store` owns the event collection (add/update/delete/lookup)
//! - `form` validates the create/edit modal's input
//! - `view` tracks the displayed period, view mode, and selection
//!
//! The presentation layer consumes these through plain function calls; there
//! is no I/O, no clock dependency outside `view`'s today helpers, and no
//! timezone handling (all times are wall-clock naive).

pub mod event;
pub mod form;
pub mod format;
pub mod grid;
pub mod layout;
pub mod query;
pub mod samples;
pub mod store;
pub mod view;

// Re-export the event types at the crate root for convenience
pub use event::*;
pub use view::{CalendarView, ViewMode};
