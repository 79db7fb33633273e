//! Validation for the event create/edit form.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Longest accepted title, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// The form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Title,
    StartDate,
    EndDate,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            FormField::Title => "title",
            FormField::StartDate => "startDate",
            FormField::EndDate => "endDate",
        };
        write!(f, "{}", name)
    }
}

/// Per-field error messages. Empty means the form is valid.
pub type FormErrors = BTreeMap<FormField, String>;

/// A candidate event as entered in the modal, dates unparsed-or-absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

/// Check required fields and temporal ordering.
///
/// Every rule is evaluated; a field holds at most one message. The ordering
/// rule only fires when both dates are present, and is strict: an event may
/// end exactly when it starts.
pub fn validate(form: &EventForm) -> FormErrors {
    let mut errors = FormErrors::new();

    if form.title.trim().is_empty() {
        errors.insert(FormField::Title, "Title is required".to_string());
    } else if form.title.chars().count() > TITLE_MAX_CHARS {
        errors.insert(
            FormField::Title,
            "Title must be 100 characters or less".to_string(),
        );
    }

    if form.start.is_none() {
        errors.insert(FormField::StartDate, "Start date is required".to_string());
    }

    if form.end.is_none() {
        errors.insert(FormField::EndDate, "End date is required".to_string());
    }

    if let (Some(start), Some(end)) = (form.start, form.end) {
        if end < start {
            errors.insert(
                FormField::EndDate,
                "End date must be after start date".to_string(),
            );
        }
    }

    errors
}
