use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One row of `event_calendar`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub marked: bool,
    pub event_type: String,
    /// Display label. Set from the title at creation and not touched afterwards.
    pub event: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCalendarEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub marked: bool,
    pub event_type: String,
}

/// Partial update. `None` leaves the column alone; `description: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub event_date: Option<DateTime<Utc>>,
    pub marked: Option<bool>,
    pub event_type: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.event_date.is_none()
            && self.marked.is_none()
            && self.event_type.is_none()
    }

    /// Apply to an in-memory record.
    pub fn apply_to(&self, event: &mut CalendarEvent) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(date) = self.event_date {
            event.event_date = date;
        }
        if let Some(marked) = self.marked {
            event.marked = marked;
        }
        if let Some(event_type) = &self.event_type {
            event.event_type = event_type.clone();
        }
    }
}
