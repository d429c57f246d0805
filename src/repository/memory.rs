//! In-process stores with the same unique constraints as the PostgreSQL tables.

use super::{EventStore, TeamMemberStore};
use crate::error::StoreError;
use crate::model::{CalendarEvent, EventPatch, NewCalendarEvent, NewTeamMember, TeamMember, TeamMemberPatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryEventStore {
    rows: RwLock<Vec<CalendarEvent>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn title_date_taken(rows: &[CalendarEvent], title: &str, date: DateTime<Utc>, except: Option<Uuid>) -> bool {
    rows.iter()
        .any(|e| e.title == title && e.event_date == date && Some(e.id) != except)
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn ping(&self) -> Result<(), StoreError> {
        let _rows = self.rows.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CalendarEvent>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_title_and_date(
        &self,
        title: &str,
        event_date: DateTime<Utc>,
    ) -> Result<Option<CalendarEvent>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows
            .iter()
            .find(|e| e.title == title && e.event_date == event_date)
            .cloned())
    }

    async fn create(&self, event: NewCalendarEvent) -> Result<CalendarEvent, StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        if title_date_taken(&rows, &event.title, event.event_date, None) {
            return Err(StoreError::UniqueViolation);
        }
        let now = Utc::now();
        let row = CalendarEvent {
            id: Uuid::new_v4(),
            event: event.title.clone(),
            title: event.title,
            description: event.description,
            event_date: event.event_date,
            marked: event.marked,
            event_type: event.event_type,
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut out: Vec<CalendarEvent> = rows
            .iter()
            .filter(|e| e.event_date >= start && e.event_date < end)
            .cloned()
            .collect();
        out.sort_by_key(|e| e.event_date);
        Ok(out)
    }

    async fn update(&self, id: Uuid, patch: &EventPatch) -> Result<CalendarEvent, StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        let idx = rows
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        let mut updated = rows[idx].clone();
        patch.apply_to(&mut updated);
        if title_date_taken(&rows, &updated.title, updated.event_date, Some(id)) {
            return Err(StoreError::UniqueViolation);
        }
        if !patch.is_empty() {
            updated.updated_at = Utc::now();
        }
        rows[idx] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryTeamMemberStore {
    rows: RwLock<Vec<TeamMember>>,
}

impl MemoryTeamMemberStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn membership_taken(rows: &[TeamMember], team_id: Uuid, user_id: &str, except: Option<Uuid>) -> bool {
    rows.iter()
        .any(|m| m.team_id == team_id && m.user_id == user_id && Some(m.id) != except)
}

#[async_trait]
impl TeamMemberStore for MemoryTeamMemberStore {
    async fn create(&self, member: NewTeamMember) -> Result<TeamMember, StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        if membership_taken(&rows, member.team_id, &member.user_id, None) {
            return Err(StoreError::UniqueViolation);
        }
        let now = Utc::now();
        let row = TeamMember {
            id: Uuid::new_v4(),
            team_id: member.team_id,
            user_id: member.user_id,
            role: member.role,
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn remove(&self, id: Uuid) -> Result<Option<TeamMember>, StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        let idx = rows.iter().position(|m| m.id == id);
        Ok(idx.map(|idx| rows.remove(idx)))
    }

    async fn update(&self, id: Uuid, patch: &TeamMemberPatch) -> Result<TeamMember, StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        let idx = rows
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;
        let mut updated = rows[idx].clone();
        patch.apply_to(&mut updated);
        if membership_taken(&rows, updated.team_id, &updated.user_id, Some(id)) {
            return Err(StoreError::UniqueViolation);
        }
        if !patch.is_empty() {
            updated.updated_at = Utc::now();
        }
        rows[idx] = updated.clone();
        Ok(updated)
    }

    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<TeamMember>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut out: Vec<TeamMember> = rows.iter().filter(|m| m.team_id == team_id).cloned().collect();
        out.sort_by_key(|m| m.created_at);
        Ok(out)
    }
}
