//! Persistence seam. Handlers talk to these traits; PostgreSQL and in-memory backends implement them.

mod memory;
mod postgres;
mod schema;

pub use memory::{MemoryEventStore, MemoryTeamMemberStore};
pub use postgres::{PgEventStore, PgTeamMemberStore};
pub use schema::{ensure_database_exists, ensure_tables};

use crate::error::StoreError;
use crate::model::{CalendarEvent, EventPatch, NewCalendarEvent, NewTeamMember, TeamMember, TeamMemberPatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Round-trip to the backend. Used by readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CalendarEvent>, StoreError>;

    async fn find_by_title_and_date(
        &self,
        title: &str,
        event_date: DateTime<Utc>,
    ) -> Result<Option<CalendarEvent>, StoreError>;

    /// Fails with `UniqueViolation` when (title, event_date) is taken.
    async fn create(&self, event: NewCalendarEvent) -> Result<CalendarEvent, StoreError>;

    /// Events with `start <= event_date < end`, oldest first.
    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, StoreError>;

    /// Fails with `NotFound` when no row has `id`.
    async fn update(&self, id: Uuid, patch: &EventPatch) -> Result<CalendarEvent, StoreError>;

    /// Fails with `NotFound` when no row has `id`.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait TeamMemberStore: Send + Sync {
    /// Fails with `UniqueViolation` when the user is already on the team.
    async fn create(&self, member: NewTeamMember) -> Result<TeamMember, StoreError>;

    /// Deletes and returns the removed row, `None` if there was none.
    async fn remove(&self, id: Uuid) -> Result<Option<TeamMember>, StoreError>;

    /// Fails with `NotFound` when no row has `id`.
    async fn update(&self, id: Uuid, patch: &TeamMemberPatch) -> Result<TeamMember, StoreError>;

    /// Members of one team, oldest membership first.
    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<TeamMember>, StoreError>;
}
