//! sqlx-backed stores.

use super::{EventStore, TeamMemberStore};
use crate::error::StoreError;
use crate::model::{CalendarEvent, EventPatch, NewCalendarEvent, NewTeamMember, TeamMember, TeamMemberPatch};
use crate::sql::{QueryBuf, UpdateBuilder};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const EVENT_TABLE: &str = "event_calendar";
const EVENT_COLUMNS: &str =
    "id, title, description, event_date, marked, event_type, event, created_at, updated_at";

const MEMBER_TABLE: &str = "team_members";
const MEMBER_COLUMNS: &str = "id, team_id, user_id, role, created_at, updated_at";

/// Run a dynamically built statement expected to return at most one row.
async fn fetch_optional_built<T>(pool: &PgPool, q: QueryBuf) -> Result<Option<T>, StoreError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, T>(&q.sql);
    for p in q.params {
        query = query.bind(p);
    }
    Ok(query.fetch_optional(pool).await?)
}

#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        PgEventStore { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CalendarEvent>, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", EVENT_COLUMNS, EVENT_TABLE);
        let row = sqlx::query_as::<_, CalendarEvent>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_title_and_date(
        &self,
        title: &str,
        event_date: DateTime<Utc>,
    ) -> Result<Option<CalendarEvent>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE title = $1 AND event_date = $2 LIMIT 1",
            EVENT_COLUMNS, EVENT_TABLE
        );
        let row = sqlx::query_as::<_, CalendarEvent>(&sql)
            .bind(title)
            .bind(event_date)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, event: NewCalendarEvent) -> Result<CalendarEvent, StoreError> {
        let sql = format!(
            "INSERT INTO {} (id, title, description, event_date, marked, event_type, event) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            EVENT_TABLE, EVENT_COLUMNS
        );
        let row = sqlx::query_as::<_, CalendarEvent>(&sql)
            .bind(Uuid::new_v4())
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.event_date)
            .bind(event.marked)
            .bind(&event.event_type)
            .bind(&event.title)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE event_date >= $1 AND event_date < $2 ORDER BY event_date ASC",
            EVENT_COLUMNS, EVENT_TABLE
        );
        let rows = sqlx::query_as::<_, CalendarEvent>(&sql)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: Uuid, patch: &EventPatch) -> Result<CalendarEvent, StoreError> {
        let mut b = UpdateBuilder::new(EVENT_TABLE);
        b.set_opt("title", patch.title.clone())
            .set_opt("description", patch.description.clone())
            .set_opt("event_date", patch.event_date)
            .set_opt("marked", patch.marked)
            .set_opt("event_type", patch.event_type.clone())
            .touch("updated_at");
        fetch_optional_built(&self.pool, b.build("id", id, EVENT_COLUMNS))
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", EVENT_TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgTeamMemberStore {
    pool: PgPool,
}

impl PgTeamMemberStore {
    pub fn new(pool: PgPool) -> Self {
        PgTeamMemberStore { pool }
    }
}

#[async_trait]
impl TeamMemberStore for PgTeamMemberStore {
    async fn create(&self, member: NewTeamMember) -> Result<TeamMember, StoreError> {
        let sql = format!(
            "INSERT INTO {} (id, team_id, user_id, role) VALUES ($1, $2, $3, $4) RETURNING {}",
            MEMBER_TABLE, MEMBER_COLUMNS
        );
        let row = sqlx::query_as::<_, TeamMember>(&sql)
            .bind(Uuid::new_v4())
            .bind(member.team_id)
            .bind(&member.user_id)
            .bind(&member.role)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn remove(&self, id: Uuid) -> Result<Option<TeamMember>, StoreError> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING {}",
            MEMBER_TABLE, MEMBER_COLUMNS
        );
        let row = sqlx::query_as::<_, TeamMember>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: &TeamMemberPatch) -> Result<TeamMember, StoreError> {
        let mut b = UpdateBuilder::new(MEMBER_TABLE);
        b.set_opt("team_id", patch.team_id)
            .set_opt("role", patch.role.clone())
            .touch("updated_at");
        fetch_optional_built(&self.pool, b.build("id", id, MEMBER_COLUMNS))
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<TeamMember>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE team_id = $1 ORDER BY created_at ASC",
            MEMBER_COLUMNS, MEMBER_TABLE
        );
        let rows = sqlx::query_as::<_, TeamMember>(&sql)
            .bind(team_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
