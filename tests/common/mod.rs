#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use osc_server::model::{CalendarEvent, EventPatch, NewCalendarEvent};
use osc_server::repository::MemoryTeamMemberStore;
use osc_server::{app, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_app() -> Router {
    app(AppState::in_memory(), 64 * 1024)
}

/// Send one request through the router. Empty response bodies come back as `Value::Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Event store standing in for a database that is down, except that inserts
/// lose the unique-key race against a concurrent writer.
pub struct UnavailableEventStore;

#[async_trait::async_trait]
impl osc_server::EventStore for UnavailableEventStore {
    async fn ping(&self) -> Result<(), osc_server::StoreError> {
        Err(osc_server::StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: uuid::Uuid) -> Result<Option<CalendarEvent>, osc_server::StoreError> {
        Ok(None)
    }

    async fn find_by_title_and_date(
        &self,
        _title: &str,
        _event_date: DateTime<Utc>,
    ) -> Result<Option<CalendarEvent>, osc_server::StoreError> {
        Ok(None)
    }

    async fn create(&self, _event: NewCalendarEvent) -> Result<CalendarEvent, osc_server::StoreError> {
        Err(osc_server::StoreError::UniqueViolation)
    }

    async fn list_between(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, osc_server::StoreError> {
        Err(osc_server::StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: uuid::Uuid, _patch: &EventPatch) -> Result<CalendarEvent, osc_server::StoreError> {
        Err(osc_server::StoreError::NotFound)
    }

    async fn delete(&self, _id: uuid::Uuid) -> Result<(), osc_server::StoreError> {
        Err(osc_server::StoreError::NotFound)
    }
}

pub fn unavailable_app() -> Router {
    let state = AppState {
        events: Arc::new(UnavailableEventStore),
        members: Arc::new(MemoryTeamMemberStore::new()),
    };
    app(state, 64 * 1024)
}
