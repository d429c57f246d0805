//! Calendar event handlers: create, list by month, update, delete.

use crate::error::{AppError, StoreError};
use crate::extractors::JsonBody;
use crate::service::{month_range, parse_id, CreateEventRequest, RequestValidator, UpdateEventRequest};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

const EVENT_NOT_FOUND: &str = "Event not found";

/// POST /event-calendar/create
pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_event = RequestValidator::create_event(body)?;

    let existing = state
        .events
        .find_by_title_and_date(&new_event.title, new_event.event_date)
        .await
        .map_err(|e| AppError::internal("Failed to add event", e))?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "Event with this title already exists on the same date".into(),
        ));
    }

    let event = state.events.create(new_event).await.map_err(|e| match e {
        StoreError::UniqueViolation => AppError::Conflict("Event already exists".into()),
        other => AppError::internal("Failed to add event", other),
    })?;
    tracing::info!(event_id = %event.id, "calendar event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /event-calendar/by-month?year=YYYY&month=M
pub async fn list_events_by_month(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = month_range(
        params.get("year").map(String::as_str),
        params.get("month").map(String::as_str),
    )?;
    let events = state
        .events
        .list_between(start, end)
        .await
        .map_err(|e| AppError::internal("Failed to fetch events", e))?;
    Ok(Json(events))
}

/// PATCH (or POST) /event-calendar/update/:eventId
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    JsonBody(body): JsonBody<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("eventId", &event_id)?;
    let patch = RequestValidator::update_event(body)?;
    let event = state.events.update(id, &patch).await.map_err(|e| match e {
        StoreError::NotFound => AppError::NotFound(EVENT_NOT_FOUND.into()),
        StoreError::UniqueViolation => AppError::Conflict(
            "Event with this title already exists on the same date".into(),
        ),
        other => AppError::internal("Failed to update event", other),
    })?;
    Ok(Json(event))
}

/// DELETE /event-calendar/delete/:eventId
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("eventId", &event_id)?;
    let existing = state
        .events
        .find_by_id(id)
        .await
        .map_err(|e| AppError::internal("Failed to delete event", e))?;
    if existing.is_none() {
        return Err(AppError::NotFound(EVENT_NOT_FOUND.into()));
    }
    state.events.delete(id).await.map_err(|e| match e {
        StoreError::NotFound => AppError::NotFound(EVENT_NOT_FOUND.into()),
        other => AppError::internal("Failed to delete event", other),
    })?;
    tracing::info!(event_id = %id, "calendar event deleted");
    Ok(StatusCode::NO_CONTENT)
}
