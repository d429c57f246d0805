//! Calendar event routes.

use crate::handlers::{create_event, delete_event, list_events_by_month, update_event};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

/// Update answers both PATCH and POST on the same path.
pub fn event_calendar_routes(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_event))
        .route("/by-month", get(list_events_by_month))
        .route("/update/:event_id", patch(update_event).post(update_event))
        .route("/delete/:event_id", delete(delete_event))
        .with_state(state)
}
