//! Router assembly.

mod common;
mod event;
mod team_member;

pub use common::common_routes;
pub use event::event_calendar_routes;
pub use team_member::team_member_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Everything under `/api/v1`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/event-calendar", event_calendar_routes(state.clone()))
        .nest("/team-member", team_member_routes(state))
}

/// Full application: common routes at the root, API under `/api/v1`, body limit and request tracing.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", api_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
