use crate::handlers::{create_team_member, get_team_members_by_team, remove_team_member, update_team_member};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn team_member_routes(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_team_member))
        .route("/remove/by-member-id/:member_id", post(remove_team_member))
        .route("/update/by-member-id/:member_id", post(update_team_member))
        .route("/by-team-id/:team_id", get(get_team_members_by_team))
        .with_state(state)
}
