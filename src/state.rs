//! Shared application state for all routes. Handlers only see the store traits.

use crate::repository::{
    EventStore, MemoryEventStore, MemoryTeamMemberStore, PgEventStore, PgTeamMemberStore, TeamMemberStore,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventStore>,
    pub members: Arc<dyn TeamMemberStore>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        AppState {
            events: Arc::new(PgEventStore::new(pool.clone())),
            members: Arc::new(PgTeamMemberStore::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        AppState {
            events: Arc::new(MemoryEventStore::new()),
            members: Arc::new(MemoryTeamMemberStore::new()),
        }
    }
}
