//! Calendar event and team member REST backend.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;

pub use error::{AppError, ConfigError, StoreError};
pub use repository::{ensure_database_exists, ensure_tables, EventStore, TeamMemberStore};
pub use routes::{api_routes, app, common_routes};
pub use settings::{Settings, StorageBackend};
pub use state::AppState;
