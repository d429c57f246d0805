//! Request shapes and the validation that turns them into store inputs.

mod requests;
mod validation;
pub use requests::{CreateEventRequest, CreateTeamMemberRequest, UpdateEventRequest, UpdateTeamMemberRequest};
pub use validation::{month_range, parse_event_date, parse_id, RequestValidator};
