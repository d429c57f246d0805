//! Persisted records and the write-side shapes the stores accept.

mod event;
mod team_member;

pub use event::{CalendarEvent, EventPatch, NewCalendarEvent};
pub use team_member::{NewTeamMember, TeamMember, TeamMemberPatch, DEFAULT_ROLE};
