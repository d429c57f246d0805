//! HTTP handlers for calendar events and team members.

pub mod event;
pub mod team_member;
pub use event::*;
pub use team_member::*;
