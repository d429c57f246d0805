//! Request validation: required fields, date parsing, and month windows.

use super::requests::{CreateEventRequest, CreateTeamMemberRequest, UpdateEventRequest, UpdateTeamMemberRequest};
use crate::error::AppError;
use crate::model::{EventPatch, NewCalendarEvent, NewTeamMember, TeamMemberPatch, DEFAULT_ROLE};
use chrono::{DateTime, Months, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

pub struct RequestValidator;

/// Absent and empty strings both count as missing.
fn present(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

fn non_empty(field: &str, v: Option<String>) -> Result<Option<String>, AppError> {
    match v {
        Some(s) if s.is_empty() => Err(AppError::BadRequest(format!("{} cannot be empty", field))),
        other => Ok(other),
    }
}

impl RequestValidator {
    pub fn create_event(req: CreateEventRequest) -> Result<NewCalendarEvent, AppError> {
        let (Some(title), Some(event_date), Some(event_type)) =
            (present(req.title), present(req.event_date), present(req.event_type))
        else {
            return Err(AppError::BadRequest(
                "title, eventDate, and eventType are required".into(),
            ));
        };
        Ok(NewCalendarEvent {
            title,
            description: req.description,
            event_date: parse_event_date(&event_date)?,
            marked: req.marked.unwrap_or(false),
            event_type,
        })
    }

    /// Only fields present in the body end up in the patch. An empty patch is rejected.
    pub fn update_event(req: UpdateEventRequest) -> Result<EventPatch, AppError> {
        let patch = EventPatch {
            title: non_empty("title", req.title)?,
            description: req.description,
            event_date: req.event_date.as_deref().map(parse_event_date).transpose()?,
            marked: req.marked,
            event_type: non_empty("eventType", req.event_type)?,
        };
        if patch.is_empty() {
            return Err(AppError::BadRequest("No fields provided to update".into()));
        }
        Ok(patch)
    }

    pub fn create_team_member(req: CreateTeamMemberRequest) -> Result<NewTeamMember, AppError> {
        let (Some(team_id), Some(user_id)) = (present(req.team_id), present(req.user_id)) else {
            return Err(AppError::BadRequest("teamId and userId are required".into()));
        };
        Ok(NewTeamMember {
            team_id: parse_id("teamId", &team_id)?,
            user_id,
            role: present(req.role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }

    pub fn update_team_member(req: UpdateTeamMemberRequest) -> Result<TeamMemberPatch, AppError> {
        let patch = TeamMemberPatch {
            team_id: req
                .team_id
                .as_deref()
                .map(|s| parse_id("teamId", s))
                .transpose()?,
            role: non_empty("role", req.role)?,
        };
        if patch.is_empty() {
            return Err(AppError::BadRequest("No fields provided to update".into()));
        }
        Ok(patch)
    }
}

pub fn parse_id(name: &str, s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::BadRequest(format!("invalid {}", name)))
}

/// RFC 3339 timestamp, or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_event_date(s: &str) -> Result<DateTime<Utc>, AppError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&d.and_time(chrono::NaiveTime::MIN)));
    }
    Err(AppError::BadRequest("eventDate must be an ISO 8601 date".into()))
}

/// `[first day of month, first day of next month)` in UTC.
pub fn month_range(year: Option<&str>, month: Option<&str>) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let (Some(year), Some(month)) = (
        year.filter(|s| !s.is_empty()),
        month.filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "year and month query parameters are required".into(),
        ));
    };
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("year must be a number".into()))?;
    let month: u32 = month
        .trim()
        .parse()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| AppError::BadRequest("month must be between 1 and 12".into()))?;
    let start = first_of_month(year, month)?;
    let end = start
        .checked_add_months(Months::new(1))
        .ok_or_else(|| AppError::BadRequest("year out of range".into()))?;
    Ok((start, end))
}

fn first_of_month(year: i32, month: u32) -> Result<DateTime<Utc>, AppError> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::BadRequest("year out of range".into()))
}
