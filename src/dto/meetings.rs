//! DTOs used by the meeting list view.

use std::cmp::Ordering;
use std::fmt::{Display, Write};

use serde::Serialize;

use crate::domain::meeting::Meeting;
use crate::domain::types::MeetingId;
use crate::models::config::ClientConfig;

/// One card of the meeting list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingListItem {
    pub id: Option<MeetingId>,
    /// Date formatted with the configured date format, or the raw value when unparseable.
    pub date: String,
    pub heure: String,
    /// Date and time formatted with the configured date-time format; `None`
    /// when either part is missing or unparseable.
    pub starts_at: Option<String>,
    pub type_reunion: String,
    pub lieu: String,
    pub total_presences: usize,
    pub total_invites: usize,
}

/// Renders a `chrono` delayed format, returning `None` when its pattern is invalid.
fn render(formatted: impl Display) -> Option<String> {
    let mut rendered = String::new();
    write!(rendered, "{formatted}").ok()?;
    Some(rendered)
}

impl MeetingListItem {
    fn from_meeting(meeting: &Meeting, config: &ClientConfig) -> Self {
        let date = meeting
            .parsed_date()
            .and_then(|date| render(date.format(&config.date_format)))
            .unwrap_or_else(|| meeting.date.clone());
        let starts_at = meeting
            .starts_at()
            .and_then(|start| render(start.format(&config.datetime_format)));

        Self {
            id: meeting.id.clone(),
            date,
            heure: meeting.heure.clone(),
            starts_at,
            type_reunion: meeting.type_reunion_libelle.clone(),
            lieu: meeting.lieu.clone(),
            total_presences: meeting.attendance_count(),
            total_invites: meeting.guest_count(),
        }
    }
}

/// Orders meetings by ascending date; unparseable dates go last.
fn by_date(a: &Meeting, b: &Meeting) -> Ordering {
    match (a.parsed_date(), b.parsed_date()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Builds the meeting list cards sorted by ascending date.
///
/// The sort is stable: meetings on the same day keep their upstream order.
pub fn meeting_list(meetings: &[Meeting], config: &ClientConfig) -> Vec<MeetingListItem> {
    let mut sorted: Vec<&Meeting> = meetings.iter().collect();
    sorted.sort_by(|a, b| by_date(a, b));
    sorted
        .into_iter()
        .map(|meeting| MeetingListItem::from_meeting(meeting, config))
        .collect()
}
