//! Minutes (compte-rendu) of a single meeting, ready for display.

use serde::Serialize;

use crate::domain::meeting::AgendaItem;
use crate::domain::types::{GuestId, MeetingId, MemberId};

/// Summary fields of the meeting the minutes belong to.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    pub id: MeetingId,
    pub date: String,
    pub heure: String,
    pub type_reunion: String,
    pub lieu: String,
}

/// Attendance line with its resolved display name.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub membre_id: Option<MemberId>,
    pub nom_complet: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GuestEntry {
    pub id: Option<GuestId>,
    pub nom: String,
    pub prenom: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MinutesStatistics {
    pub total_presences: usize,
    pub total_invites: usize,
    pub total_ordres_du_jour: usize,
    /// Number of agenda items whose `has_content` is set.
    pub ordres_avec_contenu: usize,
}

impl MinutesStatistics {
    pub fn compute(presences: usize, invites: usize, ordres_du_jour: &[AgendaItem]) -> Self {
        Self {
            total_presences: presences,
            total_invites: invites,
            total_ordres_du_jour: ordres_du_jour.len(),
            ordres_avec_contenu: ordres_du_jour.iter().filter(|o| o.has_content).count(),
        }
    }
}

/// Aggregated minutes of one meeting.
///
/// Built fresh for every detail view; `degraded` is set when the meeting
/// details could not be fetched and the listed data was used instead.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MinutesReport {
    pub reunion: MeetingSummary,
    pub presences: Vec<AttendanceEntry>,
    pub invites: Vec<GuestEntry>,
    pub ordres_du_jour: Vec<AgendaItem>,
    pub divers: String,
    pub statistiques: MinutesStatistics,
    pub degraded: bool,
}

impl MinutesReport {
    pub fn has_other_business(&self) -> bool {
        !self.divers.trim().is_empty()
    }
}
