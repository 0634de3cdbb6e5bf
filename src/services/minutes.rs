//! Minutes (compte-rendu) aggregation for a single meeting.
//!
//! One call walks `idle → fetching-details → fetching-reports → ready`. When
//! the detail request fails the aggregation continues in degraded mode with
//! whatever the listed meeting already carries; only a missing meeting id or
//! a failing report request ends in `failed`.

use std::fmt;

use crate::domain::meeting::{AgendaItem, AgendaReports, Attendance, Guest, Meeting};
use crate::domain::types::{ClubId, MeetingId};
use crate::dto::minutes::{
    AttendanceEntry, GuestEntry, MeetingSummary, MinutesReport, MinutesStatistics,
};
use crate::repository::{MeetingReader, ReportReader};
use crate::services::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    FetchingDetails,
    Degraded,
    FetchingReports,
    Ready,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::FetchingDetails => "fetching-details",
            Phase::Degraded => "degraded",
            Phase::FetchingReports => "fetching-reports",
            Phase::Ready => "ready",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

struct Progress<'a> {
    meeting: &'a str,
    phase: Phase,
}

impl<'a> Progress<'a> {
    fn new(meeting: &'a str) -> Self {
        Self {
            meeting,
            phase: Phase::Idle,
        }
    }

    fn advance(&mut self, next: Phase) {
        log::debug!("Minutes of meeting {}: {} -> {next}", self.meeting, self.phase);
        self.phase = next;
    }

    fn fail(&mut self, err: ServiceError) -> ServiceError {
        log::error!("Failed to build minutes of meeting {}: {err}", self.meeting);
        self.advance(Phase::Failed);
        err
    }
}

/// Candidate name fields of an attendance record, in resolution order.
fn attendance_name_candidates(attendance: &Attendance) -> [Option<&str>; 3] {
    [
        attendance.nom_membre.as_deref(),
        attendance.nom_complet_membre.as_deref(),
        attendance.nom_complet.as_deref(),
    ]
}

/// Resolves the display name of an attendance record.
///
/// Takes the first non-blank of `nomMembre`, `nomCompletMembre` and
/// `nomComplet`, trimmed.
pub fn resolve_attendance_name(attendance: &Attendance) -> Option<String> {
    attendance_name_candidates(attendance)
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

fn normalize_attendance(presences: &[Attendance]) -> Vec<AttendanceEntry> {
    presences
        .iter()
        .map(|attendance| AttendanceEntry {
            membre_id: attendance.membre_id.clone(),
            nom_complet: resolve_attendance_name(attendance),
        })
        .collect()
}

fn normalize_guests(invites: &[Guest]) -> Vec<GuestEntry> {
    invites
        .iter()
        .map(|guest| GuestEntry {
            id: guest.id.clone(),
            nom: guest.nom.clone(),
            prenom: guest.prenom.clone(),
        })
        .collect()
}

/// Meeting data the report is built from after the detail request.
struct WorkingSet {
    presences: Vec<Attendance>,
    invites: Vec<Guest>,
    ordres_du_jour: Vec<AgendaItem>,
    degraded: bool,
}

async fn fetch_working_set<R>(
    repo: &R,
    club_id: &ClubId,
    meeting_id: &MeetingId,
    meeting: &Meeting,
    progress: &mut Progress<'_>,
) -> WorkingSet
where
    R: MeetingReader + ?Sized,
{
    progress.advance(Phase::FetchingDetails);

    let (details, degraded) = match repo.get_meeting_details(club_id, meeting_id).await {
        Ok(details) => {
            log::debug!(
                "Loaded details of meeting {meeting_id}: {} agenda items",
                details.ordres_du_jour.as_ref().map_or(0, Vec::len)
            );
            (details, false)
        }
        Err(err) => {
            log::warn!(
                "Failed to load details of meeting {meeting_id}, using listed data: {err}"
            );
            progress.advance(Phase::Degraded);
            (Default::default(), true)
        }
    };

    WorkingSet {
        presences: details
            .presences
            .or_else(|| meeting.presences.clone())
            .unwrap_or_default(),
        invites: details
            .invites
            .or_else(|| meeting.invites.clone())
            .unwrap_or_default(),
        ordres_du_jour: details
            .ordres_du_jour
            .or_else(|| meeting.ordres_du_jour.clone())
            .unwrap_or_default(),
        degraded,
    }
}

/// Builds the minutes of `meeting`.
///
/// Agenda items keep the upstream order and their `has_content` flag is
/// recomputed from the fetched content. Without agenda items the report
/// request is skipped entirely.
pub async fn load_minutes<R>(
    repo: &R,
    club_id: &ClubId,
    meeting: &Meeting,
) -> ServiceResult<MinutesReport>
where
    R: MeetingReader + ReportReader + ?Sized,
{
    let mut progress = Progress::new(meeting.id.as_ref().map_or("<none>", |id| id.as_str()));

    let Some(meeting_id) = meeting.id.as_ref() else {
        return Err(progress.fail(ServiceError::DataInconsistency(
            "meeting has no id".to_string(),
        )));
    };

    let working = fetch_working_set(repo, club_id, meeting_id, meeting, &mut progress).await;

    progress.advance(Phase::FetchingReports);

    let reports = if working.ordres_du_jour.is_empty() {
        log::info!("Meeting {meeting_id} has no agenda items, skipping reports");
        AgendaReports::default()
    } else {
        repo.get_all_reports_for_meeting(club_id, meeting_id, &working.ordres_du_jour)
            .await
            .map_err(|err| progress.fail(ServiceError::from(err)))?
    };

    let ordres_du_jour: Vec<AgendaItem> = reports
        .ordres_avec_contenu
        .into_iter()
        .map(AgendaItem::normalized)
        .collect();

    let statistiques = MinutesStatistics::compute(
        working.presences.len(),
        working.invites.len(),
        &ordres_du_jour,
    );

    let report = MinutesReport {
        reunion: MeetingSummary {
            id: meeting_id.clone(),
            date: meeting.date.clone(),
            heure: meeting.heure.clone(),
            type_reunion: meeting.type_reunion_libelle.clone(),
            lieu: meeting.lieu.clone(),
        },
        presences: normalize_attendance(&working.presences),
        invites: normalize_guests(&working.invites),
        ordres_du_jour,
        divers: reports.divers_existant,
        statistiques,
        degraded: working.degraded,
    };

    progress.advance(Phase::Ready);
    log::info!(
        "Minutes of meeting {meeting_id} ready: {}/{} agenda items with content",
        report.statistiques.ordres_avec_contenu,
        report.statistiques.total_ordres_du_jour
    );

    Ok(report)
}
