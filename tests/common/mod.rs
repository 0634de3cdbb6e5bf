#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rotary_club::domain::meeting::{AgendaItem, AgendaReports, Meeting, MeetingDetails};
use rotary_club::domain::member::{CommissionAssignment, FunctionAssignment, Member};
use rotary_club::domain::types::{ClubId, MeetingId};
use rotary_club::repository::errors::{RepositoryError, RepositoryResult};
use rotary_club::repository::{MeetingReader, MemberReader, ReportReader};

/// In-memory stand-in for the club API.
///
/// `None` in a field makes the matching call fail with a network error.
#[derive(Default)]
pub struct FakeClubApi {
    pub members: Option<Vec<Member>>,
    pub functions: Option<Vec<FunctionAssignment>>,
    pub commissions: Option<Vec<CommissionAssignment>>,
    pub meetings: Option<Vec<Meeting>>,
    /// Details per meeting id; a missing entry fails that meeting only.
    pub details: HashMap<String, MeetingDetails>,
    /// Report text per agenda item number; `None` fails the report call.
    pub reports: Option<HashMap<u32, String>>,
    pub divers: String,
    pub report_calls: AtomicUsize,
    pub detail_calls: Mutex<Vec<String>>,
}

fn offline(what: &str) -> RepositoryError {
    RepositoryError::Network(format!("{what} unavailable"))
}

impl FakeClubApi {
    pub fn report_calls(&self) -> usize {
        self.report_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MemberReader for FakeClubApi {
    async fn list_members(&self, _club_id: &ClubId) -> RepositoryResult<Vec<Member>> {
        self.members.clone().ok_or_else(|| offline("members"))
    }

    async fn list_function_assignments(
        &self,
        _club_id: &ClubId,
    ) -> RepositoryResult<Vec<FunctionAssignment>> {
        self.functions.clone().ok_or_else(|| offline("functions"))
    }

    async fn list_commission_assignments(
        &self,
        _club_id: &ClubId,
    ) -> RepositoryResult<Vec<CommissionAssignment>> {
        self.commissions.clone().ok_or_else(|| offline("commissions"))
    }
}

#[async_trait]
impl MeetingReader for FakeClubApi {
    async fn list_meetings(&self, _club_id: &ClubId) -> RepositoryResult<Vec<Meeting>> {
        self.meetings.clone().ok_or_else(|| offline("meetings"))
    }

    async fn get_meeting_details(
        &self,
        _club_id: &ClubId,
        meeting_id: &MeetingId,
    ) -> RepositoryResult<MeetingDetails> {
        self.detail_calls
            .lock()
            .expect("detail log poisoned")
            .push(meeting_id.to_string());
        self.details
            .get(meeting_id.as_str())
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl ReportReader for FakeClubApi {
    async fn get_all_reports_for_meeting(
        &self,
        _club_id: &ClubId,
        _meeting_id: &MeetingId,
        agenda_items: &[AgendaItem],
    ) -> RepositoryResult<AgendaReports> {
        self.report_calls.fetch_add(1, Ordering::SeqCst);
        let reports = self.reports.as_ref().ok_or_else(|| offline("reports"))?;

        let ordres_avec_contenu = agenda_items
            .iter()
            .cloned()
            .map(|item| {
                let content = reports.get(&item.numero).cloned();
                item.with_content(content)
            })
            .collect();

        Ok(AgendaReports {
            ordres_avec_contenu,
            divers_existant: self.divers.clone(),
        })
    }
}

pub fn club() -> ClubId {
    ClubId::new("7").expect("valid club id")
}

pub fn meeting(id: &str, date: &str) -> Meeting {
    Meeting {
        id: Some(MeetingId::new(id).expect("valid meeting id")),
        date: date.to_string(),
        heure: "19:00".to_string(),
        type_reunion_libelle: "Réunion statutaire".to_string(),
        lieu: "Hôtel de ville".to_string(),
        ..Meeting::default()
    }
}
