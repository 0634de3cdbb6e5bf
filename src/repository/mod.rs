//! Read-only ports onto the club API.
//!
//! Services depend on these traits only; [`http::HttpRepository`] is the
//! production implementation and tests substitute fakes or the `mockall`
//! mock. One client instance is created per process and shared by
//! reference with every service call.

use async_trait::async_trait;

use crate::domain::meeting::{AgendaItem, AgendaReports, Meeting, MeetingDetails};
use crate::domain::member::{CommissionAssignment, FunctionAssignment, Member};
use crate::domain::types::{ClubId, MeetingId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpRepository;

/// Members directory of a club and the club-wide role assignments.
#[async_trait]
pub trait MemberReader: Send + Sync {
    async fn list_members(&self, club_id: &ClubId) -> RepositoryResult<Vec<Member>>;
    async fn list_function_assignments(
        &self,
        club_id: &ClubId,
    ) -> RepositoryResult<Vec<FunctionAssignment>>;
    async fn list_commission_assignments(
        &self,
        club_id: &ClubId,
    ) -> RepositoryResult<Vec<CommissionAssignment>>;
}

/// Meetings of a club and their attendance/guest/agenda details.
#[async_trait]
pub trait MeetingReader: Send + Sync {
    async fn list_meetings(&self, club_id: &ClubId) -> RepositoryResult<Vec<Meeting>>;
    async fn get_meeting_details(
        &self,
        club_id: &ClubId,
        meeting_id: &MeetingId,
    ) -> RepositoryResult<MeetingDetails>;
}

/// Report text written for a meeting's agenda items.
#[async_trait]
pub trait ReportReader: Send + Sync {
    /// Fetches the report of every given agenda item plus the "divers" text.
    ///
    /// Items come back in the order they were passed in.
    async fn get_all_reports_for_meeting(
        &self,
        club_id: &ClubId,
        meeting_id: &MeetingId,
        agenda_items: &[AgendaItem],
    ) -> RepositoryResult<AgendaReports>;
}
