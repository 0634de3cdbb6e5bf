//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::meeting::{AgendaItem, AgendaReports, Meeting, MeetingDetails};
use crate::domain::member::{CommissionAssignment, FunctionAssignment, Member};
use crate::domain::types::{ClubId, MeetingId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{MeetingReader, MemberReader, ReportReader};

mock! {
    pub Repository {}

    #[async_trait]
    impl MemberReader for Repository {
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

    #[async_trait]
    impl MeetingReader for Repository {
        async fn list_meetings(&self, club_id: &ClubId) -> RepositoryResult<Vec<Meeting>>;
        async fn get_meeting_details(
            &self,
            club_id: &ClubId,
            meeting_id: &MeetingId,
        ) -> RepositoryResult<MeetingDetails>;
    }

    #[async_trait]
    impl ReportReader for Repository {
        async fn get_all_reports_for_meeting(
            &self,
            club_id: &ClubId,
            meeting_id: &MeetingId,
            agenda_items: &[AgendaItem],
        ) -> RepositoryResult<AgendaReports>;
    }
}
