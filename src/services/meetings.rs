//! Meeting list loading with per-meeting attendance pre-fetch.

use futures::future::join_all;

use crate::domain::meeting::Meeting;
use crate::domain::types::{ClubId, MeetingId};
use crate::repository::MeetingReader;
use crate::services::{ServiceError, ServiceResult};

/// Fetches attendance and guests of one meeting, keeping it untouched on failure.
async fn prefetch_details<R>(repo: &R, club_id: &ClubId, mut meeting: Meeting) -> Meeting
where
    R: MeetingReader + ?Sized,
{
    let Some(meeting_id) = meeting.id.clone() else {
        log::warn!("Skipping details of a meeting without id dated {}", meeting.date);
        return meeting;
    };

    match repo.get_meeting_details(club_id, &meeting_id).await {
        Ok(details) => {
            log::debug!(
                "Loaded details of meeting {meeting_id}: {} presences, {} guests",
                details.presences.as_ref().map_or(0, Vec::len),
                details.invites.as_ref().map_or(0, Vec::len)
            );
            meeting.presences = Some(details.presences.unwrap_or_default());
            meeting.invites = Some(details.invites.unwrap_or_default());
            meeting
        }
        Err(err) => {
            log::warn!("Failed to load details of meeting {meeting_id}: {err}");
            meeting
        }
    }
}

/// Loads the meetings of a club, each with its attendance and guests.
///
/// Detail requests run concurrently. A failing detail request leaves that
/// meeting in its listed state; only a failing meeting list is an error.
/// The result keeps the upstream order.
pub async fn load_meetings<R>(repo: &R, club_id: &ClubId) -> ServiceResult<Vec<Meeting>>
where
    R: MeetingReader + ?Sized,
{
    let meetings = repo.list_meetings(club_id).await.map_err(|err| {
        log::error!("Failed to load meetings of club {club_id}: {err}");
        ServiceError::from(err)
    })?;

    if meetings.is_empty() {
        log::info!("No meetings found for club {club_id}");
        return Ok(meetings);
    }

    log::info!("Loaded {} meetings for club {club_id}", meetings.len());

    let meetings = join_all(
        meetings
            .into_iter()
            .map(|meeting| prefetch_details(repo, club_id, meeting)),
    )
    .await;

    Ok(meetings)
}

/// Looks a meeting up in the club's list.
///
/// Returns [`ServiceError::NoResult`] when the club has no meeting with that id.
pub async fn find_meeting<R>(
    repo: &R,
    club_id: &ClubId,
    meeting_id: &MeetingId,
) -> ServiceResult<Meeting>
where
    R: MeetingReader + ?Sized,
{
    let meetings = repo.list_meetings(club_id).await?;

    meetings
        .into_iter()
        .find(|meeting| meeting.id.as_ref() == Some(meeting_id))
        .ok_or(ServiceError::NoResult)
}
