//! Command-line requests understood by the `club-report` binary.

use serde::Serialize;
use thiserror::Error;

use crate::domain::types::{ClubId, MeetingId, TypeConstraintError};
use crate::dto::meetings::{MeetingListItem, meeting_list};
use crate::dto::members::MembersPageData;
use crate::dto::minutes::MinutesReport;
use crate::models::config::ClientConfig;
use crate::repository::{MeetingReader, MemberReader, ReportReader};
use crate::services::{ServiceResult, meetings, members, minutes};

pub const USAGE: &str = concat!(
    "usage: club-report members <club-id>\n",
    "       club-report meetings <club-id>\n",
    "       club-report minutes <club-id> <meeting-id>",
);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{}", USAGE)]
    Usage,
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] TypeConstraintError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Members(ClubId),
    Meetings(ClubId),
    Minutes(ClubId, MeetingId),
}

impl Command {
    /// Parses the arguments following the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();

        match args.as_slice() {
            ["members", club] => Ok(Command::Members(ClubId::new(*club)?)),
            ["meetings", club] => Ok(Command::Meetings(ClubId::new(*club)?)),
            ["minutes", club, meeting] => Ok(Command::Minutes(
                ClubId::new(*club)?,
                MeetingId::new(*meeting)?,
            )),
            _ => Err(CommandError::Usage),
        }
    }
}

/// View model printed for a command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Members(MembersPageData),
    Meetings(Vec<MeetingListItem>),
    Minutes(Box<MinutesReport>),
}

/// Runs `command` against the given API client.
pub async fn execute<R>(
    repo: &R,
    config: &ClientConfig,
    command: &Command,
) -> ServiceResult<CommandOutput>
where
    R: MemberReader + MeetingReader + ReportReader + ?Sized,
{
    match command {
        Command::Members(club_id) => {
            let members = members::load_members(repo, club_id).await?;
            Ok(CommandOutput::Members(MembersPageData::new(&members)))
        }
        Command::Meetings(club_id) => {
            let meetings = meetings::load_meetings(repo, club_id).await?;
            Ok(CommandOutput::Meetings(meeting_list(&meetings, config)))
        }
        Command::Minutes(club_id, meeting_id) => {
            let meeting = meetings::find_meeting(repo, club_id, meeting_id).await?;
            let report = minutes::load_minutes(repo, club_id, &meeting).await?;
            Ok(CommandOutput::Minutes(Box::new(report)))
        }
    }
}
