//! `reqwest` implementation of the club API readers.

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::meeting::{AgendaItem, AgendaReports, Meeting, MeetingDetails};
use crate::domain::member::{CommissionAssignment, FunctionAssignment, Member};
use crate::domain::types::{ClubId, MeetingId};
use crate::models::config::ClientConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{MeetingReader, MemberReader, ReportReader};

/// Body of the per-item report and "divers" endpoints.
#[derive(Debug, Default, Deserialize)]
struct ReportBody {
    #[serde(default)]
    contenu: Option<String>,
}

/// HTTP client for the club API.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    root: Url,
}

impl HttpRepository {
    /// Builds a client honouring the configured base URL, prefix and timeout.
    pub fn new(config: &ClientConfig) -> RepositoryResult<Self> {
        let root = Url::parse(&config.api_root())
            .map_err(|e| RepositoryError::Configuration(format!("Invalid base url: {e}")))?;

        if root.cannot_be_a_base() {
            return Err(RepositoryError::Configuration(format!(
                "Base url cannot carry a path: {root}"
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("{}/{}", config.app_name, config.version))
            .build()
            .map_err(RepositoryError::from)?;

        Ok(Self { client, root })
    }

    /// Appends percent-encoded path segments to the API root.
    fn endpoint(&self, segments: &[&str]) -> RepositoryResult<Url> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| {
                RepositoryError::Configuration(format!("Invalid api root: {}", self.root))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url) -> RepositoryResult<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            log::warn!("GET {url} failed with {status}");
            return Err(RepositoryError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RepositoryError::Decode(format!("{url}: {e}")))
    }

    /// Like [`Self::get_json`] but maps a 404 to `None`.
    async fn get_optional_json<T>(&self, url: Url) -> RepositoryResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.get_json(url).await {
            Ok(value) => Ok(Some(value)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn fetch_item_report(
        &self,
        club_id: &ClubId,
        meeting_id: &MeetingId,
        item: &AgendaItem,
    ) -> RepositoryResult<AgendaItem> {
        let key = item
            .id
            .as_ref()
            .map_or_else(|| item.numero.to_string(), ToString::to_string);

        let url = self.endpoint(&[
            "clubs",
            club_id.as_str(),
            "reunions",
            meeting_id.as_str(),
            "ordres-du-jour",
            key.as_str(),
            "rapport",
        ])?;

        let report = self.get_optional_json::<ReportBody>(url).await?;

        Ok(item
            .clone()
            .with_content(report.and_then(|body| body.contenu)))
    }

    async fn fetch_divers(
        &self,
        club_id: &ClubId,
        meeting_id: &MeetingId,
    ) -> RepositoryResult<String> {
        let url = self.endpoint(&[
            "clubs",
            club_id.as_str(),
            "reunions",
            meeting_id.as_str(),
            "divers",
        ])?;
        let body = self.get_optional_json::<ReportBody>(url).await?;
        Ok(body.and_then(|b| b.contenu).unwrap_or_default())
    }
}

#[async_trait]
impl MemberReader for HttpRepository {
    async fn list_members(&self, club_id: &ClubId) -> RepositoryResult<Vec<Member>> {
        let url = self.endpoint(&["clubs", club_id.as_str(), "membres"])?;
        self.get_json(url).await
    }

    async fn list_function_assignments(
        &self,
        club_id: &ClubId,
    ) -> RepositoryResult<Vec<FunctionAssignment>> {
        let url = self.endpoint(&["clubs", club_id.as_str(), "membres", "fonctions"])?;
        self.get_json(url).await
    }

    async fn list_commission_assignments(
        &self,
        club_id: &ClubId,
    ) -> RepositoryResult<Vec<CommissionAssignment>> {
        let url = self.endpoint(&["clubs", club_id.as_str(), "membres", "commissions"])?;
        self.get_json(url).await
    }
}

#[async_trait]
impl MeetingReader for HttpRepository {
    async fn list_meetings(&self, club_id: &ClubId) -> RepositoryResult<Vec<Meeting>> {
        let url = self.endpoint(&["clubs", club_id.as_str(), "reunions"])?;
        self.get_json(url).await
    }

    async fn get_meeting_details(
        &self,
        club_id: &ClubId,
        meeting_id: &MeetingId,
    ) -> RepositoryResult<MeetingDetails> {
        let url = self.endpoint(&[
            "clubs",
            club_id.as_str(),
            "reunions",
            meeting_id.as_str(),
        ])?;
        self.get_json(url).await
    }
}

#[async_trait]
impl ReportReader for HttpRepository {
    async fn get_all_reports_for_meeting(
        &self,
        club_id: &ClubId,
        meeting_id: &MeetingId,
        agenda_items: &[AgendaItem],
    ) -> RepositoryResult<AgendaReports> {
        let items = try_join_all(
            agenda_items
                .iter()
                .map(|item| self.fetch_item_report(club_id, meeting_id, item)),
        );
        let divers = self.fetch_divers(club_id, meeting_id);

        let (ordres_avec_contenu, divers_existant) = futures::try_join!(items, divers)?;

        Ok(AgendaReports {
            ordres_avec_contenu,
            divers_existant,
        })
    }
}
