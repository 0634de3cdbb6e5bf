use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AgendaItemId, GuestId, MeetingId, MemberId, is_present, null_as_default,
};

/// Meeting (réunion) as listed for a club.
///
/// The nested lists are only filled once a detail fetch has run; `None`
/// means "not fetched", an empty vector means "fetched, nothing there".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(default)]
    pub id: Option<MeetingId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heure: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_reunion_libelle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lieu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presences: Option<Vec<Attendance>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invites: Option<Vec<Guest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordres_du_jour: Option<Vec<AgendaItem>>,
}

impl Meeting {
    /// Calendar date of the meeting.
    ///
    /// Accepts plain ISO dates as well as ISO date-times (with or without an
    /// offset); anything else yields `None`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(date_time) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(date_time.date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|date_time| date_time.date())
    }

    /// Start of the meeting: the parsed date combined with `heure`.
    ///
    /// `heure` may be `HH:MM`, `HH:MM:SS` or `HHhMM`.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = self.parsed_date()?;
        let raw = self.heure.trim();
        ["%H:%M", "%H:%M:%S", "%Hh%M"]
            .into_iter()
            .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
            .map(|time| date.and_time(time))
    }

    pub fn attendance_count(&self) -> usize {
        self.presences.as_ref().map_or(0, Vec::len)
    }

    pub fn guest_count(&self) -> usize {
        self.invites.as_ref().map_or(0, Vec::len)
    }
}

/// Attendance, guests and agenda returned by the meeting detail endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    #[serde(default)]
    pub presences: Option<Vec<Attendance>>,
    #[serde(default)]
    pub invites: Option<Vec<Guest>>,
    #[serde(default)]
    pub ordres_du_jour: Option<Vec<AgendaItem>>,
}

/// One numbered topic of a meeting's agenda.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    #[serde(default)]
    pub id: Option<AgendaItemId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub numero: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub contenu: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_content: bool,
}

impl AgendaItem {
    #[must_use]
    pub fn new(numero: u32, description: impl Into<String>) -> Self {
        Self {
            numero,
            description: description.into(),
            ..Self::default()
        }
    }

    /// Returns the item with `contenu` replaced and `has_content` derived from it.
    #[must_use]
    pub fn with_content(mut self, contenu: Option<String>) -> Self {
        self.contenu = contenu;
        self.has_content = is_present(self.contenu.as_deref());
        self
    }

    /// Recomputes `has_content` from the current content.
    #[must_use]
    pub fn normalized(self) -> Self {
        let contenu = self.contenu.clone();
        self.with_content(contenu)
    }
}

/// Raw attendance record.
///
/// Upstream endpoints disagree on where the member's display name lives, so
/// all known candidate fields are kept and resolved later.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(default)]
    pub membre_id: Option<MemberId>,
    #[serde(default)]
    pub nom_membre: Option<String>,
    #[serde(default)]
    pub nom_complet_membre: Option<String>,
    #[serde(default)]
    pub nom_complet: Option<String>,
}

/// Guest (invité) attending a meeting.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    #[serde(default)]
    pub id: Option<GuestId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nom: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prenom: String,
}

/// Agenda items merged with their report text, plus the "divers" section.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AgendaReports {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ordres_avec_contenu: Vec<AgendaItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub divers_existant: String,
}
