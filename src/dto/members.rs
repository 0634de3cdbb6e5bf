//! DTOs used by the members directory view.

use serde::Serialize;

use crate::domain::member::{Member, MemberCommission, MemberFunction};
use crate::domain::types::MemberId;

const RESPONSIBLE_SUFFIX: &str = " (Responsible)";

/// One row of the members directory.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberCard {
    pub id: MemberId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Label of the member's first function; `None` when none is assigned.
    pub primary_role: Option<String>,
    /// All commissions, comma-joined; `None` when the member sits on none.
    pub commissions: Option<String>,
}

fn with_responsible_suffix(label: &str, responsible: bool) -> String {
    if responsible {
        format!("{label}{RESPONSIBLE_SUFFIX}")
    } else {
        label.to_string()
    }
}

fn role_label(function: &MemberFunction) -> Option<String> {
    function
        .label()
        .map(|label| with_responsible_suffix(label, function.est_responsable))
}

fn commissions_label(commissions: &[MemberCommission]) -> Option<String> {
    let labels: Vec<String> = commissions
        .iter()
        .filter(|commission| commission.has_name())
        .map(|commission| {
            with_responsible_suffix(commission.nom_commission.trim(), commission.est_responsable)
        })
        .collect();

    (!labels.is_empty()).then(|| labels.join(", "))
}

impl From<&Member> for MemberCard {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            full_name: member.full_name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            primary_role: member.primary_function().and_then(role_label),
            commissions: member
                .commissions
                .as_deref()
                .and_then(commissions_label),
        }
    }
}

/// Data required to render the members directory.
#[derive(Debug, Serialize)]
pub struct MembersPageData {
    pub members: Vec<MemberCard>,
}

impl MembersPageData {
    pub fn new(members: &[Member]) -> Self {
        Self {
            members: members.iter().map(MemberCard::from).collect(),
        }
    }
}
