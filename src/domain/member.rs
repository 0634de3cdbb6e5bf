use serde::{Deserialize, Serialize};

use crate::domain::types::{MemberId, is_present, null_as_default};

/// Club member as returned by the members endpoint.
///
/// `fonctions` and `commissions` stay `None` until the enrichment join has
/// run; after it they are always `Some`, possibly empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonctions: Option<Vec<MemberFunction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commissions: Option<Vec<MemberCommission>>,
}

fn default_active() -> bool {
    true
}

impl Member {
    #[must_use]
    pub fn new(id: MemberId, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            email: email.into().trim().to_lowercase(),
            phone: None,
            is_active: true,
            fonctions: None,
            commissions: None,
        }
    }

    /// Returns `true` once functions and commissions have been attached.
    pub fn is_enriched(&self) -> bool {
        self.fonctions.is_some() && self.commissions.is_some()
    }

    /// The function shown as the member's role: only the first one counts.
    pub fn primary_function(&self) -> Option<&MemberFunction> {
        self.fonctions.as_ref().and_then(|functions| functions.first())
    }
}

/// A role held by a member within the club.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberFunction {
    #[serde(default)]
    pub nom_fonction: Option<String>,
    #[serde(default)]
    pub comite_nom: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub est_responsable: bool,
}

impl MemberFunction {
    /// Function name, falling back to the committee it maps to.
    pub fn label(&self) -> Option<&str> {
        [self.nom_fonction.as_deref(), self.comite_nom.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
    }
}

/// Committee membership, independent of the member's function.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberCommission {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nom_commission: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub est_responsable: bool,
}

impl MemberCommission {
    pub fn has_name(&self) -> bool {
        is_present(Some(&self.nom_commission))
    }
}

/// Function assignment row returned by the club-wide functions endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionAssignment {
    pub membre_id: MemberId,
    #[serde(flatten)]
    pub function: MemberFunction,
}

/// Commission assignment row returned by the club-wide commissions endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommissionAssignment {
    pub membre_id: MemberId,
    #[serde(flatten)]
    pub commission: MemberCommission,
}
