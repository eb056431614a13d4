use crate::domain::models::member::OrgMember;
use serde::{Deserialize, Serialize};

/// A prospective business contact surfaced for review. Persisted with the
/// camelCase field names of the source documents; `score` and `unlockCost`
/// are string-encoded integers there and are kept that way, with typed
/// accessors below.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    /// "City, Country" — the country (last comma-delimited token) is the
    /// unit the filter matches on.
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_posted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_time: Option<String>,
    /// ReceptoNet leads carry unlock-for-credits semantics; org-network
    /// leads carry contacted/not-contacted semantics instead.
    #[serde(default)]
    pub is_recep_net: bool,
    pub score: String,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_cost: Option<String>,
    #[serde(default)]
    pub contacted: bool,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub disliked_by: Vec<String>,
    #[serde(default)]
    pub assigned_to: Option<AssignedMember>,
}

/// Snapshot of the roster entry captured at assignment time. A copy, not a
/// live reference: later roster edits do not rewrite historic assignments.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignedMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<&OrgMember> for AssignedMember {
    fn from(member: &OrgMember) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            role: member.role.clone(),
            avatar: member.avatar.clone(),
        }
    }
}

impl Lead {
    /// Country component of `location`: everything after the final comma,
    /// trimmed. A location with no comma is its own country.
    pub fn country(&self) -> &str {
        self.location
            .rsplit(',')
            .next()
            .unwrap_or(&self.location)
            .trim()
    }

    /// `None` when the stored score is not a valid integer.
    pub fn score_value(&self) -> Option<i64> {
        self.score.trim().parse().ok()
    }

    /// Credits required to unlock; a missing or malformed cost is free.
    pub fn unlock_cost_value(&self) -> u32 {
        self.unlock_cost
            .as_deref()
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_by.iter().any(|id| id == user_id)
    }

    pub fn is_disliked_by(&self, user_id: &str) -> bool {
        self.disliked_by.iter().any(|id| id == user_id)
    }
}
