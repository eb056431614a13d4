use serde::{Deserialize, Serialize};

/// Counts for the ReceptoNet partition. Unlocked + yet-to-unlock always
/// equals the total; liked/disliked/assigned overlap freely.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReceptoNetStats {
    pub total: usize,
    pub unlocked: usize,
    pub yet_to_unlock: usize,
    pub liked: usize,
    pub disliked: usize,
    pub assigned: usize,
}

/// Counts for the org-network partition, governed by the contacted flag
/// instead of the lock.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrgNetworkStats {
    pub total: usize,
    pub contacted: usize,
    pub yet_to_contact: usize,
    pub liked: usize,
    pub disliked: usize,
    pub assigned: usize,
}

/// Derived, never authoritative: recomputed from the lead collection on
/// every change and cached for the analytics view.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub recepto_net_leads: ReceptoNetStats,
    pub org_network_leads: OrgNetworkStats,
}

impl ReceptoNetStats {
    pub fn unlocked_ratio(&self) -> f64 {
        ratio(self.unlocked, self.total)
    }
}

impl OrgNetworkStats {
    pub fn contacted_ratio(&self) -> f64 {
        ratio(self.contacted, self.total)
    }
}

/// Fraction of `part` in `total`, with an empty partition reading as 0
/// rather than NaN.
pub fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// One month of the synthetic trend series behind the generation chart.
/// The series carries no correctness contract beyond replaying the same
/// values across reloads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub name: String,
    pub recepto_net: u32,
    pub org_network: u32,
}
