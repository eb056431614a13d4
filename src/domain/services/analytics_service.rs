use crate::domain::models::analytics::{
    AnalyticsSnapshot, OrgNetworkStats, ReceptoNetStats, TrendPoint,
};
use crate::domain::models::lead::Lead;
use crate::domain::ports::{documents, RecordStore};
use crate::domain::services::lead_service::LeadRepository;
use crate::error::AppError;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Grouped counts over the lead collection, partitioned by source network.
pub fn aggregate(leads: &[Lead]) -> AnalyticsSnapshot {
    let mut recepto = ReceptoNetStats::default();
    let mut org = OrgNetworkStats::default();

    for lead in leads {
        let liked = !lead.liked_by.is_empty();
        let disliked = !lead.disliked_by.is_empty();
        let assigned = lead.assigned_to.is_some();

        if lead.is_recep_net {
            recepto.total += 1;
            if lead.is_locked {
                recepto.yet_to_unlock += 1;
            } else {
                recepto.unlocked += 1;
            }
            recepto.liked += liked as usize;
            recepto.disliked += disliked as usize;
            recepto.assigned += assigned as usize;
        } else {
            org.total += 1;
            if lead.contacted {
                org.contacted += 1;
            } else {
                org.yet_to_contact += 1;
            }
            org.liked += liked as usize;
            org.disliked += disliked as usize;
            org.assigned += assigned as usize;
        }
    }

    AnalyticsSnapshot {
        recepto_net_leads: recepto,
        org_network_leads: org,
    }
}

/// Random monotonically increasing walk, one point per month. Plausibility
/// only; the values are uncorrelated with the real lead counts.
fn generate_trend_series() -> Vec<TrendPoint> {
    let mut rng = rand::thread_rng();
    let mut recepto: u32 = 150;
    let mut org: u32 = 200;

    MONTHS
        .iter()
        .map(|month| {
            recepto += rng.gen_range(10..=50);
            org += rng.gen_range(10..=50);
            TrendPoint {
                name: month.to_string(),
                recepto_net: recepto,
                org_network: org,
            }
        })
        .collect()
}

/// Derives the analytics view's data: the snapshot recomputed from the lead
/// collection, cached under its own document, and the persisted synthetic
/// trend series.
pub struct AnalyticsService {
    store: Arc<dyn RecordStore>,
    lead_repo: Arc<LeadRepository>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn RecordStore>, lead_repo: Arc<LeadRepository>) -> Self {
        Self { store, lead_repo }
    }

    /// Recomputes the snapshot from the current collection and caches it.
    pub fn refresh(&self) -> Result<AnalyticsSnapshot, AppError> {
        let leads = self.lead_repo.load()?;
        let snapshot = aggregate(&leads);
        let value = serde_json::to_value(&snapshot).map_err(|e| AppError::StorageParse {
            document: documents::ANALYTICS_STATS.to_string(),
            source: e,
        })?;
        self.store.write(documents::ANALYTICS_STATS, &value)?;
        debug!(
            recepto_total = snapshot.recepto_net_leads.total,
            org_total = snapshot.org_network_leads.total,
            "analytics snapshot refreshed"
        );
        Ok(snapshot)
    }

    /// The cached snapshot, recomputing when the cache is absent or
    /// unreadable. The cache is never authoritative.
    pub fn snapshot(&self) -> Result<AnalyticsSnapshot, AppError> {
        match self.store.read(documents::ANALYTICS_STATS) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(snapshot) => Ok(snapshot),
                Err(e) => {
                    warn!("Analytics cache has unexpected shape, recomputing: {e}");
                    self.refresh()
                }
            },
            Ok(None) => self.refresh(),
            Err(e) if e.is_parse_failure() => {
                warn!("Analytics cache is not valid JSON, recomputing: {e}");
                self.refresh()
            }
            Err(e) => Err(e),
        }
    }

    /// The synthetic series behind the generation chart, generated once and
    /// persisted so reloads replay identical values.
    pub fn trend_series(&self) -> Result<Vec<TrendPoint>, AppError> {
        match self.store.read(documents::LEAD_GENERATION_DATA) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(series) => Ok(series),
                Err(e) => {
                    warn!("Trend series document has unexpected shape, regenerating: {e}");
                    self.regenerate_trend_series()
                }
            },
            Ok(None) => self.regenerate_trend_series(),
            Err(e) if e.is_parse_failure() => {
                warn!("Trend series document is not valid JSON, regenerating: {e}");
                self.regenerate_trend_series()
            }
            Err(e) => Err(e),
        }
    }

    fn regenerate_trend_series(&self) -> Result<Vec<TrendPoint>, AppError> {
        let series = generate_trend_series();
        let value = serde_json::to_value(&series).map_err(|e| AppError::StorageParse {
            document: documents::LEAD_GENERATION_DATA.to_string(),
            source: e,
        })?;
        self.store.write(documents::LEAD_GENERATION_DATA, &value)?;
        Ok(series)
    }
}
