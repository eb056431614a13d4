use crate::config::Config;
use crate::domain::ports::RecordStore;
use crate::domain::services::analytics_service::AnalyticsService;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::lead_service::{LeadRepository, LeadService};
use std::sync::Arc;

/// Everything the presentation layer consumes, wired once at startup. The
/// record store is the only shared resource underneath; all operations are
/// synchronous and complete before returning.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn RecordStore>,
    pub lead_repo: Arc<LeadRepository>,
    pub lead_service: Arc<LeadService>,
    pub auth_service: Arc<AuthService>,
    pub analytics_service: Arc<AnalyticsService>,
}
