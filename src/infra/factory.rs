use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::RecordStore;
use crate::domain::services::analytics_service::AnalyticsService;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::lead_service::{LeadRepository, LeadService};
use crate::error::AppError;
use crate::infra::stores::json_file_store::JsonFileStore;
use crate::state::AppState;

/// Builds the file-backed store and wires everything behind it.
pub fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    info!("Opening record store at {}", config.data_dir.display());
    let store = Arc::new(JsonFileStore::new(&config.data_dir)?);
    bootstrap_with_store(config, store)
}

/// Same wiring over any store implementation. The store is injected into
/// every repository and service; nothing reaches for ambient globals.
pub fn bootstrap_with_store(
    config: &Config,
    store: Arc<dyn RecordStore>,
) -> Result<AppState, AppError> {
    let lead_repo = Arc::new(LeadRepository::new(store.clone()));
    let lead_service = Arc::new(LeadService::new(lead_repo.clone()));
    let auth_service = Arc::new(AuthService::new(store.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(store.clone(), lead_repo.clone()));

    // First-run initialization: make sure the fixed accounts exist before
    // anyone reaches the login gate.
    auth_service.users()?;

    Ok(AppState {
        config: config.clone(),
        store,
        lead_repo,
        lead_service,
        auth_service,
        analytics_service,
    })
}
