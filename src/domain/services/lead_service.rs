use crate::domain::models::filter::FilterSpec;
use crate::domain::models::lead::Lead;
use crate::domain::models::member::OrgMember;
use crate::domain::ports::{documents, RecordStore};
use crate::domain::services::{defaults, filter, mutations};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Load/save access to the persisted lead collection.
pub struct LeadRepository {
    store: Arc<dyn RecordStore>,
}

impl LeadRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// The persisted collection, or the fixed seed when no document exists.
    /// A document that fails to parse is treated as absent and reseeded
    /// rather than taking the session down; I/O errors still propagate.
    pub fn load(&self) -> Result<Vec<Lead>, AppError> {
        match self.store.read(documents::LEADS) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(leads) => Ok(leads),
                Err(e) => {
                    warn!("Leads document has unexpected shape, reseeding: {e}");
                    self.reseed()
                }
            },
            Ok(None) => self.reseed(),
            Err(e) if e.is_parse_failure() => {
                warn!("Leads document is not valid JSON, reseeding: {e}");
                self.reseed()
            }
            Err(e) => Err(e),
        }
    }

    /// Replaces the whole persisted collection. Called after every mutation,
    /// unconditionally.
    pub fn save(&self, leads: &[Lead]) -> Result<(), AppError> {
        let value = serde_json::to_value(leads).map_err(|e| AppError::StorageParse {
            document: documents::LEADS.to_string(),
            source: e,
        })?;
        self.store.write(documents::LEADS, &value)
    }

    fn reseed(&self) -> Result<Vec<Lead>, AppError> {
        let seed = defaults::default_leads();
        self.save(&seed)?;
        Ok(seed)
    }
}

/// The mutators and the filter, wired to persistence: each mutation applies
/// the pure transformation, writes the new collection back, and returns it.
/// A failed mutation leaves the persisted document untouched.
pub struct LeadService {
    repo: Arc<LeadRepository>,
}

impl LeadService {
    pub fn new(repo: Arc<LeadRepository>) -> Self {
        Self { repo }
    }

    pub fn leads(&self) -> Result<Vec<Lead>, AppError> {
        self.repo.load()
    }

    pub fn filtered(&self, spec: &FilterSpec) -> Result<Vec<Lead>, AppError> {
        Ok(filter::apply(&self.repo.load()?, spec))
    }

    /// Returns the credits the caller must deduct; the balance itself is
    /// owned by the caller, never by the core.
    pub fn unlock(&self, lead_id: &str, available_credits: u32) -> Result<u32, AppError> {
        let leads = self.repo.load()?;
        let (next, cost) = mutations::unlock(&leads, lead_id, available_credits)?;
        self.repo.save(&next)?;
        debug!(lead_id, cost, "lead unlocked");
        Ok(cost)
    }

    pub fn like(&self, lead_id: &str, user_id: &str) -> Result<Vec<Lead>, AppError> {
        let leads = self.repo.load()?;
        let next = mutations::like(&leads, lead_id, user_id)?;
        self.repo.save(&next)?;
        Ok(next)
    }

    pub fn dislike(&self, lead_id: &str, user_id: &str) -> Result<Vec<Lead>, AppError> {
        let leads = self.repo.load()?;
        let next = mutations::dislike(&leads, lead_id, user_id)?;
        self.repo.save(&next)?;
        Ok(next)
    }

    pub fn assign(
        &self,
        lead_id: &str,
        member_id: &str,
        roster: &[OrgMember],
    ) -> Result<Vec<Lead>, AppError> {
        let leads = self.repo.load()?;
        let next = mutations::assign(&leads, lead_id, member_id, roster)?;
        self.repo.save(&next)?;
        debug!(lead_id, member_id, "lead assigned");
        Ok(next)
    }
}
